//! Orchestration layer enforcing integration lifecycle rules around adapter
//! calls.
//!
//! Two propagation policies coexist here on purpose. Menu sync, order
//! submission, connection test, and credential validation catch every
//! expected failure into a result value; callers never need error handling
//! for those paths. Location and order-status lookups propagate errors,
//! because their failures are configuration or programmer errors the caller
//! must decide how to surface.

use drinkhub_core::{
    PosConfig, PosCredentials, PosIntegration, PosLocationInfo, PosOrder, PosOrderResult,
    PosOrderStatus, PosProduct,
};
use serde::{Deserialize, Serialize};

use crate::adapter::PosAdapter;
use crate::error::PosError;
use crate::factory::AdapterFactory;

const INACTIVE_ERROR: &str = "POS integration is not active";
const MISSING_LOCATION_ERROR: &str = "Location ID is required for order submission";

/// Outcome of a connection test, with best-effort location enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionResult {
    pub success: bool,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a menu sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMenuResult {
    pub success: bool,
    pub products_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<PosProduct>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncMenuResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            products_count: 0,
            products: None,
            error: Some(error.into()),
        }
    }
}

/// The entry point the route layer calls.
///
/// Holds no state beyond the adapter factory; every call is an independent
/// unit of work. Concurrent calls for the same integration are not
/// serialized here — at-most-one-sync-in-flight is the orchestrating
/// service's policy to impose if it wants one.
pub struct IntegrationManager {
    factory: AdapterFactory,
}

impl IntegrationManager {
    #[must_use]
    pub fn new(factory: AdapterFactory) -> Self {
        Self { factory }
    }

    /// Tests whether the integration's credentials work against the vendor.
    ///
    /// Callable regardless of `is_active` (diagnostic, not transactional).
    /// Never returns an error: adapter-creation failures and every adapter
    /// error become `success: false` with a message. When the test succeeds
    /// and a location is configured, the location's id and name are fetched
    /// as enrichment; a failure there is logged and swallowed.
    pub async fn test_connection(&self, integration: &PosIntegration) -> TestConnectionResult {
        let mut result = TestConnectionResult {
            success: false,
            provider: integration.provider.clone(),
            location_id: None,
            location_name: None,
            error: None,
        };

        let adapter = match self.adapter_for(integration) {
            Ok(adapter) => adapter,
            Err(e) => {
                result.error = Some(e.to_string());
                return result;
            }
        };

        match adapter.test_connection().await {
            Ok(true) => result.success = true,
            Ok(false) => result.error = Some("Connection test failed".to_string()),
            Err(e) => result.error = Some(e.to_string()),
        }

        if result.success {
            if let Some(location_id) = integration.config.location_id.as_deref() {
                match adapter.get_location(location_id).await {
                    Ok(info) => {
                        result.location_id = Some(info.id);
                        result.location_name = Some(info.name);
                    }
                    Err(e) => {
                        // Enrichment only; the connection test already passed.
                        tracing::warn!(
                            error = %e,
                            location_id,
                            "failed to fetch location info during connection test"
                        );
                    }
                }
            }
        }

        result
    }

    /// True iff the credentials check out. Every error, including an
    /// unsupported provider, becomes `false` — this call never propagates.
    pub async fn validate_credentials(
        &self,
        provider: &str,
        credentials: PosCredentials,
        config: PosConfig,
    ) -> bool {
        let adapter = match self.factory.create_adapter(provider, credentials, config) {
            Ok(adapter) => adapter,
            Err(e) => {
                tracing::debug!(error = %e, provider, "credential validation failed");
                return false;
            }
        };
        adapter.validate_credentials().await.unwrap_or(false)
    }

    /// Pulls the vendor's full catalog for an active integration.
    ///
    /// An inactive integration short-circuits to `success: false` before any
    /// adapter is constructed or the network is touched.
    pub async fn sync_menu(&self, integration: &PosIntegration) -> SyncMenuResult {
        if !integration.is_active {
            return SyncMenuResult::failed(INACTIVE_ERROR);
        }

        let adapter = match self.adapter_for(integration) {
            Ok(adapter) => adapter,
            Err(e) => return SyncMenuResult::failed(e.to_string()),
        };

        match adapter.fetch_menu().await {
            Ok(products) => SyncMenuResult {
                success: true,
                products_count: products.len(),
                products: Some(products),
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, integration_id = %integration.id, "menu sync failed");
                SyncMenuResult::failed(e.to_string())
            }
        }
    }

    /// Pushes an order to the vendor for an active integration.
    ///
    /// When the order's `location_id` is empty it is backfilled in place
    /// from the integration's configured location — callers must treat the
    /// passed order as potentially modified. If no location resolves, the
    /// call fails without touching the vendor.
    pub async fn submit_order(
        &self,
        integration: &PosIntegration,
        order: &mut PosOrder,
    ) -> PosOrderResult {
        if !integration.is_active {
            return PosOrderResult::failed(INACTIVE_ERROR);
        }

        if order.location_id.is_empty() {
            if let Some(location_id) = integration.config.location_id.clone() {
                order.location_id = location_id;
            }
        }
        if order.location_id.is_empty() {
            return PosOrderResult::failed(MISSING_LOCATION_ERROR);
        }

        let adapter = match self.adapter_for(integration) {
            Ok(adapter) => adapter,
            Err(e) => return PosOrderResult::failed(e.to_string()),
        };

        match adapter.submit_order(order).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, integration_id = %integration.id, "order submission failed");
                PosOrderResult::failed(e.to_string())
            }
        }
    }

    /// Looks up location metadata. The explicit `location_id` wins over the
    /// integration's configured one.
    ///
    /// # Errors
    ///
    /// Propagates, asymmetrically with the result-wrapped calls:
    /// [`PosError::MissingConfig`] when neither id resolves,
    /// [`PosError::UnsupportedProvider`] for an unknown provider, and
    /// whatever the adapter raises (including `NotFound`).
    pub async fn get_location_info(
        &self,
        integration: &PosIntegration,
        location_id: Option<&str>,
    ) -> Result<PosLocationInfo, PosError> {
        // An empty explicit id counts as absent, so the configured location
        // still applies.
        let resolved = location_id
            .filter(|id| !id.is_empty())
            .or_else(|| {
                integration
                    .config
                    .location_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
            })
            .ok_or_else(|| {
                PosError::MissingConfig("Location ID is required for location lookup".to_string())
            })?;

        let adapter = self.adapter_for(integration)?;
        adapter.get_location(resolved).await
    }

    /// Fetches the vendor-side state of a previously submitted order.
    ///
    /// # Errors
    ///
    /// Propagates adapter errors; an unknown order is a
    /// [`PosError::NotFound`]-class error, never a status value.
    pub async fn get_order_status(
        &self,
        integration: &PosIntegration,
        order_id: &str,
    ) -> Result<PosOrderStatus, PosError> {
        let adapter = self.adapter_for(integration)?;
        adapter.get_order_status(order_id).await
    }

    #[must_use]
    pub fn supported_providers(&self) -> Vec<String> {
        self.factory.supported_providers()
    }

    #[must_use]
    pub fn is_provider_supported(&self, provider: &str) -> bool {
        self.factory.is_provider_supported(provider)
    }

    fn adapter_for(&self, integration: &PosIntegration) -> Result<Box<dyn PosAdapter>, PosError> {
        self.factory.create_adapter(
            &integration.provider,
            integration.credentials.clone(),
            integration.config.clone(),
        )
    }
}
