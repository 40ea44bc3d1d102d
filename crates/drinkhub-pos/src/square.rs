//! The Square adapter: the one fully-implemented vendor.

use async_trait::async_trait;
use drinkhub_core::{
    PosClientSettings, PosConfig, PosCredentials, PosLocationInfo, PosOrder, PosOrderResult,
    PosOrderStatus, PosProduct,
};
use drinkhub_square::{location_info, normalize_catalog, order_status, SquareClient};

use crate::adapter::{access_token, require_credential, require_location, PosAdapter};
use crate::error::PosError;

/// Adapter over [`drinkhub_square::SquareClient`].
///
/// The client is built lazily per call so a missing access token surfaces as
/// [`PosError::MissingCredentials`] from the operation that needed it, not
/// from adapter construction — the factory can always hand out an adapter,
/// and diagnostics like `validate_credentials` stay callable.
pub struct SquareAdapter {
    credentials: PosCredentials,
    config: PosConfig,
    settings: PosClientSettings,
    base_url: Option<String>,
}

impl SquareAdapter {
    #[must_use]
    pub fn new(
        credentials: PosCredentials,
        config: PosConfig,
        settings: PosClientSettings,
    ) -> Self {
        Self {
            credentials,
            config,
            settings,
            base_url: None,
        }
    }

    /// Like [`SquareAdapter::new`] but pointed at an explicit base URL, for
    /// tests against a wiremock server.
    #[must_use]
    pub fn with_base_url(
        credentials: PosCredentials,
        config: PosConfig,
        settings: PosClientSettings,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            config,
            settings,
            base_url: Some(base_url.into()),
        }
    }

    fn client(&self) -> Result<SquareClient, PosError> {
        let token = require_credential(access_token(&self.credentials), "Access token", "Square")?;
        let client = match &self.base_url {
            Some(base_url) => SquareClient::with_base_url(token, &self.settings, base_url)?,
            None => SquareClient::new(token, &self.settings)?,
        };
        Ok(client)
    }
}

#[async_trait]
impl PosAdapter for SquareAdapter {
    fn provider(&self) -> &str {
        "square"
    }

    async fn test_connection(&self) -> Result<bool, PosError> {
        let client = self.client()?;
        let locations = client.list_locations().await?;
        Ok(!locations.is_empty())
    }

    async fn fetch_menu(&self) -> Result<Vec<PosProduct>, PosError> {
        let client = self.client()?;
        let objects = client.list_catalog().await?;
        Ok(normalize_catalog(&objects))
    }

    async fn submit_order(&self, order: &PosOrder) -> Result<PosOrderResult, PosError> {
        let client = self.client()?;

        let location_id = if order.location_id.is_empty() {
            require_location(&self.config, "Square")?.to_owned()
        } else {
            order.location_id.clone()
        };

        // Vendor rejections and request failures are a business outcome at
        // this boundary, not an error.
        match client.create_order(order, &location_id).await {
            Ok(order_id) => Ok(PosOrderResult::ok(order_id)),
            Err(e) => {
                tracing::warn!(error = %e, location_id, "Square order submission failed");
                Ok(PosOrderResult::failed(e.to_string()))
            }
        }
    }

    async fn get_location(&self, location_id: &str) -> Result<PosLocationInfo, PosError> {
        let client = self.client()?;
        let location = client.get_location(location_id).await?;
        Ok(location_info(&location))
    }

    async fn validate_credentials(&self) -> Result<bool, PosError> {
        if access_token(&self.credentials).is_none() {
            return Ok(false);
        }
        self.test_connection().await
    }

    async fn get_order_status(&self, order_id: &str) -> Result<PosOrderStatus, PosError> {
        let client = self.client()?;
        let order = client.get_order(order_id).await?;
        Ok(order_status(&order))
    }
}
