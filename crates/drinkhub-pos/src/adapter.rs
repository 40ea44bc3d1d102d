//! The capability contract every POS vendor integration satisfies.

use async_trait::async_trait;
use drinkhub_core::{
    PosConfig, PosCredentials, PosLocationInfo, PosOrder, PosOrderResult, PosOrderStatus,
    PosProduct,
};

use crate::error::PosError;

/// One POS vendor integration.
///
/// All operations are asynchronous and may block on network I/O. Vendor wire
/// shapes never appear in this contract; only the vendor-neutral model from
/// `drinkhub-core` crosses it.
///
/// Error policy per operation:
/// - `submit_order` reports vendor-side rejections as
///   `Ok(PosOrderResult { success: false, .. })`, never as `Err`.
/// - `get_location` and `get_order_status` fail with
///   [`PosError::NotFound`] when the vendor has no such record.
/// - Precondition failures (missing credential fields, missing config) are
///   `Err(MissingCredentials)` / `Err(MissingConfig)` raised before any
///   vendor call.
#[async_trait]
pub trait PosAdapter: Send + Sync {
    /// Lower-cased vendor name this adapter serves (e.g. `"square"`).
    fn provider(&self) -> &str;

    /// True iff the vendor confirms the credentials are valid, proven by a
    /// successful read of account metadata.
    async fn test_connection(&self) -> Result<bool, PosError>;

    /// Full catalog pull, normalized into the common model. An empty vendor
    /// catalog yields an empty vec, not an error.
    async fn fetch_menu(&self) -> Result<Vec<PosProduct>, PosError>;

    /// Submits an order. The order's `location_id` must already be resolved;
    /// the integration manager backfills it before delegating here.
    async fn submit_order(&self, order: &PosOrder) -> Result<PosOrderResult, PosError>;

    /// Looks up a vendor location by id.
    async fn get_location(&self, location_id: &str) -> Result<PosLocationInfo, PosError>;

    /// Cheaper or alternate proof of credential validity. For most vendors
    /// this degenerates to [`PosAdapter::test_connection`].
    async fn validate_credentials(&self) -> Result<bool, PosError>;

    /// Current vendor-side state of a previously submitted order.
    async fn get_order_status(&self, order_id: &str) -> Result<PosOrderStatus, PosError>;
}

/// Fail-fast check for a required credential field. Synchronous, runs before
/// any vendor logic.
pub(crate) fn require_credential<'a>(
    value: Option<&'a str>,
    description: &str,
    vendor: &str,
) -> Result<&'a str, PosError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PosError::MissingCredentials(format!(
            "{description} is required for {vendor} integration"
        ))),
    }
}

/// Fail-fast check for the configured location id, for operations that need
/// one.
pub(crate) fn require_location<'a>(
    config: &'a PosConfig,
    vendor: &str,
) -> Result<&'a str, PosError> {
    config
        .location_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            PosError::MissingConfig(format!("Location ID is required for {vendor} integration"))
        })
}

/// Convenience accessor used by the credential checks.
pub(crate) fn access_token(credentials: &PosCredentials) -> Option<&str> {
    credentials.access_token.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_credential_rejects_absent_and_blank() {
        let err = require_credential(None, "Access token", "Square")
            .expect_err("absent credential should fail");
        assert_eq!(
            err.to_string(),
            "Access token is required for Square integration"
        );

        let err = require_credential(Some("   "), "API key", "Toast")
            .expect_err("blank credential should fail");
        assert!(matches!(err, PosError::MissingCredentials(_)));
    }

    #[test]
    fn require_credential_passes_through_value() {
        let value = require_credential(Some("sq0atp-abc"), "Access token", "Square")
            .expect("present credential should pass");
        assert_eq!(value, "sq0atp-abc");
    }

    #[test]
    fn require_location_reads_config() {
        let config = PosConfig {
            location_id: Some("loc-1".to_string()),
            ..PosConfig::default()
        };
        assert_eq!(
            require_location(&config, "Square").expect("location set"),
            "loc-1"
        );

        let err = require_location(&PosConfig::default(), "Square")
            .expect_err("missing location should fail");
        assert!(matches!(err, PosError::MissingConfig(_)));
    }
}
