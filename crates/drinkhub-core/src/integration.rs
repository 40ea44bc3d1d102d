//! POS integration records: the persisted per-business vendor configuration.
//!
//! A [`PosIntegration`] is owned by the business record and loaded by the
//! caller before any manager call — this crate never touches storage. Field
//! names serialize as `camelCase` to match the JSON contract the route layer
//! and admin UI already speak.

use serde::{Deserialize, Serialize};

/// A business's POS vendor configuration, as loaded from persistence.
///
/// Invariant: an integration with `is_active == false` must never reach a
/// vendor adapter for menu or order operations. The integration manager
/// enforces this gate; diagnostic calls (connection test, credential
/// validation) remain callable regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosIntegration {
    pub id: String,
    pub business_id: String,
    /// Lower-cased vendor name (e.g. `"square"`). Matched case-insensitively
    /// by the adapter factory.
    pub provider: String,
    pub credentials: PosCredentials,
    pub config: PosConfig,
    pub is_active: bool,
}

/// Vendor-opaque credential bag.
///
/// Only the fields a given vendor needs are populated; presence is validated
/// per vendor (Square wants `access_token`, Toast wants `api_key` +
/// `merchant_id`, ...), never globally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

/// Per-integration settings.
///
/// `location_id` is the single most load-bearing field: menu sync, order
/// submission, and location lookups all fail without a resolvable location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Menu sync cadence in seconds; interpreted by the orchestrating
    /// service, not by this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_sync_menu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}
