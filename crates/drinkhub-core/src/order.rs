//! Outbound order types and vendor order outcomes.

use serde::{Deserialize, Serialize};

/// An order to be pushed to the vendor, built by the caller.
///
/// The integration manager backfills `location_id` from the integration's
/// configured location when the caller leaves it empty; the order is passed
/// as `&mut` so the backfilled value is visible to the caller afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrder {
    /// May be empty; see the backfill contract above.
    #[serde(default)]
    pub location_id: String,
    pub line_items: Vec<PosOrderLineItem>,
    /// Caller-supplied idempotency token. When absent, vendor adapters
    /// synthesize one so blind retries are not rejected as duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// One line of a [`PosOrder`], referencing the vendor's catalog by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrderLineItem {
    pub catalog_item_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<PosOrderLineItemModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A modifier selection attached to a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrderLineItemModifier {
    pub catalog_item_id: String,
    /// Defaults to 1 at the vendor boundary when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Outcome of an order submission.
///
/// Vendor-side rejections are reported here with `success: false`, never as
/// errors — callers check the result, not a catch block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrderResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PosOrderResult {
    /// A successful submission confirmed by the vendor.
    #[must_use]
    pub fn ok(order_id: impl Into<String>) -> Self {
        Self {
            success: true,
            order_id: Some(order_id.into()),
            error: None,
        }
    }

    /// A rejected or failed submission.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}

/// Vendor-reported order state plus a small details bag.
///
/// Unlike submission, an order the vendor cannot find is a propagated
/// `NotFound` error, not a `status: "not_found"` value — the manager layer
/// relies on that asymmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrderStatus {
    /// Lowercase vendor state, e.g. `"open"`, `"completed"`, `"canceled"`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Order total in decimal currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
