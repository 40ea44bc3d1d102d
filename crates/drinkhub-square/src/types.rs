//! Square API wire types.
//!
//! All money amounts are integer minor units (cents) exactly as Square
//! returns them; conversion to decimal currency happens in `normalize.rs`
//! and nowhere else. These shapes are internal to this crate — only the
//! vendor-neutral `drinkhub-core` model crosses the adapter boundary.

use std::collections::HashMap;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Response from `GET /v2/catalog/list`.
///
/// `objects` is kept as raw JSON values: the client deserializes each entry
/// individually and skips any that fail to parse, so an unrequested or
/// future object type never poisons the whole catalog pull.
#[derive(Debug, Deserialize)]
pub struct CatalogListResponse {
    #[serde(default)]
    pub objects: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A single catalog object, tagged by Square's `type` discriminator.
///
/// Square flattens a relational graph into one list: items reference
/// modifier lists by id, modifier lists reference modifiers by id, items
/// reference categories by id. The normalizer re-links them via lookup maps.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogObject {
    Item {
        id: String,
        #[serde(default)]
        item_data: Option<CatalogItemData>,
    },
    Category {
        id: String,
        #[serde(default)]
        category_data: Option<CategoryData>,
    },
    ModifierList {
        id: String,
        #[serde(default)]
        modifier_list_data: Option<ModifierListData>,
    },
    Modifier {
        id: String,
        #[serde(default)]
        modifier_data: Option<ModifierData>,
    },
}

#[derive(Debug, Deserialize)]
pub struct CatalogItemData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub variations: Vec<ItemVariation>,
    #[serde(default)]
    pub modifier_list_info: Vec<ModifierListInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ItemVariation {
    pub id: String,
    pub item_variation_data: ItemVariationData,
}

#[derive(Debug, Deserialize)]
pub struct ItemVariationData {
    pub name: String,
    #[serde(default)]
    pub price_money: Option<Money>,
}

/// An item's reference to a modifier list, with per-item overrides.
#[derive(Debug, Deserialize)]
pub struct ModifierListInfo {
    pub modifier_list_id: String,
    #[serde(default)]
    pub min_selected_modifiers: Option<u32>,
    #[serde(default)]
    pub max_selected_modifiers: Option<u32>,
    /// Absent means enabled; only an explicit `false` disables the list.
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryData {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ModifierListData {
    pub name: String,
    /// `"SINGLE"` or `"MULTIPLE"`; anything else maps to multiple.
    #[serde(default)]
    pub selection_type: Option<String>,
    /// Embedded modifier references. Each is resolved against the top-level
    /// modifier map by id; the embedded payload is not trusted.
    #[serde(default)]
    pub modifiers: Vec<ModifierRef>,
}

#[derive(Debug, Deserialize)]
pub struct ModifierRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ModifierData {
    pub name: String,
    #[serde(default)]
    pub price_money: Option<Money>,
}

/// Square money: integer minor units plus an ISO currency code.
#[derive(Debug, Clone, Deserialize)]
pub struct Money {
    pub amount: i64,
    #[serde(default)]
    pub currency: Option<String>,
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub location: Location,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// `"ACTIVE"` or `"INACTIVE"`.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub administrative_district_level_1: Option<String>,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub total_money: Option<Money>,
    /// Remaining order fields Square returns that this layer does not read.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
