//! Normalized menu types produced by vendor catalog mapping.

use serde::{Deserialize, Serialize};

/// A normalized menu item, vendor-agnostic.
///
/// `variations` and `modifiers` are omitted from the serialized form
/// entirely (not emitted as empty arrays) when the item has none — callers
/// distinguish "no modifiers" from "modifiers present but empty" by field
/// absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosProduct {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Decimal currency. Equals the first variation's price when variations
    /// exist, `0.0` otherwise.
    pub base_price: f64,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<PosProductVariation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<PosModifierList>>,
}

/// A purchasable size/variant of a [`PosProduct`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosProductVariation {
    pub id: String,
    pub name: String,
    /// Decimal currency.
    pub price: f64,
    pub available: bool,
}

/// A named, orderable group of optional add-ons (e.g. "Milk Options").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosModifierList {
    pub id: String,
    pub name: String,
    pub modifiers: Vec<PosModifier>,
    pub selection_type: SelectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
}

/// A single add-on within a [`PosModifierList`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosModifier {
    pub id: String,
    pub name: String,
    /// Decimal currency.
    pub price: f64,
    pub available: bool,
}

/// Selection cardinality of a modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Single,
    Multiple,
}
