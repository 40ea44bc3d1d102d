//! Normalization of Square catalog, location, and order shapes into the
//! vendor-neutral `drinkhub-core` model.
//!
//! The catalog arrives as a relational graph flattened into one list: items
//! reference modifier lists by id, modifier lists reference modifiers by id,
//! items reference categories by id. Normalization re-links the graph via
//! id-keyed lookup maps and emits one [`PosProduct`] per item. Dangling
//! references are dropped silently — a half-broken vendor catalog still
//! yields every product that can be resolved.

use std::collections::HashMap;

use drinkhub_core::{
    LocationStatus, PosLocationInfo, PosModifier, PosModifierList, PosOrderStatus, PosProduct,
    PosProductVariation, SelectionType,
};

use crate::types::{
    CatalogItemData, CatalogObject, CategoryData, Location, ModifierData, ModifierListData, Order,
};

/// Converts Square's integer minor units (cents) to decimal currency.
///
/// Plain division by 100 with no rounding; this is the only place in the
/// codebase where the conversion happens.
#[must_use]
pub fn minor_units_to_decimal(amount: i64) -> f64 {
    amount as f64 / 100.0
}

/// Normalizes a full catalog pull into products.
#[must_use]
pub fn normalize_catalog(objects: &[CatalogObject]) -> Vec<PosProduct> {
    let mut modifier_lists: HashMap<&str, &ModifierListData> = HashMap::new();
    let mut modifiers: HashMap<&str, &ModifierData> = HashMap::new();
    let mut categories: HashMap<&str, &CategoryData> = HashMap::new();

    for object in objects {
        match object {
            CatalogObject::ModifierList {
                id,
                modifier_list_data: Some(data),
            } => {
                modifier_lists.insert(id, data);
            }
            CatalogObject::Modifier {
                id,
                modifier_data: Some(data),
            } => {
                modifiers.insert(id, data);
            }
            CatalogObject::Category {
                id,
                category_data: Some(data),
            } => {
                categories.insert(id, data);
            }
            _ => {}
        }
    }

    objects
        .iter()
        .filter_map(|object| match object {
            CatalogObject::Item {
                id,
                item_data: Some(data),
            } => Some(normalize_item(id, data, &modifier_lists, &modifiers, &categories)),
            _ => None,
        })
        .collect()
}

fn normalize_item(
    id: &str,
    data: &CatalogItemData,
    modifier_lists: &HashMap<&str, &ModifierListData>,
    modifiers: &HashMap<&str, &ModifierData>,
    categories: &HashMap<&str, &CategoryData>,
) -> PosProduct {
    // Absent or dangling category id is simply no category, never an error.
    let category = data
        .category_id
        .as_deref()
        .and_then(|category_id| categories.get(category_id))
        .map(|c| c.name.clone());

    let variations: Vec<PosProductVariation> = data
        .variations
        .iter()
        .map(|v| PosProductVariation {
            id: v.id.clone(),
            name: v.item_variation_data.name.clone(),
            price: minor_units_to_decimal(
                v.item_variation_data
                    .price_money
                    .as_ref()
                    .map_or(0, |m| m.amount),
            ),
            // Square does not report availability at the variation level.
            available: true,
        })
        .collect();

    let base_price = variations.first().map_or(0.0, |v| v.price);

    let modifier_list_values: Vec<PosModifierList> = data
        .modifier_list_info
        .iter()
        .filter(|info| info.enabled != Some(false))
        .filter_map(|info| {
            let list = modifier_lists.get(info.modifier_list_id.as_str())?;

            let resolved: Vec<PosModifier> = list
                .modifiers
                .iter()
                .filter_map(|reference| {
                    let modifier = modifiers.get(reference.id.as_str())?;
                    Some(PosModifier {
                        id: reference.id.clone(),
                        name: modifier.name.clone(),
                        price: minor_units_to_decimal(
                            modifier.price_money.as_ref().map_or(0, |m| m.amount),
                        ),
                        available: true,
                    })
                })
                .collect();

            Some(PosModifierList {
                id: info.modifier_list_id.clone(),
                name: list.name.clone(),
                modifiers: resolved,
                selection_type: selection_type(list.selection_type.as_deref()),
                min_selections: info.min_selected_modifiers,
                max_selections: info.max_selected_modifiers,
            })
        })
        .collect();

    PosProduct {
        id: id.to_owned(),
        name: data.name.clone(),
        description: data.description.clone(),
        category,
        base_price,
        available: true,
        variations: if variations.is_empty() {
            None
        } else {
            Some(variations)
        },
        modifiers: if modifier_list_values.is_empty() {
            None
        } else {
            Some(modifier_list_values)
        },
    }
}

/// `"SINGLE"` maps to single selection; anything else (including absence)
/// maps to multiple.
fn selection_type(raw: Option<&str>) -> SelectionType {
    if raw == Some("SINGLE") {
        SelectionType::Single
    } else {
        SelectionType::Multiple
    }
}

/// Maps a Square location to the common model.
#[must_use]
pub fn location_info(location: &Location) -> PosLocationInfo {
    let address = location.address.as_ref().map(|a| {
        format!(
            "{}, {}, {}",
            a.address_line_1.as_deref().unwrap_or(""),
            a.locality.as_deref().unwrap_or(""),
            a.administrative_district_level_1.as_deref().unwrap_or(""),
        )
    });

    PosLocationInfo {
        id: location.id.clone(),
        name: location.name.clone(),
        address,
        timezone: location.timezone.clone(),
        status: if location.status.as_deref() == Some("ACTIVE") {
            LocationStatus::Active
        } else {
            LocationStatus::Inactive
        },
    }
}

/// Maps a Square order to a status plus details bag.
#[must_use]
pub fn order_status(order: &Order) -> PosOrderStatus {
    PosOrderStatus {
        status: order
            .state
            .as_deref()
            .unwrap_or("UNKNOWN")
            .to_lowercase(),
        created_at: order.created_at.clone(),
        updated_at: order.updated_at.clone(),
        total: order
            .total_money
            .as_ref()
            .map(|m| minor_units_to_decimal(m.amount)),
        currency: order
            .total_money
            .as_ref()
            .and_then(|m| m.currency.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemVariation, ItemVariationData, ModifierListInfo, ModifierRef, Money};

    fn money(amount: i64) -> Option<Money> {
        Some(Money {
            amount,
            currency: Some("USD".to_string()),
        })
    }

    fn variation(id: &str, name: &str, amount: i64) -> ItemVariation {
        ItemVariation {
            id: id.to_string(),
            item_variation_data: ItemVariationData {
                name: name.to_string(),
                price_money: money(amount),
            },
        }
    }

    fn item(id: &str, data: CatalogItemData) -> CatalogObject {
        CatalogObject::Item {
            id: id.to_string(),
            item_data: Some(data),
        }
    }

    fn item_data(name: &str) -> CatalogItemData {
        CatalogItemData {
            name: name.to_string(),
            description: None,
            category_id: None,
            variations: vec![],
            modifier_list_info: vec![],
        }
    }

    fn modifier_list(id: &str, name: &str, selection: Option<&str>, refs: &[&str]) -> CatalogObject {
        CatalogObject::ModifierList {
            id: id.to_string(),
            modifier_list_data: Some(ModifierListData {
                name: name.to_string(),
                selection_type: selection.map(str::to_string),
                modifiers: refs
                    .iter()
                    .map(|r| ModifierRef { id: (*r).to_string() })
                    .collect(),
            }),
        }
    }

    fn modifier(id: &str, name: &str, amount: i64) -> CatalogObject {
        CatalogObject::Modifier {
            id: id.to_string(),
            modifier_data: Some(ModifierData {
                name: name.to_string(),
                price_money: money(amount),
            }),
        }
    }

    fn list_info(id: &str, enabled: Option<bool>) -> ModifierListInfo {
        ModifierListInfo {
            modifier_list_id: id.to_string(),
            min_selected_modifiers: None,
            max_selected_modifiers: None,
            enabled,
        }
    }

    #[test]
    fn minor_units_divide_by_100() {
        assert!((minor_units_to_decimal(450) - 4.5).abs() < f64::EPSILON);
        assert!((minor_units_to_decimal(0) - 0.0).abs() < f64::EPSILON);
        assert!((minor_units_to_decimal(1) - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn base_price_is_first_variation_price() {
        let mut data = item_data("Latte");
        data.variations = vec![variation("v1", "12oz", 450), variation("v2", "16oz", 550)];
        let products = normalize_catalog(&[item("i1", data)]);

        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert!((product.base_price - 4.5).abs() < f64::EPSILON);
        let variations = product.variations.as_ref().expect("expected variations");
        assert_eq!(variations.len(), 2);
        assert!((variations[0].price - 4.5).abs() < f64::EPSILON);
        assert!(variations[0].available);
    }

    #[test]
    fn no_variations_means_zero_base_price_and_absent_field() {
        let products = normalize_catalog(&[item("i1", item_data("Latte"))]);
        let product = &products[0];
        assert!((product.base_price - 0.0).abs() < f64::EPSILON);
        assert!(product.variations.is_none());
        assert!(product.modifiers.is_none());
    }

    #[test]
    fn enabled_modifier_list_resolves_through_both_maps() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml1", None)];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Milk Options", Some("SINGLE"), &["m1"]),
            modifier("m1", "Oat Milk", 75),
        ];

        let products = normalize_catalog(&catalog);
        assert_eq!(products.len(), 1);
        let lists = products[0].modifiers.as_ref().expect("expected modifiers");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Milk Options");
        assert_eq!(lists[0].selection_type, SelectionType::Single);
        assert_eq!(lists[0].modifiers.len(), 1);
        assert_eq!(lists[0].modifiers[0].name, "Oat Milk");
        assert!((lists[0].modifiers[0].price - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn disabled_modifier_list_yields_no_modifiers_field() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml1", Some(false))];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Milk Options", Some("SINGLE"), &["m1"]),
            modifier("m1", "Oat Milk", 75),
        ];

        let products = normalize_catalog(&catalog);
        assert!(products[0].modifiers.is_none(), "field must be absent, not empty");
    }

    #[test]
    fn explicitly_enabled_modifier_list_is_kept() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml1", Some(true))];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Milk Options", None, &["m1"]),
            modifier("m1", "Oat Milk", 75),
        ];

        let products = normalize_catalog(&catalog);
        assert!(products[0].modifiers.is_some());
    }

    #[test]
    fn dangling_modifier_list_reference_is_dropped() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml-missing", None)];
        let products = normalize_catalog(&[item("i1", data)]);
        assert!(products[0].modifiers.is_none());
    }

    #[test]
    fn dangling_modifier_reference_is_dropped_but_list_kept() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml1", None)];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Milk Options", None, &["m1", "m-missing"]),
            modifier("m1", "Oat Milk", 75),
        ];

        let products = normalize_catalog(&catalog);
        let lists = products[0].modifiers.as_ref().expect("expected modifiers");
        assert_eq!(lists[0].modifiers.len(), 1);
        assert_eq!(lists[0].modifiers[0].id, "m1");
    }

    #[test]
    fn non_single_selection_maps_to_multiple() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![list_info("ml1", None)];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Flavors", Some("MULTIPLE"), &[]),
        ];
        let products = normalize_catalog(&catalog);
        let lists = products[0].modifiers.as_ref().expect("expected modifiers");
        assert_eq!(lists[0].selection_type, SelectionType::Multiple);
    }

    #[test]
    fn min_max_selections_carry_through() {
        let mut data = item_data("Cold Brew");
        data.modifier_list_info = vec![ModifierListInfo {
            modifier_list_id: "ml1".to_string(),
            min_selected_modifiers: Some(1),
            max_selected_modifiers: Some(3),
            enabled: None,
        }];
        let catalog = vec![
            item("i1", data),
            modifier_list("ml1", "Flavors", None, &[]),
        ];
        let products = normalize_catalog(&catalog);
        let lists = products[0].modifiers.as_ref().expect("expected modifiers");
        assert_eq!(lists[0].min_selections, Some(1));
        assert_eq!(lists[0].max_selections, Some(3));
    }

    #[test]
    fn category_name_resolves_and_dangling_category_is_none() {
        let mut with_category = item_data("Latte");
        with_category.category_id = Some("c1".to_string());
        let mut with_dangling = item_data("Mocha");
        with_dangling.category_id = Some("c-missing".to_string());

        let catalog = vec![
            item("i1", with_category),
            item("i2", with_dangling),
            CatalogObject::Category {
                id: "c1".to_string(),
                category_data: Some(CategoryData {
                    name: "Coffee".to_string(),
                }),
            },
        ];

        let products = normalize_catalog(&catalog);
        assert_eq!(products[0].category.as_deref(), Some("Coffee"));
        assert!(products[1].category.is_none());
    }

    #[test]
    fn empty_catalog_yields_no_products() {
        assert!(normalize_catalog(&[]).is_empty());
    }

    #[test]
    fn order_status_lowercases_state_and_converts_total() {
        let order = Order {
            id: "o1".to_string(),
            state: Some("COMPLETED".to_string()),
            created_at: Some("2026-08-01T12:00:00Z".to_string()),
            updated_at: None,
            total_money: money(1250),
            extra: std::collections::HashMap::new(),
        };
        let status = order_status(&order);
        assert_eq!(status.status, "completed");
        assert_eq!(status.created_at.as_deref(), Some("2026-08-01T12:00:00Z"));
        assert_eq!(status.total, Some(12.5));
        assert_eq!(status.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn location_status_active_only_on_exact_active() {
        let mut location = Location {
            id: "loc-1".to_string(),
            name: "Main Street".to_string(),
            address: None,
            timezone: None,
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(location_info(&location).status, LocationStatus::Active);

        location.status = Some("INACTIVE".to_string());
        assert_eq!(location_info(&location).status, LocationStatus::Inactive);

        location.status = None;
        assert_eq!(location_info(&location).status, LocationStatus::Inactive);
    }

    #[test]
    fn location_address_joins_parts() {
        let location = Location {
            id: "loc-1".to_string(),
            name: "Main Street".to_string(),
            address: Some(crate::types::Address {
                address_line_1: Some("1 Main St".to_string()),
                locality: Some("Springfield".to_string()),
                administrative_district_level_1: Some("IL".to_string()),
            }),
            timezone: Some("America/Chicago".to_string()),
            status: Some("ACTIVE".to_string()),
        };
        let info = location_info(&location);
        assert_eq!(info.address.as_deref(), Some("1 Main St, Springfield, IL"));
        assert_eq!(info.timezone.as_deref(), Some("America/Chicago"));
    }
}
