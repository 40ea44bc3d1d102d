//! The Clover adapter: partial implementation, same shape as Toast.

use async_trait::async_trait;
use drinkhub_core::{
    PosConfig, PosCredentials, PosLocationInfo, PosModifier, PosModifierList, PosOrder,
    PosOrderResult, PosOrderStatus, PosProduct, PosProductVariation, SelectionType,
};

use crate::adapter::{require_credential, PosAdapter};
use crate::error::PosError;

const ORDER_ID_PREFIX: &str = "clover-order-";

pub struct CloverAdapter {
    credentials: PosCredentials,
    config: PosConfig,
}

impl CloverAdapter {
    #[must_use]
    pub fn new(credentials: PosCredentials, config: PosConfig) -> Self {
        Self {
            credentials,
            config,
        }
    }

    fn check_credentials(&self) -> Result<(), PosError> {
        require_credential(
            self.credentials.access_token.as_deref(),
            "API token (access token)",
            "Clover",
        )?;
        require_credential(
            self.credentials.merchant_id.as_deref(),
            "Merchant ID",
            "Clover",
        )?;
        Ok(())
    }
}

#[async_trait]
impl PosAdapter for CloverAdapter {
    fn provider(&self) -> &str {
        "clover"
    }

    async fn test_connection(&self) -> Result<bool, PosError> {
        self.check_credentials()?;
        Ok(true)
    }

    async fn fetch_menu(&self) -> Result<Vec<PosProduct>, PosError> {
        self.check_credentials()?;
        Ok(vec![PosProduct {
            id: "clover-item-1".to_string(),
            name: "Cappuccino".to_string(),
            description: Some("Espresso with foamed milk".to_string()),
            category: Some("Coffee".to_string()),
            base_price: 4.25,
            available: true,
            variations: Some(vec![PosProductVariation {
                id: "clover-var-1".to_string(),
                name: "8oz".to_string(),
                price: 4.25,
                available: true,
            }]),
            modifiers: Some(vec![
                PosModifierList {
                    id: "clover-ml-1".to_string(),
                    name: "Extra Shots".to_string(),
                    modifiers: vec![PosModifier {
                        id: "clover-mod-1".to_string(),
                        name: "Extra Shot".to_string(),
                        price: 1.0,
                        available: true,
                    }],
                    selection_type: SelectionType::Multiple,
                    min_selections: None,
                    max_selections: None,
                },
                PosModifierList {
                    id: "clover-ml-2".to_string(),
                    name: "Flavors".to_string(),
                    modifiers: vec![
                        PosModifier {
                            id: "clover-mod-2".to_string(),
                            name: "Vanilla".to_string(),
                            price: 0.5,
                            available: true,
                        },
                        PosModifier {
                            id: "clover-mod-3".to_string(),
                            name: "Caramel".to_string(),
                            price: 0.5,
                            available: true,
                        },
                    ],
                    selection_type: SelectionType::Single,
                    min_selections: None,
                    max_selections: Some(1),
                },
            ]),
        }])
    }

    async fn submit_order(&self, order: &PosOrder) -> Result<PosOrderResult, PosError> {
        self.check_credentials()?;
        if order.line_items.is_empty() {
            return Ok(PosOrderResult::failed("Order has no line items"));
        }
        let order_id = format!("{ORDER_ID_PREFIX}{}", chrono::Utc::now().timestamp_millis());
        Ok(PosOrderResult::ok(order_id))
    }

    async fn get_location(&self, location_id: &str) -> Result<PosLocationInfo, PosError> {
        self.check_credentials()?;
        let configured = self.config.location_id.as_deref();
        if configured.is_some_and(|id| id != location_id) {
            return Err(PosError::NotFound {
                resource: "location",
                id: location_id.to_owned(),
            });
        }
        Ok(PosLocationInfo {
            id: location_id.to_owned(),
            name: "Clover Merchant".to_string(),
            address: None,
            timezone: None,
            status: drinkhub_core::LocationStatus::Active,
        })
    }

    async fn validate_credentials(&self) -> Result<bool, PosError> {
        Ok(self.check_credentials().is_ok())
    }

    async fn get_order_status(&self, order_id: &str) -> Result<PosOrderStatus, PosError> {
        self.check_credentials()?;
        if !order_id.starts_with(ORDER_ID_PREFIX) {
            return Err(PosError::NotFound {
                resource: "order",
                id: order_id.to_owned(),
            });
        }
        Ok(PosOrderStatus {
            status: "open".to_string(),
            created_at: None,
            updated_at: None,
            total: None,
            currency: None,
        })
    }
}
