//! The Toast adapter: partial implementation.
//!
//! Satisfies the same contract as the Square adapter with placeholder
//! vendor logic — credential checks are real, menu and order data are
//! canned. Kept so the provider name stays registered and the contract is
//! proven against a second vendor shape.

use async_trait::async_trait;
use drinkhub_core::{
    PosConfig, PosCredentials, PosLocationInfo, PosModifier, PosModifierList, PosOrder,
    PosOrderResult, PosOrderStatus, PosProduct, PosProductVariation, SelectionType,
};

use crate::adapter::{require_credential, PosAdapter};
use crate::error::PosError;

const ORDER_ID_PREFIX: &str = "toast-order-";

pub struct ToastAdapter {
    credentials: PosCredentials,
    config: PosConfig,
}

impl ToastAdapter {
    #[must_use]
    pub fn new(credentials: PosCredentials, config: PosConfig) -> Self {
        Self {
            credentials,
            config,
        }
    }

    fn check_credentials(&self) -> Result<(), PosError> {
        require_credential(self.credentials.api_key.as_deref(), "API key", "Toast")?;
        require_credential(
            self.credentials.merchant_id.as_deref(),
            "Restaurant GUID (Merchant ID)",
            "Toast",
        )?;
        Ok(())
    }
}

#[async_trait]
impl PosAdapter for ToastAdapter {
    fn provider(&self) -> &str {
        "toast"
    }

    async fn test_connection(&self) -> Result<bool, PosError> {
        self.check_credentials()?;
        Ok(true)
    }

    async fn fetch_menu(&self) -> Result<Vec<PosProduct>, PosError> {
        self.check_credentials()?;
        Ok(vec![PosProduct {
            id: "toast-item-1".to_string(),
            name: "Cold Brew".to_string(),
            description: Some("Slow-steeped cold brew coffee".to_string()),
            category: Some("Coffee".to_string()),
            base_price: 4.0,
            available: true,
            variations: Some(vec![
                PosProductVariation {
                    id: "toast-var-1".to_string(),
                    name: "Regular".to_string(),
                    price: 4.0,
                    available: true,
                },
                PosProductVariation {
                    id: "toast-var-2".to_string(),
                    name: "Large".to_string(),
                    price: 5.0,
                    available: true,
                },
            ]),
            modifiers: Some(vec![PosModifierList {
                id: "toast-ml-1".to_string(),
                name: "Milk Options".to_string(),
                modifiers: vec![
                    PosModifier {
                        id: "toast-mod-1".to_string(),
                        name: "Whole Milk".to_string(),
                        price: 0.0,
                        available: true,
                    },
                    PosModifier {
                        id: "toast-mod-2".to_string(),
                        name: "Oat Milk".to_string(),
                        price: 0.75,
                        available: true,
                    },
                ],
                selection_type: SelectionType::Single,
                min_selections: None,
                max_selections: Some(1),
            }]),
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
            name: "Toast Restaurant".to_string(),
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
