//! Vendor-neutral data model and configuration for the drinkhub POS
//! integration layer.
//!
//! Every POS vendor adapter produces and consumes the types in this crate;
//! vendor wire shapes never cross a crate boundary. Prices here are always
//! decimal currency (dollars) — conversion from vendor minor units happens
//! once, inside the vendor crate, and never again downstream.

pub mod app_config;
pub mod config;
pub mod integration;
pub mod location;
pub mod menu;
pub mod order;

pub use app_config::{AppConfig, Environment, PosClientSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use integration::{PosConfig, PosCredentials, PosIntegration};
pub use location::{LocationStatus, PosLocationInfo};
pub use menu::{PosModifier, PosModifierList, PosProduct, PosProductVariation, SelectionType};
pub use order::{
    PosOrder, PosOrderLineItem, PosOrderLineItemModifier, PosOrderResult, PosOrderStatus,
};

use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
