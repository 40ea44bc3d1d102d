//! Square vendor integration: HTTP client, wire types, and catalog
//! normalization into the vendor-neutral `drinkhub-core` model.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{is_production_token, SquareClient};
pub use error::SquareError;
pub use normalize::{location_info, minor_units_to_decimal, normalize_catalog, order_status};
