//! POS vendor adapter layer: the capability contract every vendor
//! integration satisfies, the factory that selects the right concrete
//! adapter, and the integration manager that enforces lifecycle rules
//! around adapter calls.
//!
//! This crate is a library consumed by the platform's route layer; it has
//! no network surface of its own and never touches storage — callers load
//! the `PosIntegration` record before calling in.

pub mod adapter;
pub mod clover;
pub mod error;
pub mod factory;
pub mod manager;
pub mod square;
pub mod toast;

pub use adapter::PosAdapter;
pub use clover::CloverAdapter;
pub use error::PosError;
pub use factory::{AdapterCtor, AdapterFactory};
pub use manager::{IntegrationManager, SyncMenuResult, TestConnectionResult};
pub use square::SquareAdapter;
pub use toast::ToastAdapter;
