use thiserror::Error;

/// Errors raised by the adapter layer.
///
/// Two propagation policies coexist deliberately. Lifecycle failures
/// (inactive integration, missing location, vendor rejection) are caught at
/// the manager boundary and reported inside result types. These variants are
/// the other kind: programmer or configuration errors that propagate to a
/// layer able to decide between retry, 400, and 500.
#[derive(Debug, Error)]
pub enum PosError {
    #[error("Unsupported POS provider: {provider}. Supported providers: {supported}")]
    UnsupportedProvider { provider: String, supported: String },

    #[error("{0}")]
    MissingCredentials(String),

    #[error("{0}")]
    MissingConfig(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error(transparent)]
    Square(#[from] drinkhub_square::SquareError),
}
