use thiserror::Error;

/// Errors returned by the Square API client.
#[derive(Debug, Error)]
pub enum SquareError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Square returned a non-2xx status. `body` is the raw error payload,
    /// kept for logs; only the formatted message crosses into result types.
    #[error("Square API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Square has no record of the requested resource (HTTP 404).
    #[error("Square {resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
