#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration for services embedding the POS layer.
///
/// Nothing here is required; every knob has a default suitable for
/// development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Per-request timeout for vendor HTTP calls. Without one, a stalled
    /// vendor hangs the calling request indefinitely; defaults to 30s. Tune
    /// via `DRINKHUB_POS_REQUEST_TIMEOUT_SECS`.
    pub pos_request_timeout_secs: u64,
    pub pos_user_agent: String,
}

impl AppConfig {
    /// Settings threaded into vendor adapter construction.
    #[must_use]
    pub fn pos_client_settings(&self) -> PosClientSettings {
        PosClientSettings {
            request_timeout_secs: self.pos_request_timeout_secs,
            user_agent: self.pos_user_agent.clone(),
        }
    }
}

/// HTTP client settings shared by all vendor adapters.
#[derive(Debug, Clone)]
pub struct PosClientSettings {
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for PosClientSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: "drinkhub/0.1 (pos-integration)".to_string(),
        }
    }
}
