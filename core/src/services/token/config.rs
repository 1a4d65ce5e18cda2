//! Configuration for the token service.

use sv_shared::config::TokenConfig;

/// Configuration for [`TokenService`](super::TokenService)
#[derive(Debug, Clone, Default)]
pub struct TokenServiceConfig {
    /// Symmetric signing secret; `None` disables issuance and makes
    /// every verification fail closed
    pub secret: Option<String>,
}

impl TokenServiceConfig {
    /// Creates a configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }
}

impl From<TokenConfig> for TokenServiceConfig {
    fn from(config: TokenConfig) -> Self {
        Self {
            secret: config.secret,
        }
    }
}
