//! Verification token signing configuration

use std::env;
use tracing::warn;

use super::environment::Environment;

/// Fallback secret used outside production when `JWT_SECRET` is unset
const DEV_FALLBACK_SECRET: &str = "dev-secret-change-in-production";

/// Signing secret for verification tokens.
///
/// A `None` secret disables token issuance and makes every verification
/// fail closed; this is the required state for a production deployment
/// with no `JWT_SECRET` configured.
#[derive(Debug, Clone, Default)]
pub struct TokenConfig {
    /// Symmetric HMAC secret
    pub secret: Option<String>,
}

impl TokenConfig {
    /// Create a configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }

    /// Load from `JWT_SECRET`.
    ///
    /// Outside production a missing secret falls back to a development
    /// default so the local flow stays usable; in production the secret
    /// stays absent.
    pub fn from_env(environment: Environment) -> Self {
        let secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());

        let secret = match secret {
            Some(secret) => Some(secret),
            None if environment.is_production() => None,
            None => {
                warn!("JWT_SECRET not set; using the development fallback secret");
                Some(DEV_FALLBACK_SECRET.to_string())
            }
        };

        Self { secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_secret() {
        let config = TokenConfig::new("hunter2");
        assert_eq!(config.secret.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_default_has_no_secret() {
        assert!(TokenConfig::default().secret.is_none());
    }
}
