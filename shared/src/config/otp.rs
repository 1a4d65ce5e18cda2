//! Passcode configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Passcode issuance and verification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds before an issued code expires
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,

    /// Maximum number of verification attempts per code
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Interval between background sweeps of expired codes, in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_attempts: default_max_attempts(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_CODE_TTL_SECONDS`, `OTP_MAX_ATTEMPTS`, and
    /// `OTP_SWEEP_INTERVAL_SECONDS`, with defaults for missing values
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: env_parse("OTP_CODE_TTL_SECONDS", default_ttl_seconds()),
            max_attempts: env_parse("OTP_MAX_ATTEMPTS", default_max_attempts()),
            sweep_interval_seconds: env_parse(
                "OTP_SWEEP_INTERVAL_SECONDS",
                default_sweep_interval_seconds(),
            ),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn default_ttl_seconds() -> i64 {
    300 // 5 minutes
}

fn default_max_attempts() -> u32 {
    5
}

fn default_sweep_interval_seconds() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OtpConfig::default();
        assert_eq!(config.ttl_seconds, 300);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.sweep_interval_seconds, 60);
    }
}
