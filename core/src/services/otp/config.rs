//! Configuration for the passcode service.

use sv_shared::config::OtpConfig;

use crate::domain::entities::otp_record::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS};

/// Configuration for [`OtpService`](super::OtpService)
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds before an issued code expires
    pub ttl_seconds: i64,

    /// Maximum number of verification attempts per code
    pub max_attempts: u32,

    /// Interval between background sweeps of expired records, in seconds
    pub sweep_interval_seconds: u64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sweep_interval_seconds: 60,
        }
    }
}

impl From<OtpConfig> for OtpServiceConfig {
    fn from(config: OtpConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds,
            max_attempts: config.max_attempts,
            sweep_interval_seconds: config.sweep_interval_seconds,
        }
    }
}
