//! Configuration types loaded from the environment

pub mod environment;
pub mod notification;
pub mod otp;
pub mod token;

pub use environment::Environment;
pub use notification::{NotificationConfig, SmtpConfig, TextBeeConfig};
pub use otp::OtpConfig;
pub use token::TokenConfig;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Passcode issuance and verification settings
    pub otp: OtpConfig,
    /// Verification token signing settings
    pub token: TokenConfig,
    /// Delivery backend settings
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Load the full configuration from the process environment.
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            otp: OtpConfig::from_env(),
            token: TokenConfig::from_env(environment),
            notification: NotificationConfig::from_env(),
        }
    }
}
