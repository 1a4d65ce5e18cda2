//! Delivery backend configuration for email and SMS

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP (email) settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port
    pub port: u16,
    /// Use implicit TLS instead of STARTTLS
    pub secure: bool,
    /// Username for SMTP authentication
    pub username: String,
    /// Password for SMTP authentication
    pub password: String,
    /// From address; falls back to `username` when empty
    pub from: String,
}

impl SmtpConfig {
    /// Load from `SMTP_HOST`, `SMTP_PORT`, `SMTP_SECURE`, `SMTP_USER`,
    /// `SMTP_PASS`, and `EMAIL_FROM`
    pub fn from_env() -> Self {
        Self {
            host: env::var("SMTP_HOST").unwrap_or_default(),
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            secure: env::var("SMTP_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            username: env::var("SMTP_USER").unwrap_or_default(),
            password: env::var("SMTP_PASS").unwrap_or_default(),
            from: env::var("EMAIL_FROM").unwrap_or_default(),
        }
    }

    /// From address used on outbound mail
    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            &self.username
        } else {
            &self.from
        }
    }
}

/// TextBee SMS gateway settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextBeeConfig {
    /// Gateway base URL
    pub base_url: String,
    /// Device identifier registered with the gateway
    pub device_id: String,
    /// API key sent on every request
    pub api_key: String,
}

impl TextBeeConfig {
    /// Load from `TEXTBEE_BASE_URL`, `TEXTBEE_DEVICE_ID`, and
    /// `TEXTBEE_API_KEY`
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("TEXTBEE_BASE_URL").unwrap_or_default(),
            device_id: env::var("TEXTBEE_DEVICE_ID").unwrap_or_default(),
            api_key: env::var("TEXTBEE_API_KEY").unwrap_or_default(),
        }
    }
}

/// Combined delivery configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Email backend settings
    pub smtp: SmtpConfig,
    /// SMS backend settings
    pub textbee: TextBeeConfig,
}

impl NotificationConfig {
    /// Load every backend section from the environment
    pub fn from_env() -> Self {
        Self {
            smtp: SmtpConfig::from_env(),
            textbee: TextBeeConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_falls_back_to_username() {
        let config = SmtpConfig {
            username: "noreply@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sender(), "noreply@example.com");

        let config = SmtpConfig {
            username: "noreply@example.com".to_string(),
            from: "StoryVault <hello@example.com>".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sender(), "StoryVault <hello@example.com>");
    }
}
