//! TextBee SMS gateway backend.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use sv_core::services::notification::NotificationProvider;
use sv_core::{Channel, DeliveryError, NotificationPayload};
use sv_shared::config::TextBeeConfig;
use sv_shared::utils::masking::mask_recipient;

/// Timeout applied to gateway requests
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// SMS delivery backend posting to a TextBee gateway device
pub struct TextBeeProvider {
    config: TextBeeConfig,
    client: OnceCell<Client>,
}

impl TextBeeProvider {
    /// Creates a TextBee backend; the HTTP client is not built until the
    /// first send
    pub fn new(config: TextBeeConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&Client, DeliveryError> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .map_err(|error| {
                    DeliveryError::new(Channel::Sms, format!("HTTP client setup failed: {}", error))
                })
        })
    }

    /// Gateway endpoint for the configured device
    pub(super) fn endpoint(&self) -> String {
        format!(
            "{}/gateway/devices/{}/send-sms",
            self.config.base_url.trim_end_matches('/'),
            self.config.device_id
        )
    }
}

#[async_trait]
impl NotificationProvider for TextBeeProvider {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn name(&self) -> &'static str {
        "textbee"
    }

    fn is_configured(&self) -> bool {
        !self.config.base_url.is_empty()
            && !self.config.device_id.is_empty()
            && !self.config.api_key.is_empty()
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        if !self.is_configured() {
            return Err(DeliveryError::new(
                Channel::Sms,
                "TextBee backend is not configured",
            ));
        }

        let response = self
            .client()?
            .post(self.endpoint())
            .header("x-api-key", &self.config.api_key)
            .json(&json!({
                "recipients": [payload.recipient],
                "message": payload.message,
            }))
            .send()
            .await
            .map_err(|error| {
                DeliveryError::new(Channel::Sms, format!("gateway request failed: {}", error))
            })?;

        response.error_for_status().map_err(|error| {
            DeliveryError::new(
                Channel::Sms,
                format!("gateway rejected the message: {}", error),
            )
        })?;

        debug!(
            recipient = %mask_recipient(&payload.recipient),
            "SMS notification sent"
        );
        Ok(())
    }
}
