//! SMTP email backend.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use once_cell::sync::OnceCell;
use std::time::Duration;
use tracing::debug;

use sv_core::services::notification::NotificationProvider;
use sv_core::{Channel, DeliveryError, NotificationPayload};
use sv_shared::config::SmtpConfig;
use sv_shared::utils::masking::mask_recipient;

/// Timeout applied to SMTP sends
const SMTP_TIMEOUT_SECS: u64 = 10;

/// Email delivery backend speaking SMTP through lettre
pub struct SmtpProvider {
    config: SmtpConfig,
    transport: OnceCell<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpProvider {
    /// Creates an SMTP backend; the transport is not built until the
    /// first send
    pub fn new(config: SmtpConfig) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
        }
    }

    fn transport(&self) -> Result<&AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
        self.transport.get_or_try_init(|| {
            let builder = if self.config.secure {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            }
            .map_err(|error| {
                DeliveryError::new(
                    Channel::Email,
                    format!("SMTP transport setup failed: {}", error),
                )
            })?;

            Ok(builder
                .credentials(Credentials::new(
                    self.config.username.clone(),
                    self.config.password.clone(),
                ))
                .port(self.config.port)
                .timeout(Some(Duration::from_secs(SMTP_TIMEOUT_SECS)))
                .build())
        })
    }
}

#[async_trait]
impl NotificationProvider for SmtpProvider {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn name(&self) -> &'static str {
        "smtp"
    }

    fn is_configured(&self) -> bool {
        !self.config.host.is_empty()
            && !self.config.username.is_empty()
            && !self.config.password.is_empty()
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        if !self.is_configured() {
            return Err(DeliveryError::new(
                Channel::Email,
                "SMTP backend is not configured",
            ));
        }

        let from: Mailbox = self.config.sender().parse().map_err(|error| {
            DeliveryError::new(Channel::Email, format!("invalid from address: {}", error))
        })?;
        let to: Mailbox = payload.recipient.parse().map_err(|error| {
            DeliveryError::new(
                Channel::Email,
                format!("invalid recipient address: {}", error),
            )
        })?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(payload.subject.as_deref().unwrap_or_default())
            .header(ContentType::TEXT_PLAIN)
            .body(payload.message.clone())
            .map_err(|error| {
                DeliveryError::new(Channel::Email, format!("failed to build message: {}", error))
            })?;

        self.transport()?.send(email).await.map_err(|error| {
            DeliveryError::new(Channel::Email, format!("SMTP send failed: {}", error))
        })?;

        debug!(
            recipient = %mask_recipient(&payload.recipient),
            "Email notification sent"
        );
        Ok(())
    }
}
