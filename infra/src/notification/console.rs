//! Console fallback backend.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use sv_core::services::notification::NotificationProvider;
use sv_core::{Channel, DeliveryError, NotificationPayload};

/// Log-only delivery backend used when a channel has no configured
/// sender.
///
/// Always reports itself configured and never fails. The full payload,
/// including the passcode, is written to the log; the log is the
/// delivery medium for this backend.
pub struct ConsoleProvider {
    channel: Channel,
}

impl ConsoleProvider {
    /// Creates a console backend for the given channel
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl NotificationProvider for ConsoleProvider {
    fn channel(&self) -> Channel {
        self.channel
    }

    fn name(&self) -> &'static str {
        "console"
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        let message_id = format!("console_{}", Uuid::new_v4());

        info!(
            target: "notification",
            channel = %self.channel,
            recipient = %payload.recipient,
            subject = payload.subject.as_deref().unwrap_or(""),
            message = %payload.message,
            message_id = %message_id,
            "Console notification delivery"
        );

        Ok(())
    }
}
