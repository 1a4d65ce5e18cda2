//! Per-channel provider selection.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::otp_record::Channel;
use crate::domain::value_objects::notification::NotificationPayload;
use crate::errors::DeliveryError;

use super::traits::NotificationProvider;

/// Routes notifications to the backend selected for each channel.
///
/// Selection happens exactly once at construction; the factory in the
/// infrastructure crate applies the configuration predicates and falls
/// back to a log-only backend for any channel without a configured
/// sender.
pub struct NotificationRouter {
    email: Arc<dyn NotificationProvider>,
    sms: Arc<dyn NotificationProvider>,
}

impl NotificationRouter {
    /// Creates a router from one backend per channel
    pub fn new(email: Arc<dyn NotificationProvider>, sms: Arc<dyn NotificationProvider>) -> Self {
        Self { email, sms }
    }

    /// Backend selected for the given channel
    pub fn provider(&self, channel: Channel) -> &dyn NotificationProvider {
        match channel {
            Channel::Email => self.email.as_ref(),
            Channel::Sms => self.sms.as_ref(),
        }
    }

    /// Dispatches a payload through the backend for `channel`
    pub async fn dispatch(
        &self,
        channel: Channel,
        payload: &NotificationPayload,
    ) -> Result<(), DeliveryError> {
        let provider = self.provider(channel);
        debug!(
            channel = %channel,
            backend = provider.name(),
            "Dispatching notification"
        );
        provider.send(payload).await
    }
}
