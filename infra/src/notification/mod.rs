//! Delivery backends and router construction.

mod console;
mod smtp;
mod textbee;

#[cfg(test)]
mod tests;

pub use console::ConsoleProvider;
pub use smtp::SmtpProvider;
pub use textbee::TextBeeProvider;

use std::sync::Arc;
use tracing::info;

use sv_core::services::notification::{NotificationProvider, NotificationRouter};
use sv_core::Channel;
use sv_shared::config::NotificationConfig;

/// Build a notification router from configuration.
///
/// The configuration predicate of each backend is evaluated exactly once
/// here. A channel whose backend is not fully configured falls back to
/// the console provider, which always succeeds, so local and development
/// setups work without SMTP or gateway credentials.
pub fn create_router(config: &NotificationConfig) -> NotificationRouter {
    let smtp = SmtpProvider::new(config.smtp.clone());
    let email: Arc<dyn NotificationProvider> = if smtp.is_configured() {
        Arc::new(smtp)
    } else {
        Arc::new(ConsoleProvider::new(Channel::Email))
    };

    let textbee = TextBeeProvider::new(config.textbee.clone());
    let sms: Arc<dyn NotificationProvider> = if textbee.is_configured() {
        Arc::new(textbee)
    } else {
        Arc::new(ConsoleProvider::new(Channel::Sms))
    };

    info!(
        email_backend = email.name(),
        sms_backend = sms.name(),
        "Notification backends selected"
    );

    NotificationRouter::new(email, sms)
}
