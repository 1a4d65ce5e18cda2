//! Value objects shared across services.

pub mod notification;

pub use notification::NotificationPayload;
