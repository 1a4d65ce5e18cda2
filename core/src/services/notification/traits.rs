//! Provider contract for delivery backends.

use async_trait::async_trait;

use crate::domain::entities::otp_record::Channel;
use crate::domain::value_objects::notification::NotificationPayload;
use crate::errors::DeliveryError;

/// Uniform contract for channel-specific delivery backends.
///
/// Implementations translate a [`NotificationPayload`] into their
/// transport's call shape and surface transport failures as
/// [`DeliveryError`]. Transports initialize lazily on first send so an
/// unconfigured or unused backend costs nothing.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Channel this backend delivers on
    fn channel(&self) -> Channel;

    /// Short backend name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Whether all required settings for this backend are present and
    /// non-empty.
    ///
    /// Pure predicate with no side effects; evaluated once at router
    /// construction.
    fn is_configured(&self) -> bool;

    /// Deliver a single message
    async fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError>;
}
