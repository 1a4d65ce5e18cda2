//! Notification payload value object.

/// A single outbound message, produced and consumed within one send call.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    /// Channel address the message is delivered to
    pub recipient: String,

    /// Subject line, used by email backends and ignored by SMS
    pub subject: Option<String>,

    /// Human-readable message body
    pub message: String,
}

impl NotificationPayload {
    /// Creates a payload with no subject
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: None,
            message: message.into(),
        }
    }

    /// Sets the subject line
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
