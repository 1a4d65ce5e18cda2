//! Error type definitions for validation, token, and delivery operations.

use thiserror::Error;

use crate::domain::entities::otp_record::Channel;

/// Input validation failures, surfaced to callers as rejected operations
/// with a field-level reason; never retried automatically
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    #[error("Verification token does not match provided contact information")]
    TokenContactMismatch,

    #[error("A verification token is required to submit a story")]
    VerificationRequired,
}

/// Token issuance failures.
///
/// Verification-side failures never surface as errors; they collapse to
/// `None` at the verify seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Transport-level failure while delivering a notification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{channel} delivery failed: {message}")]
pub struct DeliveryError {
    /// Channel the failed delivery was attempted on
    pub channel: Channel,
    /// Coarse description of the transport failure
    pub message: String,
}

impl DeliveryError {
    /// Creates a delivery error for the given channel
    pub fn new(channel: Channel, message: impl Into<String>) -> Self {
        Self {
            channel,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::RequiredField {
            field: "name".to_string(),
        };
        assert_eq!(error.to_string(), "Required field: name");

        let error = ValidationError::TokenContactMismatch;
        assert!(error.to_string().contains("does not match"));
    }

    #[test]
    fn test_delivery_error_display() {
        let error = DeliveryError::new(Channel::Sms, "gateway timed out");
        assert_eq!(error.to_string(), "sms delivery failed: gateway timed out");
        assert_eq!(error.channel, Channel::Sms);
    }
}
