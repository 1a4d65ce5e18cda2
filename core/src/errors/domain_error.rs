//! Top-level domain error umbrella.

use thiserror::Error;

use super::types::{DeliveryError, TokenError, ValidationError};

/// Result alias used across domain services
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced by the domain services
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Token issuance failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Notification delivery failed
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}
