//! Error types for the verification core.
//!
//! These types report coarse-grained outcomes; user-facing message
//! rendering belongs to the presentation layer. No variant ever carries a
//! passcode, a token, or the signing secret.

mod domain_error;
mod types;

pub use domain_error::{DomainError, DomainResult};
pub use types::{DeliveryError, TokenError, ValidationError};
