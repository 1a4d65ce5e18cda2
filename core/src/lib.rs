//! # StoryVault Core
//!
//! Core business logic and domain layer for the StoryVault backend.
//! This crate contains the contact verification subsystem (one-time
//! passcodes, signed verification tokens, notification routing) and the
//! submission gate that ties verification to story creation.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
