//! Shared configuration and utilities for the StoryVault backend
//!
//! This crate provides common functionality used across the workspace:
//! - Environment-driven configuration types
//! - Contact validation and masking utilities

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    NotificationConfig, OtpConfig, SmtpConfig, TextBeeConfig, TokenConfig,
};
pub use utils::{masking, validation};
