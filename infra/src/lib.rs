//! # Infrastructure Layer
//!
//! Concrete delivery backends for the StoryVault verification core:
//! - **SMTP**: email delivery via lettre
//! - **TextBee**: SMS delivery through a TextBee HTTP gateway device
//! - **Console**: log-only fallback used whenever a channel has no
//!   configured backend
//!
//! [`notification::create_router`] wires one backend per channel from
//! [`sv_shared::config::NotificationConfig`], falling back to the console
//! backend so passcode issuance never hard-fails from missing
//! configuration.

pub mod notification;

pub use notification::{create_router, ConsoleProvider, SmtpProvider, TextBeeProvider};
