//! Business services containing domain logic and use cases.

pub mod notification;
pub mod otp;
pub mod submission;
pub mod token;

// Re-export commonly used types
pub use notification::{NotificationProvider, NotificationRouter};
pub use otp::{
    InMemoryOtpStore, OtpService, OtpServiceConfig, OtpStore, SendOtpResult, SweepHandle,
    VerifyOtpResult,
};
pub use submission::{SubmissionConfig, SubmissionService};
pub use token::{TokenService, TokenServiceConfig};
