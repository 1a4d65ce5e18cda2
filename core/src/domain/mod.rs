//! Domain model for contact verification and story submission.

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{
    Channel, NewStory, OtpRecord, Story, StorySubmission, VerificationClaims, VerifiedContact,
    CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS, TOKEN_EXPIRY_MINUTES,
};
pub use value_objects::NotificationPayload;
