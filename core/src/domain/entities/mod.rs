//! Domain entities representing core business objects.

pub mod otp_record;
pub mod story;
pub mod token;

// Re-export commonly used types
pub use otp_record::{Channel, OtpRecord, CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_TTL_SECONDS};
pub use story::{NewStory, Story, StorySubmission, MAX_CONTENT_LENGTH, MIN_CONTENT_LENGTH};
pub use token::{VerificationClaims, VerifiedContact, TOKEN_EXPIRY_MINUTES};
