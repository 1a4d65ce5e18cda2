//! Submission gate implementation.

use std::sync::Arc;
use tracing;

use sv_shared::utils::validation::{is_valid_email, is_valid_phone};

use crate::domain::entities::otp_record::Channel;
use crate::domain::entities::story::{
    Story, StorySubmission, MAX_CONTENT_LENGTH, MIN_CONTENT_LENGTH,
};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::story::StoryRepository;
use crate::services::token::TokenService;

use super::config::SubmissionConfig;

/// Gate between story submission payloads and persistence.
///
/// Validates the payload, checks any verification token against the
/// claimed contact information, derives the verified-channel flag, and
/// strips the token before handing the story to the repository.
pub struct SubmissionService<R: StoryRepository> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
    config: SubmissionConfig,
}

impl<R: StoryRepository> SubmissionService<R> {
    /// Creates a new submission gate
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>, config: SubmissionConfig) -> Self {
        Self {
            repository,
            tokens,
            config,
        }
    }

    /// Validate a submission, check its verification token, and persist
    /// the story
    pub async fn create_story(&self, submission: StorySubmission) -> DomainResult<Story> {
        self.validate(&submission)?;

        let verified_channel = match submission.verification_token.as_deref() {
            Some(token) => Some(self.check_token(&submission, token)?),
            None if self.config.require_verification => {
                tracing::warn!(
                    event = "submission_rejected",
                    "Story submission without verification token refused"
                );
                return Err(ValidationError::VerificationRequired.into());
            }
            None => None,
        };

        let verified_phone = verified_channel == Some(Channel::Sms);
        let story = self
            .repository
            .create(submission.into_new_story(verified_phone))
            .await?;

        tracing::info!(
            story_id = %story.id,
            verified_phone,
            event = "story_created",
            "Story accepted"
        );

        Ok(story)
    }

    fn validate(&self, submission: &StorySubmission) -> Result<(), ValidationError> {
        if submission.name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }

        let content_length = submission.content.chars().count();
        if !(MIN_CONTENT_LENGTH..=MAX_CONTENT_LENGTH).contains(&content_length) {
            return Err(ValidationError::InvalidLength {
                field: "content".to_string(),
                min: MIN_CONTENT_LENGTH,
                max: MAX_CONTENT_LENGTH,
            });
        }

        let phone = submission.phone.as_deref().filter(|p| !p.trim().is_empty());
        let email = submission.email.as_deref().filter(|e| !e.trim().is_empty());

        // At least one contact method must be provided
        if phone.is_none() && email.is_none() {
            return Err(ValidationError::RequiredField {
                field: "phone".to_string(),
            });
        }

        if let Some(phone) = phone {
            if !is_valid_phone(phone) {
                return Err(ValidationError::InvalidFormat {
                    field: "phone".to_string(),
                });
            }
        }

        if let Some(email) = email {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidFormat {
                    field: "email".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Check a verification token against the claimed contact info and
    /// return the channel it asserts
    fn check_token(
        &self,
        submission: &StorySubmission,
        token: &str,
    ) -> Result<Channel, ValidationError> {
        let Some(contact) = self.tokens.verify(token) else {
            tracing::warn!(
                event = "submission_token_invalid",
                "Story submission carried an invalid or expired verification token"
            );
            return Err(ValidationError::InvalidVerificationToken);
        };

        let matches_email = submission.email.as_deref() == Some(contact.recipient.as_str());
        let matches_phone = submission.phone.as_deref() == Some(contact.recipient.as_str());

        if !matches_email && !matches_phone {
            tracing::warn!(
                event = "submission_token_mismatch",
                "Verification token does not match the claimed contact"
            );
            return Err(ValidationError::TokenContactMismatch);
        }

        Ok(contact.channel)
    }
}
