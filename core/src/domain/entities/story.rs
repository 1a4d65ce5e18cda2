//! Story entities for the submission flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum story content length in characters
pub const MIN_CONTENT_LENGTH: usize = 10;

/// Maximum story content length in characters
pub const MAX_CONTENT_LENGTH: usize = 50_000;

/// Incoming story payload as supplied by a client.
///
/// Carries an optional verification token minted by the passcode flow;
/// the token is checked and stripped by the submission gate before the
/// payload reaches persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorySubmission {
    /// Name of the story teller
    pub name: String,

    /// Claimed phone number (E.164), if any
    #[serde(default)]
    pub phone: Option<String>,

    /// Claimed email address, if any
    #[serde(default)]
    pub email: Option<String>,

    /// City the story is set in
    #[serde(default)]
    pub city: Option<String>,

    /// Country the story is set in
    #[serde(default)]
    pub country: Option<String>,

    /// Background of the story teller
    #[serde(default)]
    pub teller_background: Option<String>,

    /// Background of the story itself
    #[serde(default)]
    pub story_background: Option<String>,

    /// Story title
    #[serde(default)]
    pub title: Option<String>,

    /// The story text
    pub content: String,

    /// Language the story is written in
    pub language: String,

    /// Token from the contact verification flow
    #[serde(default)]
    pub verification_token: Option<String>,
}

impl StorySubmission {
    /// Converts the submission into persistence data, dropping the
    /// verification token and recording the verification outcome
    pub fn into_new_story(self, verified_phone: bool) -> NewStory {
        NewStory {
            name: self.name,
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            city: self.city,
            country: self.country,
            teller_background: self.teller_background,
            story_background: self.story_background,
            title: self.title,
            content: self.content,
            language: self.language,
            verified_phone,
        }
    }
}

/// Story data handed to the persistence layer; the verification token has
/// already been stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStory {
    /// Name of the story teller
    pub name: String,
    /// Contact phone number, empty when not supplied
    pub phone: String,
    /// Contact email address, empty when not supplied
    pub email: String,
    /// City the story is set in
    pub city: Option<String>,
    /// Country the story is set in
    pub country: Option<String>,
    /// Background of the story teller
    pub teller_background: Option<String>,
    /// Background of the story itself
    pub story_background: Option<String>,
    /// Story title
    pub title: Option<String>,
    /// The story text
    pub content: String,
    /// Language the story is written in
    pub language: String,
    /// Whether the phone number was verified over SMS
    pub verified_phone: bool,
}

/// A persisted story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier for the story
    pub id: Uuid,
    /// Name of the story teller
    pub name: String,
    /// Contact phone number, empty when not supplied
    pub phone: String,
    /// Contact email address, empty when not supplied
    pub email: String,
    /// City the story is set in
    pub city: Option<String>,
    /// Country the story is set in
    pub country: Option<String>,
    /// Background of the story teller
    pub teller_background: Option<String>,
    /// Background of the story itself
    pub story_background: Option<String>,
    /// Story title
    pub title: Option<String>,
    /// The story text
    pub content: String,
    /// Language the story is written in
    pub language: String,
    /// Whether the phone number was verified over SMS
    pub verified_phone: bool,
    /// Timestamp when the story was created
    pub created_at: DateTime<Utc>,
    /// Timestamp when the story was last updated
    pub updated_at: DateTime<Utc>,
}
