//! In-memory story repository for tests and local development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::story::{NewStory, Story};
use crate::errors::{DomainError, DomainResult};

use super::r#trait::StoryRepository;

/// In-memory [`StoryRepository`] implementation
#[derive(Default)]
pub struct InMemoryStoryRepository {
    stories: Mutex<HashMap<Uuid, Story>>,
    fail_on_create: bool,
}

impl InMemoryStoryRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose `create` always fails
    pub fn failing() -> Self {
        Self {
            fail_on_create: true,
            ..Default::default()
        }
    }

    /// Number of stories currently held
    pub fn count(&self) -> usize {
        self.stories.lock().unwrap().len()
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn create(&self, story: NewStory) -> DomainResult<Story> {
        if self.fail_on_create {
            return Err(DomainError::Internal {
                message: "story repository failure".to_string(),
            });
        }

        let now = Utc::now();
        let story = Story {
            id: Uuid::new_v4(),
            name: story.name,
            phone: story.phone,
            email: story.email,
            city: story.city,
            country: story.country,
            teller_background: story.teller_background,
            story_background: story.story_background,
            title: story.title,
            content: story.content,
            language: story.language,
            verified_phone: story.verified_phone,
            created_at: now,
            updated_at: now,
        };

        self.stories.lock().unwrap().insert(story.id, story.clone());
        Ok(story)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Story>> {
        Ok(self.stories.lock().unwrap().get(&id).cloned())
    }
}
