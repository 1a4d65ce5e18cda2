//! Story repository contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::story::{NewStory, Story};
use crate::errors::DomainResult;

/// Persistence contract for stories
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Persist a new story and return the stored entity
    async fn create(&self, story: NewStory) -> DomainResult<Story>;

    /// Fetch a story by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Story>>;
}
