//! Repository interfaces for persistence collaborators.
//!
//! The core owns only the interfaces plus in-memory implementations for
//! tests and local development; concrete persistence lives outside this
//! workspace.

pub mod story;

pub use story::{InMemoryStoryRepository, StoryRepository};
