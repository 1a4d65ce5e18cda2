//! Tests for the story repository
