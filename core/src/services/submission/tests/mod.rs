//! Tests for the submission gate
