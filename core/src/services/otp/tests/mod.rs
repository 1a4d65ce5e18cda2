//! Tests for the passcode service

#[cfg(test)]
mod service_tests;
