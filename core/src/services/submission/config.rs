//! Configuration for the submission gate.

/// Configuration for [`SubmissionService`](super::SubmissionService)
#[derive(Debug, Clone, Default)]
pub struct SubmissionConfig {
    /// When set, submissions without a verification token are rejected.
    ///
    /// Defaults to off: token-less submissions are accepted unverified.
    pub require_verification: bool,
}
