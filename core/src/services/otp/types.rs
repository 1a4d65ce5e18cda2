//! Result types for the passcode service.

/// Result of issuing a passcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOtpResult {
    /// Seconds until the issued code expires
    pub expires_in: i64,
}

/// Result of a verification attempt.
///
/// A wrong code, an expired code, and an exhausted attempt limit all
/// produce the same `is_valid: false`; callers cannot distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtpResult {
    /// Whether the supplied code matched
    pub is_valid: bool,

    /// Signed verification token, present only on success
    pub token: Option<String>,
}

impl VerifyOtpResult {
    pub(crate) fn invalid() -> Self {
        Self {
            is_valid: false,
            token: None,
        }
    }
}
