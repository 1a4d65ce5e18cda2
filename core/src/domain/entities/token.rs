//! Verification token claims issued after a successful passcode check.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::otp_record::Channel;

/// Verification token lifetime (15 minutes), independent of the passcode TTL
pub const TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Claims carried by a signed verification token.
///
/// The token is stateless: the server holds no reference to it after
/// issuance, and validity is determined entirely by its signature and
/// expiry at verification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationClaims {
    /// Contact address that was verified
    pub recipient: String,

    /// Channel the passcode was delivered over
    pub channel: Channel,

    /// Always true for issued tokens
    pub verified: bool,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl VerificationClaims {
    /// Creates claims for a freshly verified recipient, expiring
    /// [`TOKEN_EXPIRY_MINUTES`] from now
    pub fn new(recipient: impl Into<String>, channel: Channel) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(TOKEN_EXPIRY_MINUTES);

        Self {
            recipient: recipient.into(),
            channel,
            verified: true,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Decoded contact handed back to callers after token verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedContact {
    /// Contact address the token asserts was verified
    pub recipient: String,
    /// Channel the verification happened over
    pub channel: Channel,
}

impl From<VerificationClaims> for VerifiedContact {
    fn from(claims: VerificationClaims) -> Self {
        Self {
            recipient: claims.recipient,
            channel: claims.channel,
        }
    }
}
