//! One-time passcode entity for contact channel verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a passcode (5 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 300;

/// Default maximum number of verification attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Delivery channel for a one-time passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Delivery to an email address
    Email,
    /// Delivery to a phone number
    Sms,
}

impl Channel {
    /// Lowercase wire name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            other => Err(format!("Invalid channel: {}", other)),
        }
    }
}

/// A pending one-time passcode bound to a single recipient.
///
/// At most one live record exists per recipient; issuing a new code
/// overwrites the previous record. The recipient string (email address or
/// E.164 phone number) is opaque to this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit passcode
    pub code: String,

    /// Channel address this code was sent to
    pub recipient: String,

    /// Channel the code was delivered over
    pub channel: Channel,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Number of verification attempts made
    pub attempts: u32,
}

impl OtpRecord {
    /// Creates a new record with a fresh random code expiring `ttl_seconds`
    /// from now
    pub fn new(recipient: impl Into<String>, channel: Channel, ttl_seconds: i64) -> Self {
        Self {
            code: Self::generate_code(),
            recipient: recipient.into(),
            channel,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
            attempts: 0,
        }
    }

    /// Generates a passcode uniformly at random over [100000, 999999]
    /// using the OS CSPRNG
    fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks whether the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Records one verification attempt, successful or not
    pub fn register_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Compares a candidate code against the stored code in constant time.
    ///
    /// Length must match exactly; the comparison itself never short-circuits.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
