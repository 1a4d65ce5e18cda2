//! HMAC-signed verification token codec.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::otp_record::Channel;
use crate::domain::entities::token::{VerificationClaims, VerifiedContact};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies the compact tokens binding a recipient and channel.
///
/// Tokens are stateless: the service holds no reference to issued tokens
/// and validity is determined entirely by signature and expiry.
pub struct TokenService {
    keys: Option<(EncodingKey, DecodingKey)>,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// Without a secret the service refuses issuance and verifies every
    /// token to `None`.
    pub fn new(config: TokenServiceConfig) -> Self {
        let keys = config
            .secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .map(|secret| {
                (
                    EncodingKey::from_secret(secret.as_bytes()),
                    DecodingKey::from_secret(secret.as_bytes()),
                )
            });

        if keys.is_none() {
            warn!("No signing secret configured; token issuance disabled and verification fails closed");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self { keys, validation }
    }

    /// Issue a signed token asserting `recipient` was verified over
    /// `channel`, expiring 15 minutes from now
    pub fn issue(&self, recipient: &str, channel: Channel) -> Result<String, DomainError> {
        let Some((encoding_key, _)) = &self.keys else {
            return Err(TokenError::MissingSecret.into());
        };

        let claims = VerificationClaims::new(recipient, channel);
        encode(&Header::new(Algorithm::HS256), &claims, encoding_key).map_err(|error| {
            warn!(%error, "Token encoding failed");
            TokenError::TokenGenerationFailed.into()
        })
    }

    /// Verify a token and return the contact it asserts.
    ///
    /// Returns `None` on any failure: malformed structure, signature
    /// mismatch, missing secret, or expired claims. Callers treat `None`
    /// as "not verified", never as an exceptional condition.
    pub fn verify(&self, token: &str) -> Option<VerifiedContact> {
        let Some((_, decoding_key)) = &self.keys else {
            // Fail closed
            return None;
        };

        match decode::<VerificationClaims>(token, decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.into()),
            Err(error) => {
                debug!(%error, "Token verification failed");
                None
            }
        }
    }
}
