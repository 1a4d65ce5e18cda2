//! Passcode issuance and verification engine.

use std::sync::Arc;
use tracing;

use crate::domain::entities::otp_record::{Channel, OtpRecord, CODE_LENGTH};
use crate::domain::value_objects::notification::NotificationPayload;
use crate::errors::DomainResult;
use crate::services::notification::NotificationRouter;
use crate::services::token::TokenService;

use super::config::OtpServiceConfig;
use super::store::OtpStore;
use super::sweep::SweepHandle;
use super::types::{SendOtpResult, VerifyOtpResult};

/// Subject line used for email passcode deliveries
const EMAIL_SUBJECT: &str = "Your verification code";

/// Engine for issuing and verifying one-time passcodes.
///
/// State machine per recipient: `none -> pending(attempts=0) ->
/// pending(attempts=k)* -> {consumed | expired | locked-out}`, with every
/// terminal state converging back to record absence.
pub struct OtpService<S: OtpStore> {
    store: Arc<S>,
    router: Arc<NotificationRouter>,
    tokens: Arc<TokenService>,
    config: OtpServiceConfig,
}

impl<S: OtpStore + 'static> OtpService<S> {
    /// Creates a new passcode engine
    pub fn new(
        store: Arc<S>,
        router: Arc<NotificationRouter>,
        tokens: Arc<TokenService>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            router,
            tokens,
            config,
        }
    }

    /// Issue a fresh passcode for a recipient and dispatch it over the
    /// given channel.
    ///
    /// Any previous pending code for the recipient is overwritten; resend
    /// throttling belongs to the rate-limiting collaborator, not here.
    /// The record is written before delivery is attempted, so a delivery
    /// failure propagates as an error while the code stays pending and a
    /// later resend overwrites it cleanly.
    pub async fn send_otp(&self, recipient: &str, channel: Channel) -> DomainResult<SendOtpResult> {
        let record = OtpRecord::new(recipient, channel, self.config.ttl_seconds);
        let message = format!(
            "Your verification code is: {}. This code will expire in {} minutes.",
            record.code,
            self.config.ttl_seconds / 60
        );

        self.store.insert(record).await;

        tracing::info!(
            recipient,
            channel = %channel,
            event = "otp_issued",
            "Issued new verification code"
        );

        let payload = match channel {
            Channel::Email => {
                NotificationPayload::new(recipient, message).with_subject(EMAIL_SUBJECT)
            }
            Channel::Sms => NotificationPayload::new(recipient, message),
        };

        self.router.dispatch(channel, &payload).await?;

        Ok(SendOtpResult {
            expires_in: self.config.ttl_seconds,
        })
    }

    /// Verify a passcode for a recipient.
    ///
    /// On success the record is consumed and a signed verification token
    /// bound to the recipient and channel is returned. Wrong codes,
    /// expired codes, and exhausted attempt limits all collapse to
    /// `is_valid: false`.
    pub async fn verify_otp(&self, recipient: &str, code: &str) -> DomainResult<VerifyOtpResult> {
        // A malformed code can never match; reject it without consuming
        // an attempt.
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                recipient,
                event = "otp_malformed_code",
                "Rejected malformed verification code"
            );
            return Ok(VerifyOtpResult::invalid());
        }

        let Some(mut record) = self.store.get(recipient).await else {
            return Ok(VerifyOtpResult::invalid());
        };

        if record.is_expired() {
            self.store.remove(recipient).await;
            tracing::info!(recipient, event = "otp_expired", "Verification code expired");
            return Ok(VerifyOtpResult::invalid());
        }

        if record.attempts >= self.config.max_attempts {
            self.store.remove(recipient).await;
            tracing::warn!(
                recipient,
                event = "otp_locked_out",
                "Maximum verification attempts exceeded"
            );
            return Ok(VerifyOtpResult::invalid());
        }

        record.register_attempt();

        if !record.matches(code) {
            let attempts = record.attempts;
            self.store.insert(record).await;
            tracing::warn!(
                recipient,
                attempts,
                event = "otp_mismatch",
                "Verification code mismatch"
            );
            return Ok(VerifyOtpResult::invalid());
        }

        // One-time use: the record is consumed before the token is minted.
        self.store.remove(recipient).await;

        let token = self.tokens.issue(recipient, record.channel)?;

        tracing::info!(
            recipient,
            channel = %record.channel,
            event = "otp_verified",
            "Verification code accepted"
        );

        Ok(VerifyOtpResult {
            is_valid: true,
            token: Some(token),
        })
    }

    /// Start the periodic sweep of expired records.
    ///
    /// The returned handle aborts the task when stopped or dropped; hold
    /// it for the lifetime of the engine.
    pub fn start_background_sweep(&self) -> SweepHandle {
        SweepHandle::spawn(self.store.clone(), self.config.sweep_interval_seconds)
    }
}
