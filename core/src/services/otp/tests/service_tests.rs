//! Unit tests for the passcode service

use std::sync::Arc;

use crate::domain::entities::otp_record::Channel;
use crate::errors::{DomainError, TokenError};
use crate::services::otp::{InMemoryOtpStore, OtpService, OtpServiceConfig, OtpStore};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::{extract_code, router_with, MockProvider};

struct TestHarness {
    service: OtpService<InMemoryOtpStore>,
    store: Arc<InMemoryOtpStore>,
    email: Arc<MockProvider>,
    sms: Arc<MockProvider>,
    tokens: Arc<TokenService>,
}

fn harness_with(config: OtpServiceConfig, sms_fails: bool) -> TestHarness {
    let store = Arc::new(InMemoryOtpStore::new());
    let email = Arc::new(MockProvider::new(Channel::Email));
    let sms = if sms_fails {
        Arc::new(MockProvider::failing(Channel::Sms))
    } else {
        Arc::new(MockProvider::new(Channel::Sms))
    };
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(
        "unit-test-secret",
    )));

    let service = OtpService::new(
        store.clone(),
        router_with(email.clone(), sms.clone()),
        tokens.clone(),
        config,
    );

    TestHarness {
        service,
        store,
        email,
        sms,
        tokens,
    }
}

fn harness() -> TestHarness {
    harness_with(OtpServiceConfig::default(), false)
}

#[tokio::test]
async fn test_send_otp_delivers_code_over_email() {
    let h = harness();

    let result = h.service.send_otp("user@example.com", Channel::Email).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().expires_in, 300);

    let message = h.email.last_message().expect("email should be delivered");
    assert!(message.contains("expire in 5 minutes"));
    assert_eq!(extract_code(&message).len(), 6);
    assert_eq!(h.sms.sent_count(), 0);

    let record = h.store.get("user@example.com").await.unwrap();
    assert_eq!(record.channel, Channel::Email);
    assert!(message.contains(&record.code));
}

#[tokio::test]
async fn test_send_otp_delivers_code_over_sms() {
    let h = harness();

    h.service
        .send_otp("+15555550123", Channel::Sms)
        .await
        .unwrap();

    assert_eq!(h.sms.sent_count(), 1);
    assert_eq!(h.email.sent_count(), 0);
}

#[tokio::test]
async fn test_verify_otp_success_mints_token() {
    let h = harness();

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let code = extract_code(&h.email.last_message().unwrap());

    let result = h.service.verify_otp("user@example.com", &code).await.unwrap();
    assert!(result.is_valid);

    let contact = h
        .tokens
        .verify(result.token.as_deref().unwrap())
        .expect("token should verify");
    assert_eq!(contact.recipient, "user@example.com");
    assert_eq!(contact.channel, Channel::Email);
}

#[tokio::test]
async fn test_verify_otp_is_one_time_use() {
    let h = harness();

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let code = extract_code(&h.email.last_message().unwrap());

    assert!(h.service.verify_otp("user@example.com", &code).await.unwrap().is_valid);
    assert!(h.store.get("user@example.com").await.is_none());

    // Same code again: the record is gone
    let result = h.service.verify_otp("user@example.com", &code).await.unwrap();
    assert!(!result.is_valid);
    assert!(result.token.is_none());
}

#[tokio::test]
async fn test_verify_otp_unknown_recipient() {
    let h = harness();
    let result = h.service.verify_otp("nobody@example.com", "123456").await.unwrap();
    assert!(!result.is_valid);
    assert!(result.token.is_none());
}

#[tokio::test]
async fn test_verify_otp_wrong_code_increments_attempts() {
    let h = harness();

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let code = extract_code(&h.email.last_message().unwrap());
    let wrong = if code == "111111" { "222222" } else { "111111" };

    let result = h.service.verify_otp("user@example.com", wrong).await.unwrap();
    assert!(!result.is_valid);

    // Record survives with the attempt recorded
    let record = h.store.get("user@example.com").await.unwrap();
    assert_eq!(record.attempts, 1);
}

#[tokio::test]
async fn test_verify_otp_malformed_code_does_not_consume_attempt() {
    let h = harness();

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();

    for malformed in ["12345", "1234567", "12345a", "", "abcdef"] {
        let result = h.service.verify_otp("user@example.com", malformed).await.unwrap();
        assert!(!result.is_valid);
    }

    assert_eq!(h.store.get("user@example.com").await.unwrap().attempts, 0);
}

#[tokio::test]
async fn test_lockout_takes_precedence_over_correct_code() {
    let h = harness();

    h.service
        .send_otp("+15555550123", Channel::Sms)
        .await
        .unwrap();
    let code = extract_code(&h.sms.last_message().unwrap());
    let wrong = if code == "000000" { "999999" } else { "000000" };

    for _ in 0..5 {
        let result = h.service.verify_otp("+15555550123", wrong).await.unwrap();
        assert!(!result.is_valid);
    }

    // Attempts are exhausted; even the correct code is refused and the
    // record is evicted
    let result = h.service.verify_otp("+15555550123", &code).await.unwrap();
    assert!(!result.is_valid);
    assert!(result.token.is_none());
    assert!(h.store.get("+15555550123").await.is_none());
}

#[tokio::test]
async fn test_expired_code_is_rejected_and_removed() {
    let h = harness_with(
        OtpServiceConfig {
            ttl_seconds: 0,
            ..Default::default()
        },
        false,
    );

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let code = extract_code(&h.email.last_message().unwrap());

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let result = h.service.verify_otp("user@example.com", &code).await.unwrap();
    assert!(!result.is_valid);
    assert!(h.store.get("user@example.com").await.is_none());
}

#[tokio::test]
async fn test_resend_invalidates_previous_code() {
    let h = harness();

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let first_code = extract_code(&h.email.last_message().unwrap());

    h.service
        .send_otp("user@example.com", Channel::Email)
        .await
        .unwrap();
    let second_code = extract_code(&h.email.last_message().unwrap());

    if first_code == second_code {
        // Astronomically unlikely; nothing further to assert
        return;
    }

    let result = h.service.verify_otp("user@example.com", &first_code).await.unwrap();
    assert!(!result.is_valid);

    let result = h.service.verify_otp("user@example.com", &second_code).await.unwrap();
    assert!(result.is_valid);
}

#[tokio::test]
async fn test_delivery_failure_propagates_but_leaves_code_pending() {
    let h = harness_with(OtpServiceConfig::default(), true);

    let result = h.service.send_otp("+15555550123", Channel::Sms).await;
    match result.unwrap_err() {
        DomainError::Delivery(error) => {
            assert_eq!(error.channel, Channel::Sms);
        }
        other => panic!("expected delivery error, got {:?}", other),
    }

    // The record was written before delivery was attempted and is still
    // verifiable
    let record = h.store.get("+15555550123").await.unwrap();
    let result = h.service.verify_otp("+15555550123", &record.code).await.unwrap();
    assert!(result.is_valid);
}

#[tokio::test]
async fn test_verify_otp_without_signing_secret_fails_issuance() {
    let store = Arc::new(InMemoryOtpStore::new());
    let email = Arc::new(MockProvider::new(Channel::Email));
    let sms = Arc::new(MockProvider::new(Channel::Sms));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));

    let service = OtpService::new(
        store.clone(),
        router_with(email.clone(), sms),
        tokens,
        OtpServiceConfig::default(),
    );

    service.send_otp("user@example.com", Channel::Email).await.unwrap();
    let code = extract_code(&email.last_message().unwrap());

    let result = service.verify_otp("user@example.com", &code).await;
    match result.unwrap_err() {
        DomainError::Token(TokenError::MissingSecret) => {}
        other => panic!("expected missing-secret error, got {:?}", other),
    }
}
