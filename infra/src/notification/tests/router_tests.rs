//! Tests for router construction and fallback selection

use sv_core::Channel;
use sv_shared::config::{NotificationConfig, SmtpConfig, TextBeeConfig};

use crate::notification::create_router;

fn full_smtp() -> SmtpConfig {
    SmtpConfig {
        host: "smtp.example.com".to_string(),
        port: 587,
        secure: false,
        username: "noreply@example.com".to_string(),
        password: "hunter2".to_string(),
        from: String::new(),
    }
}

fn full_textbee() -> TextBeeConfig {
    TextBeeConfig {
        base_url: "https://api.textbee.dev/api/v1".to_string(),
        device_id: "device-1".to_string(),
        api_key: "key-1".to_string(),
    }
}

#[test]
fn test_empty_config_falls_back_to_console_for_both_channels() {
    let router = create_router(&NotificationConfig::default());

    assert_eq!(router.provider(Channel::Email).name(), "console");
    assert_eq!(router.provider(Channel::Sms).name(), "console");
}

#[test]
fn test_full_config_selects_concrete_backends() {
    let config = NotificationConfig {
        smtp: full_smtp(),
        textbee: full_textbee(),
    };
    let router = create_router(&config);

    assert_eq!(router.provider(Channel::Email).name(), "smtp");
    assert_eq!(router.provider(Channel::Sms).name(), "textbee");
}

#[test]
fn test_channels_fall_back_independently() {
    let config = NotificationConfig {
        smtp: SmtpConfig::default(),
        textbee: full_textbee(),
    };
    let router = create_router(&config);

    assert_eq!(router.provider(Channel::Email).name(), "console");
    assert_eq!(router.provider(Channel::Sms).name(), "textbee");
}

#[tokio::test]
async fn test_fallback_router_dispatch_never_fails() {
    let router = create_router(&NotificationConfig::default());
    let payload = sv_core::NotificationPayload::new("user@example.com", "code message");

    assert!(router.dispatch(Channel::Email, &payload).await.is_ok());
    assert!(router.dispatch(Channel::Sms, &payload).await.is_ok());
}
