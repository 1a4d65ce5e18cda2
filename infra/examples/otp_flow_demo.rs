//! End-to-end demo of the verification flow.
//!
//! Run with:
//! ```bash
//! cargo run -p sv_infra --example otp_flow_demo
//! ```
//!
//! Without SMTP or TextBee configuration both channels fall back to the
//! console backend, so the passcode shows up in the log output and can be
//! typed back in.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use sv_core::repositories::story::InMemoryStoryRepository;
use sv_core::services::otp::{InMemoryOtpStore, OtpService};
use sv_core::services::submission::{SubmissionConfig, SubmissionService};
use sv_core::services::token::TokenService;
use sv_core::{Channel, StorySubmission};
use sv_infra::notification::create_router;
use sv_shared::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    println!("Environment: {}", config.environment);

    let router = Arc::new(create_router(&config.notification));
    let tokens = Arc::new(TokenService::new(config.token.clone().into()));
    let otp = OtpService::new(
        Arc::new(InMemoryOtpStore::new()),
        router,
        tokens.clone(),
        config.otp.clone().into(),
    );
    let _sweeper = otp.start_background_sweep();

    let recipient = "demo@example.com";
    let sent = otp.send_otp(recipient, Channel::Email).await?;
    println!(
        "Code sent to {} (expires in {} seconds).",
        recipient, sent.expires_in
    );

    print!("Enter the code: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let result = otp.verify_otp(recipient, code.trim()).await?;
    let Some(token) = result.token else {
        println!("Invalid code.");
        return Ok(());
    };
    println!("Code accepted, verification token issued.");

    let repository = Arc::new(InMemoryStoryRepository::new());
    let gate = SubmissionService::new(repository, tokens, SubmissionConfig::default());
    let story = gate
        .create_story(StorySubmission {
            name: "Demo Teller".to_string(),
            email: Some(recipient.to_string()),
            content: "A demo story submitted through the verification gate.".to_string(),
            language: "en".to_string(),
            verification_token: Some(token),
            ..Default::default()
        })
        .await?;

    println!(
        "Story {} created (verified_phone: {}).",
        story.id, story.verified_phone
    );
    Ok(())
}
