use std::time::Duration;

use anyhow::Context as _;
use serde::Serialize;
use tracing::info;

use crate::domain::repository::OtpNotifier;
use crate::error::ApiError;

/// Writes the code to the service log. Used when no delivery channel is configured.
#[derive(Clone, Default)]
pub struct LogOtpNotifier;

impl OtpNotifier for LogOtpNotifier {
    async fn notify(&self, email: &str, code: &str) -> Result<(), ApiError> {
        info!(email = %email, otp = %code, "login otp (no delivery channel configured)");
        Ok(())
    }
}

#[derive(Serialize)]
struct OtpWebhookPayload<'a> {
    email: &'a str,
    otp: &'a str,
}

/// POSTs `{email, otp}` as JSON to a delivery webhook (mail or SMS relay).
#[derive(Clone)]
pub struct WebhookOtpNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookOtpNotifier {
    pub fn new(url: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("build otp webhook client")?;
        Ok(Self { client, url })
    }
}

impl OtpNotifier for WebhookOtpNotifier {
    async fn notify(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.client
            .post(&self.url)
            .json(&OtpWebhookPayload { email, otp: code })
            .send()
            .await
            .context("send otp webhook")?
            .error_for_status()
            .context("otp webhook rejected")?;
        Ok(())
    }
}

/// Notifier selected at startup from configuration.
#[derive(Clone)]
pub enum OtpDispatcher {
    Log(LogOtpNotifier),
    Webhook(WebhookOtpNotifier),
}

impl OtpDispatcher {
    pub fn from_webhook_url(url: Option<String>) -> anyhow::Result<Self> {
        match url {
            Some(url) if !url.is_empty() => Ok(Self::Webhook(WebhookOtpNotifier::new(url)?)),
            _ => Ok(Self::Log(LogOtpNotifier)),
        }
    }
}

impl OtpNotifier for OtpDispatcher {
    async fn notify(&self, email: &str, code: &str) -> Result<(), ApiError> {
        match self {
            Self::Log(n) => n.notify(email, code).await,
            Self::Webhook(n) => n.notify(email, code).await,
        }
    }
}
