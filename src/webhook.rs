//! Slack incoming webhook client.

use serde::Serialize;
use tracing::info;

use crate::prelude::*;

/// Body of a Slack incoming webhook message.
#[derive(Debug, Serialize)]
pub struct WebhookMessage<'a> {
    pub text: &'a str,
}

/// Posts messages to a single webhook URL.
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::ClientBuilder::new().build()?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Send `text` and return the webhook's response body.
    pub async fn send(&self, text: &str) -> Result<String> {
        info!("Sending message");
        let payload = serde_json::to_string(&WebhookMessage { text })?;

        let response = self
            .client
            .post(&self.url)
            .header("content-type", "application/json")
            .body(payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::WebhookRejected { status, body });
        }
        info!("Message response: {body}");
        Ok(body)
    }
}
