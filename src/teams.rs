//! Outbound client for the Teams incoming webhook

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::card::NotificationCard;
use crate::config::RelayConfig;
use crate::error::{RelayError, Result};

/// Posts notification cards to a single Teams webhook URL.
#[derive(Debug, Clone)]
pub struct TeamsClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl TeamsClient {
    pub fn new(webhook_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Self::new(config.teams_webhook_url.clone(), config.forward_timeout)
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Serialize `card` and POST it to the webhook.
    ///
    /// Any HTTP response counts as delivered; its status is only logged.
    /// Transport failures come back as `RelayError::Forward`.
    pub async fn send(&self, card: &NotificationCard) -> Result<StatusCode> {
        let payload = card.to_json()?;
        info!("Sending {} to {}", payload, self.webhook_url);

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                error!("POST to {} failed: {}", self.webhook_url, e);
                RelayError::Forward(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            info!("Response Status: {}", status);
        } else {
            warn!("Response Status: {}", status);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_timeout() {
        let client = TeamsClient::new("https://teams.example/hook", None).unwrap();
        assert_eq!(client.webhook_url(), "https://teams.example/hook");
        assert!(TeamsClient::new("https://teams.example/hook", Some(Duration::from_secs(5))).is_ok());
    }

    #[tokio::test]
    async fn invalid_url_is_a_forward_error() {
        let client = TeamsClient::new("not a url", None).unwrap();
        let card = NotificationCard::from_deploy(&Default::default());
        let result = client.send(&card).await;
        assert!(matches!(result, Err(RelayError::Forward(_))));
    }
}
