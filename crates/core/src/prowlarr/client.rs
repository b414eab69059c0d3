//! reqwest-backed tag source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ProwlarrSettings;

use super::{IndexerFeedError, TagSource};

/// Prowlarr HTTP client.
pub struct ProwlarrClient {
    client: Client,
}

impl ProwlarrClient {
    /// Create a client with an optional request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, IndexerFeedError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IndexerFeedError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a client using the timeout from the Prowlarr settings.
    pub fn from_settings(settings: &ProwlarrSettings) -> Result<Self, IndexerFeedError> {
        Self::new(settings.timeout_secs.map(Duration::from_secs))
    }
}

#[async_trait]
impl TagSource for ProwlarrClient {
    async fn fetch_tag_details(&self, url: &str) -> Result<String, IndexerFeedError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                IndexerFeedError::Transport("request timed out".to_string())
            } else if e.is_connect() {
                IndexerFeedError::Transport(format!("connection failed: {}", e))
            } else {
                IndexerFeedError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IndexerFeedError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| IndexerFeedError::Transport(format!("failed to read body: {}", e)))?;

        debug!(bytes = body.len(), "Received Prowlarr tag details");
        Ok(body)
    }
}
