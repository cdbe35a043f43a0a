//! Reqwest-backed page fetcher.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::FetcherConfig;

use super::{FetchError, Page, PageFetcher};

/// HTTP page fetcher backed by a shared reqwest client.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Create a new HttpPageFetcher with the given configuration.
    pub fn new(config: &FetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Create a fetcher with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&FetcherConfig::default())
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        debug!(url = url, "Fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::ConnectionFailed(e.to_string())
            } else {
                FetchError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        debug!(url = url, status = status, "Page fetched");

        Ok(Page { status, body })
    }
}
