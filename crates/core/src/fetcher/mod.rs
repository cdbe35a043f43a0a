//! Remote page fetching for filename enrichment.
//!
//! Resolvers that derive a destination filename from a release page go
//! through the `PageFetcher` trait. A fetch yields a `Page` for any HTTP
//! response, success or not - interpreting the status code is the calling
//! resolver's job, only transport problems are errors here.

mod http;

pub use http::HttpPageFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// A fetched page: response status plus body text.
#[derive(Debug, Clone)]
pub struct Page {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl Page {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors that can occur while fetching a remote page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A fetcher that retrieves remote pages for enrichment resolvers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the name of this fetcher implementation.
    fn name(&self) -> &str;

    /// Fetches the page at `url`.
    ///
    /// Returns `Ok` with the response status and body for any HTTP response;
    /// `Err` only for transport-level failures.
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}
