//! Mock page fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::fetcher::{FetchError, Page, PageFetcher};

#[derive(Default)]
struct State {
    /// Default response returned for any URL without a dedicated page.
    page: Option<(u16, String)>,
    /// Per-URL responses.
    pages_by_url: HashMap<String, (u16, String)>,
    /// If set, the next fetch fails with this error.
    next_error: Option<FetchError>,
    /// URLs fetched so far.
    recorded: Vec<String>,
}

/// Mock implementation of the `PageFetcher` trait.
///
/// Returns configurable responses, records fetched URLs for assertions,
/// and can inject a one-shot transport error. Setters are synchronous so
/// they can be called during test setup without awaiting.
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    state: Arc<Mutex<State>>,
}

impl MockPageFetcher {
    /// Create a new mock fetcher with no configured pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response returned for any URL.
    pub fn set_page(&self, status: u16, body: String) {
        self.state.lock().unwrap().page = Some((status, body));
    }

    /// Set the response for one specific URL.
    pub fn set_page_for(&self, url: &str, status: u16, body: String) {
        self.state
            .lock()
            .unwrap()
            .pages_by_url
            .insert(url.to_string(), (status, body));
    }

    /// Configure the next fetch to fail with the given error.
    pub fn set_error(&self, error: FetchError) {
        self.state.lock().unwrap().next_error = Some(error);
    }

    /// URLs fetched so far, in order.
    pub fn recorded_urls(&self) -> Vec<String> {
        self.state.lock().unwrap().recorded.clone()
    }

    /// Number of fetches performed.
    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().recorded.len()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let mut state = self.state.lock().unwrap();
        state.recorded.push(url.to_string());

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        let (status, body) = state
            .pages_by_url
            .get(url)
            .or(state.page.as_ref())
            .cloned()
            .ok_or_else(|| {
                FetchError::RequestFailed(format!("no mock page configured for {}", url))
            })?;

        Ok(Page { status, body })
    }
}
