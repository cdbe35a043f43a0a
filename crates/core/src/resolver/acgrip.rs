//! Remote title resolver for acg.rip releases.

use async_trait::async_trait;
use regex_lite::Regex;
use scraper::{Html, Selector};
use std::sync::Arc;
use tracing::debug;

use crate::fetcher::PageFetcher;
use crate::metadata::LazyMetadata;

use super::error::ResolverError;
use super::sanitize::sanitize_segment;
use super::traits::{Resolution, Resolver};

const DEFAULT_BASE_URL: &str = "https://acg.rip";

/// CSS selector for the release title on a post page.
const TITLE_SELECTOR: &str = ".post-show-content .panel-heading";

/// Resolves `[acgrip] <id>.<...>.torrent` filenames by fetching the release
/// page and renaming after its title.
///
/// A missing release id, a missing title, and a 404/500 response all
/// decline rather than fail, so a sibling rule with the same matcher can
/// still resolve the file locally. Any other non-success status is a hard
/// failure.
pub struct AcgRipResolver {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
    id_pattern: Regex,
}

impl AcgRipResolver {
    /// Creates a resolver against the production acg.rip site.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_base_url(fetcher, DEFAULT_BASE_URL)
    }

    /// Creates a resolver against a custom base URL.
    pub fn with_base_url(fetcher: Arc<dyn PageFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            id_pattern: Regex::new(r"^\[acgrip\]\s+(\d+?)\.").expect("release id pattern"),
        }
    }

    /// Extracts the numeric release id from the filename, if present.
    fn release_id<'f>(&self, filename: &'f str) -> Option<&'f str> {
        self.id_pattern
            .captures(filename)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

#[async_trait]
impl Resolver for AcgRipResolver {
    fn name(&self) -> &str {
        "acgrip"
    }

    async fn resolve(
        &self,
        filename: &str,
        _metadata: &LazyMetadata<'_>,
    ) -> Result<Resolution, ResolverError> {
        let Some(id) = self.release_id(filename) else {
            debug!(file = filename, "No release id in filename, declining");
            return Ok(Resolution::Declined);
        };

        let url = format!("{}/t/{}", self.base_url.trim_end_matches('/'), id);
        let page = self.fetcher.fetch(&url).await?;

        match page.status {
            // Missing or broken release pages fall through to the local
            // fallback rule instead of erroring the whole file.
            404 | 500 => {
                debug!(url = %url, status = page.status, "Release page unavailable, declining");
                return Ok(Resolution::Declined);
            }
            status if !page.is_success() => {
                return Err(ResolverError::UnexpectedStatus { status, url });
            }
            _ => {}
        }

        let Some(title) = extract_title(&page.body) else {
            debug!(url = %url, "No title on release page, declining");
            return Ok(Resolution::Declined);
        };

        let title = sanitize_segment(&title);
        Ok(Resolution::Resolved(format!(
            "[acgrip][{}]{}.torrent",
            id, title
        )))
    }
}

/// Pull the release title out of a post page.
fn extract_title(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(TITLE_SELECTOR).expect("title selector");

    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>().trim().to_string();

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
