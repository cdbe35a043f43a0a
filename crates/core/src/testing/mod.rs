//! Testing utilities and mock implementations.
//!
//! Mock implementations of the external collaborator traits, allowing the
//! engine and runner to be exercised without network access or real
//! torrent files.
//!
//! # Example
//!
//! ```rust,ignore
//! use valet_core::testing::{MockMetadataSource, MockMover, MockPageFetcher};
//!
//! let fetcher = MockPageFetcher::new();
//! fetcher.set_page(200, "<html>...</html>".to_string());
//!
//! let metadata = MockMetadataSource::new();
//! metadata.insert("a.torrent", "Some Release");
//!
//! let mover = MockMover::new();
//! // run, then assert on mover.recorded_moves()
//! ```

mod mock_fetcher;
mod mock_metadata;
mod mock_mover;

pub use mock_fetcher::MockPageFetcher;
pub use mock_metadata::MockMetadataSource;
pub use mock_mover::MockMover;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::metadata::TorrentMetadata;

    /// Create test metadata with a fixed info hash.
    pub fn metadata(name: &str) -> TorrentMetadata {
        TorrentMetadata {
            name: name.to_string(),
            info_hash: "0".repeat(40),
        }
    }

    /// Create an acg.rip-shaped release page carrying the given title.
    pub fn release_page(title: &str) -> String {
        format!(
            r#"<html><body>
                <div class="post-show-content">
                    <div class="panel-heading">{}</div>
                    <div class="panel-body">irrelevant</div>
                </div>
            </body></html>"#,
            title
        )
    }
}
