//! Deferred, memoized metadata access for a single candidate file.

use tokio::sync::OnceCell;

use super::{MetadataError, MetadataSource, TorrentMetadata};

/// Lazily loads metadata for one candidate file.
///
/// The underlying file is read and parsed only when a resolver first calls
/// `get()`; the parsed result is memoized, so any number of resolvers may
/// ask without repeated disk I/O. A failed load is not cached and would be
/// retried, but in practice a load failure aborts the candidate file.
pub struct LazyMetadata<'a> {
    source: &'a dyn MetadataSource,
    filename: &'a str,
    cell: OnceCell<TorrentMetadata>,
}

impl<'a> LazyMetadata<'a> {
    /// Creates an accessor for `filename`, deferring all I/O.
    pub fn new(source: &'a dyn MetadataSource, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            cell: OnceCell::new(),
        }
    }

    /// Returns the metadata, loading it on first use.
    pub async fn get(&self) -> Result<&TorrentMetadata, MetadataError> {
        self.cell
            .get_or_try_init(|| self.source.load(self.filename))
            .await
    }

    /// Whether the metadata has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMetadataSource;

    #[tokio::test]
    async fn test_no_load_until_asked() {
        let source = MockMetadataSource::new();
        source.insert("a.torrent", "Some Release");

        let lazy = LazyMetadata::new(&source, "a.torrent");
        assert!(!lazy.is_loaded());
        assert_eq!(source.load_count(), 0);
    }

    #[tokio::test]
    async fn test_loads_at_most_once() {
        let source = MockMetadataSource::new();
        source.insert("a.torrent", "Some Release");

        let lazy = LazyMetadata::new(&source, "a.torrent");
        let first = lazy.get().await.unwrap().name.clone();
        let second = lazy.get().await.unwrap().name.clone();

        assert_eq!(first, "Some Release");
        assert_eq!(first, second);
        assert!(lazy.is_loaded());
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_load_error_propagates() {
        let source = MockMetadataSource::new();

        let lazy = LazyMetadata::new(&source, "unlisted.torrent");
        let result = lazy.get().await;
        assert!(result.is_err());
        assert!(!lazy.is_loaded());
    }
}
