//! Mock metadata source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::metadata::{MetadataError, MetadataSource, TorrentMetadata};

use super::fixtures;

#[derive(Default)]
struct State {
    entries: HashMap<String, TorrentMetadata>,
    loads: usize,
}

/// Mock implementation of the `MetadataSource` trait.
///
/// Serves pre-inserted metadata by filename and counts loads, which makes
/// the laziness and memoization of `LazyMetadata` observable in tests.
/// Loading an unknown filename fails like a missing file would.
#[derive(Clone, Default)]
pub struct MockMetadataSource {
    state: Arc<Mutex<State>>,
}

impl MockMetadataSource {
    /// Create a new mock source with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata with the given embedded name for a filename.
    pub fn insert(&self, filename: &str, name: &str) {
        self.insert_full(filename, fixtures::metadata(name));
    }

    /// Register full metadata for a filename.
    pub fn insert_full(&self, filename: &str, metadata: TorrentMetadata) {
        self.state
            .lock()
            .unwrap()
            .entries
            .insert(filename.to_string(), metadata);
    }

    /// Number of loads performed.
    pub fn load_count(&self) -> usize {
        self.state.lock().unwrap().loads
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load(&self, filename: &str) -> Result<TorrentMetadata, MetadataError> {
        let mut state = self.state.lock().unwrap();
        state.loads += 1;

        state
            .entries
            .get(filename)
            .cloned()
            .ok_or_else(|| MetadataError::Read {
                path: filename.into(),
                source: io::Error::new(io::ErrorKind::NotFound, "no mock metadata"),
            })
    }
}
