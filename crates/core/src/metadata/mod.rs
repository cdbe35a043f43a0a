//! Torrent metadata loading.
//!
//! Decodes the bencoded contents of a .torrent file into the small
//! `TorrentMetadata` record that resolvers rename from. Most rules never
//! look inside the file, so reading is deferred behind `LazyMetadata` -
//! a per-candidate-file accessor that parses at most once no matter how
//! many resolvers ask for it.

mod lazy;
mod source;

pub use lazy::LazyMetadata;
pub use source::{FsMetadataSource, MetadataSource};

use std::path::PathBuf;
use thiserror::Error;

/// Metadata extracted from a .torrent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentMetadata {
    /// Human-readable name from the info dictionary.
    pub name: String,
    /// Lowercase hex info hash.
    pub info_hash: String,
}

/// Errors that can occur when loading torrent metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to read torrent file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse torrent: {0}")]
    Parse(String),
}
