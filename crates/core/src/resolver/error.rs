//! Error types for resolvers.

use thiserror::Error;

use crate::fetcher::FetchError;
use crate::metadata::MetadataError;

/// A hard resolver failure. Aborts rule scanning for the candidate file,
/// unlike `Resolution::Declined` which falls through to the next rule.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The enrichment request never produced a response.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The enrichment source answered with a status the resolver does not
    /// handle.
    #[error("Response rejected with status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The torrent file's own metadata could not be loaded.
    #[error("Metadata unavailable: {0}")]
    Metadata(#[from] MetadataError),
}
