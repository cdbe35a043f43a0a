//! Error types for the classification engine.

use thiserror::Error;

use crate::resolver::ResolverError;

/// Errors that abort classification of a single candidate file.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A matched rule's resolver failed hard. Later rules are not tried;
    /// the file stays in the source directory.
    #[error("Resolver \"{resolver}\" failed for \"{filename}\": {source}")]
    Resolution {
        resolver: String,
        filename: String,
        #[source]
        source: ResolverError,
    },
}
