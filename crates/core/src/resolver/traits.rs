//! Trait definitions for resolvers.

use async_trait::async_trait;

use crate::metadata::LazyMetadata;

use super::error::ResolverError;

/// Outcome of a resolver invocation that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Final filename for the candidate file. Never empty.
    Resolved(String),
    /// The rule does not apply after all; try the next rule.
    Declined,
}

/// Computes the destination filename for a matched rule.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns the name of this resolver implementation.
    fn name(&self) -> &str;

    /// Resolves the final filename for `filename`.
    ///
    /// `metadata` gives deferred access to the torrent's own metadata; a
    /// resolver may call it any number of times, the file is parsed at
    /// most once.
    async fn resolve(
        &self,
        filename: &str,
        metadata: &LazyMetadata<'_>,
    ) -> Result<Resolution, ResolverError>;
}
