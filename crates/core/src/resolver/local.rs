//! Local resolver renaming after the torrent's embedded name.

use async_trait::async_trait;

use crate::metadata::LazyMetadata;

use super::error::ResolverError;
use super::sanitize::sanitize_segment;
use super::traits::{Resolution, Resolver};

/// Renames a candidate file to `{prefix}{embedded name}.torrent` using only
/// the torrent file's own metadata. Needs no network, so it doubles as the
/// fallback for remote resolvers sharing the same matcher.
pub struct MetadataNameResolver {
    prefix: String,
}

impl MetadataNameResolver {
    /// Creates a resolver that prepends `prefix` to the embedded name.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl Resolver for MetadataNameResolver {
    fn name(&self) -> &str {
        "metadata-name"
    }

    async fn resolve(
        &self,
        _filename: &str,
        metadata: &LazyMetadata<'_>,
    ) -> Result<Resolution, ResolverError> {
        let meta = metadata.get().await?;
        let name = sanitize_segment(&meta.name);
        Ok(Resolution::Resolved(format!(
            "{}{}.torrent",
            self.prefix, name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMetadataSource;

    #[tokio::test]
    async fn test_renames_after_embedded_name() {
        let source = MockMetadataSource::new();
        source.insert("deadbeef.torrent", "Some Show 01-12");
        let metadata = LazyMetadata::new(&source, "deadbeef.torrent");

        let resolver = MetadataNameResolver::new("[dmhy]");
        let resolution = resolver
            .resolve("deadbeef.torrent", &metadata)
            .await
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Resolved("[dmhy]Some Show 01-12.torrent".to_string())
        );
    }

    #[tokio::test]
    async fn test_sanitizes_embedded_name() {
        let source = MockMetadataSource::new();
        source.insert("a.torrent", "dir/with:separators");
        let metadata = LazyMetadata::new(&source, "a.torrent");

        let resolver = MetadataNameResolver::new("[acgrip]");
        let resolution = resolver.resolve("a.torrent", &metadata).await.unwrap();

        assert_eq!(
            resolution,
            Resolution::Resolved("[acgrip]dir-with-separators.torrent".to_string())
        );
    }

    #[tokio::test]
    async fn test_metadata_failure_propagates() {
        let source = MockMetadataSource::new();
        let metadata = LazyMetadata::new(&source, "unlisted.torrent");

        let resolver = MetadataNameResolver::new("[dmhy]");
        let result = resolver.resolve("unlisted.torrent", &metadata).await;

        assert!(matches!(result, Err(ResolverError::Metadata(_))));
    }
}
