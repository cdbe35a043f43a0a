//! Rule evaluation loop.

use tracing::debug;

use crate::metadata::LazyMetadata;
use crate::resolver::Resolution;
use crate::rules::Rule;

use super::error::EngineError;
use super::types::{Classification, Placement};

/// Classifies candidate files against an ordered rule table.
pub struct RuleEngine {
    rules: Vec<Rule>,
    unknown_category: String,
}

impl RuleEngine {
    /// Creates an engine over `rules`, placing category-less matches under
    /// `unknown_category`.
    pub fn new(rules: Vec<Rule>, unknown_category: impl Into<String>) -> Self {
        Self {
            rules,
            unknown_category: unknown_category.into(),
        }
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Classifies one candidate file.
    ///
    /// Rules are tried first-to-last. The first rule whose matcher accepts
    /// and whose resolver yields a name wins; a declining resolver passes
    /// the same filename on to the next rule; a failing resolver aborts the
    /// file. When no matcher accepts the outcome is `Unclassified`.
    pub async fn classify(
        &self,
        filename: &str,
        metadata: &LazyMetadata<'_>,
    ) -> Result<Classification, EngineError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.matcher.matches(filename) {
                continue;
            }

            let resolution = match &rule.resolver {
                Some(resolver) => resolver.resolve(filename, metadata).await.map_err(|e| {
                    EngineError::Resolution {
                        resolver: resolver.name().to_string(),
                        filename: filename.to_string(),
                        source: e,
                    }
                })?,
                None => Resolution::Resolved(filename.to_string()),
            };

            match resolution {
                Resolution::Resolved(resolved_name) => {
                    let category = rule
                        .category
                        .clone()
                        .unwrap_or_else(|| self.unknown_category.clone());
                    return Ok(Classification::Placed(Placement {
                        category,
                        filename: resolved_name,
                    }));
                }
                Resolution::Declined => {
                    debug!(file = filename, rule = index, "Rule declined, trying next");
                }
            }
        }

        Ok(Classification::Unclassified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::metadata::LazyMetadata;
    use crate::resolver::{Resolution, Resolver, ResolverError};
    use crate::rules::{Matcher, Rule};
    use crate::testing::MockMetadataSource;

    struct FixedResolver {
        name: &'static str,
        outcome: Resolution,
    }

    #[async_trait]
    impl Resolver for FixedResolver {
        fn name(&self) -> &str {
            self.name
        }

        async fn resolve(
            &self,
            _filename: &str,
            _metadata: &LazyMetadata<'_>,
        ) -> Result<Resolution, ResolverError> {
            Ok(self.outcome.clone())
        }
    }

    struct FailingResolver;

    #[async_trait]
    impl Resolver for FailingResolver {
        fn name(&self) -> &str {
            "failing"
        }

        async fn resolve(
            &self,
            _filename: &str,
            _metadata: &LazyMetadata<'_>,
        ) -> Result<Resolution, ResolverError> {
            Err(ResolverError::UnexpectedStatus {
                status: 403,
                url: "https://example.test/t/1".to_string(),
            })
        }
    }

    fn prefix_rule(prefix: &str) -> Rule {
        Rule::new(Matcher::Prefix(prefix.to_string()))
    }

    async fn classify(
        engine: &RuleEngine,
        filename: &str,
    ) -> Result<Classification, EngineError> {
        let source = MockMetadataSource::new();
        let metadata = LazyMetadata::new(&source, filename);
        engine.classify(filename, &metadata).await
    }

    #[tokio::test]
    async fn test_no_matching_rule_is_unclassified() {
        let engine = RuleEngine::new(vec![prefix_rule("[X]").with_category("[x]")], "unknown");
        let classification = classify(&engine, "randomfile.torrent").await.unwrap();
        assert_eq!(classification, Classification::Unclassified);
    }

    #[tokio::test]
    async fn test_match_without_resolver_keeps_filename() {
        let engine = RuleEngine::new(
            vec![prefix_rule("[PTT]").with_category("[Private][www.pttime.org]")],
            "unknown",
        );
        let classification = classify(&engine, "[PTT]some-release.torrent").await.unwrap();
        assert_eq!(
            classification,
            Classification::Placed(Placement {
                category: "[Private][www.pttime.org]".to_string(),
                filename: "[PTT]some-release.torrent".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_match_without_category_uses_unknown() {
        let engine = RuleEngine::new(vec![prefix_rule("[X]")], "misc");
        let classification = classify(&engine, "[X]file.torrent").await.unwrap();
        assert_eq!(classification.placement().unwrap().category, "misc");
    }

    #[tokio::test]
    async fn test_first_matching_rule_wins() {
        let engine = RuleEngine::new(
            vec![
                prefix_rule("[X]").with_category("first"),
                prefix_rule("[X]").with_category("second"),
            ],
            "unknown",
        );
        let classification = classify(&engine, "[X]file.torrent").await.unwrap();
        assert_eq!(classification.placement().unwrap().category, "first");
    }

    #[tokio::test]
    async fn test_decline_falls_through_to_shared_matcher_rule() {
        let engine = RuleEngine::new(
            vec![
                prefix_rule("[X]")
                    .with_category("primary")
                    .with_resolver(Arc::new(FixedResolver {
                        name: "declining",
                        outcome: Resolution::Declined,
                    })),
                prefix_rule("[X]")
                    .with_category("fallback")
                    .with_resolver(Arc::new(FixedResolver {
                        name: "fixed",
                        outcome: Resolution::Resolved("renamed.torrent".to_string()),
                    })),
            ],
            "unknown",
        );

        let classification = classify(&engine, "[X]file.torrent").await.unwrap();
        assert_eq!(
            classification,
            Classification::Placed(Placement {
                category: "fallback".to_string(),
                filename: "renamed.torrent".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_all_rules_decline_is_unclassified() {
        let declining = || {
            Arc::new(FixedResolver {
                name: "declining",
                outcome: Resolution::Declined,
            })
        };
        let engine = RuleEngine::new(
            vec![
                prefix_rule("[X]").with_resolver(declining()),
                prefix_rule("[X]").with_resolver(declining()),
            ],
            "unknown",
        );

        let classification = classify(&engine, "[X]file.torrent").await.unwrap();
        assert_eq!(classification, Classification::Unclassified);
    }

    #[tokio::test]
    async fn test_failure_aborts_without_trying_fallback() {
        let engine = RuleEngine::new(
            vec![
                prefix_rule("[X]")
                    .with_category("primary")
                    .with_resolver(Arc::new(FailingResolver)),
                prefix_rule("[X]").with_category("fallback"),
            ],
            "unknown",
        );

        let result = classify(&engine, "[X]file.torrent").await;
        match result {
            Err(EngineError::Resolution { resolver, .. }) => assert_eq!(resolver, "failing"),
            other => panic!("expected resolution failure, got {:?}", other),
        }
    }
}
