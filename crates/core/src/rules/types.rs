//! Rule and matcher types.

use regex_lite::Regex;
use std::sync::Arc;

use crate::resolver::Resolver;

/// Predicate over a filename. Must be synchronous and side-effect-free.
pub type MatchPredicate = fn(&str) -> bool;

/// Decides whether a rule applies to a filename.
///
/// A closed set of shapes: there is no "invalid matcher" at runtime,
/// every variant carries a ready-to-evaluate value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Accepts filenames starting with the literal string.
    Prefix(String),
    /// Accepts filenames equal to one of the listed strings.
    OneOf(Vec<String>),
    /// Accepts filenames matching the compiled pattern.
    Pattern(Regex),
    /// Accepts filenames for which the predicate returns true.
    Predicate(MatchPredicate),
}

impl Matcher {
    /// Whether this matcher accepts `filename`.
    pub fn matches(&self, filename: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => filename.starts_with(prefix.as_str()),
            Matcher::OneOf(names) => names.iter().any(|n| n == filename),
            Matcher::Pattern(pattern) => pattern.is_match(filename),
            Matcher::Predicate(predicate) => predicate(filename),
        }
    }
}

/// One entry of the rule table.
#[derive(Clone)]
pub struct Rule {
    /// Decides whether this rule applies to a filename.
    pub matcher: Matcher,
    /// Destination category folder; `None` places the file under the
    /// caller-supplied unknown category.
    pub category: Option<String>,
    /// Computes the destination filename; `None` keeps the original name.
    pub resolver: Option<Arc<dyn Resolver>>,
}

impl Rule {
    /// Creates a rule with no category and no resolver.
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            category: None,
            resolver: None,
        }
    }

    /// Sets the destination category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("matcher", &self.matcher)
            .field("category", &self.category)
            .field("resolver", &self.resolver.as_ref().map(|r| r.name()))
            .finish()
    }
}
