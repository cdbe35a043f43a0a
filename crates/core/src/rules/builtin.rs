//! The built-in production rule table.

use regex_lite::Regex;
use std::sync::Arc;

use crate::fetcher::PageFetcher;
use crate::resolver::{AcgRipResolver, MetadataNameResolver};

use super::types::{Matcher, Rule};

/// Builds the default rule table.
///
/// Order matters: the acg.rip remote rule is immediately followed by a
/// local fallback with the same matcher, so a missing or broken release
/// page still gets the file renamed from its own metadata.
pub fn builtin_rules(fetcher: Arc<dyn PageFetcher>) -> Vec<Rule> {
    let acgrip_pattern = || Matcher::Pattern(Regex::new(r"^\[acgrip\]").expect("acgrip pattern"));

    let mut rules = vec![
        Rule::new(acgrip_pattern())
            .with_category("[Public][acg.rip]")
            .with_resolver(Arc::new(AcgRipResolver::new(fetcher))),
        Rule::new(acgrip_pattern())
            .with_category("[fallback]")
            .with_resolver(Arc::new(MetadataNameResolver::new("[acgrip]"))),
        Rule::new(Matcher::Pattern(
            Regex::new(r"^[a-z0-9]{40}\.torrent$").expect("info hash pattern"),
        ))
        .with_category("[Public][dongmanhuayuan.myheartsite.com]")
        .with_resolver(Arc::new(MetadataNameResolver::new("[dmhy]"))),
    ];

    let tracker_prefixes = [
        ("[PTT]", "[Private][www.pttime.org]"),
        ("[HDArea]", "[Private][www.hdarea.co]"),
        ("[WinterSakura]", "[Private][wintersakura.net]"),
        ("[OldToons]", "[Private][oldtoons.world]"),
        ("[HDVIDEO]", "[Private][hdvideo.one]"),
        ("[HDtime]", "[Private][hdtime.org]"),
        ("[HAIDAN.VIDEO]", "[Private][haidan.video]"),
    ];

    rules.extend(tracker_prefixes.into_iter().map(|(prefix, category)| {
        Rule::new(Matcher::Prefix(prefix.to_string())).with_category(category)
    }));

    rules
}
