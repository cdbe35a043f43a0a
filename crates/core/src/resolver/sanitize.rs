//! Filename-segment sanitization for resolved names.

const REPLACEMENT: char = '-';

/// Longest sanitized segment we produce, in characters.
const MAX_LEN: usize = 100;

/// Sanitize a string into a single filesystem-safe path segment.
///
/// Path-unsafe characters are replaced with `-`, runs of `-` are collapsed,
/// and leading/trailing separators, spaces and dots are trimmed. The result
/// is capped at 100 characters and is never empty. Applying the function
/// twice yields the same result as applying it once.
pub fn sanitize_segment(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if is_unsafe(c) { REPLACEMENT } else { c })
        .collect();

    let mut collapsed = String::with_capacity(replaced.len());
    let mut previous_was_replacement = false;
    for c in replaced.chars() {
        if c == REPLACEMENT {
            if !previous_was_replacement {
                collapsed.push(c);
            }
            previous_was_replacement = true;
        } else {
            collapsed.push(c);
            previous_was_replacement = false;
        }
    }

    let truncated: String = collapsed.chars().take(MAX_LEN).collect();
    let trimmed = truncated.trim_matches(|c: char| c == REPLACEMENT || c == ' ' || c == '.');

    if trimmed.is_empty() {
        REPLACEMENT.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}
