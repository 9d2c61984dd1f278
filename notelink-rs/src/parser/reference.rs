//! Reference token scanning.

use crate::types::ReferenceToken;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// [[target]] or [[target|alias]]
// ([^\[\]|]+?)     - Target, no brackets or pipe (group 1)
// (?:\|([^\[\]]+))? - Alias, no brackets (group 2)
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]|]+?)(?:\|([^\[\]]+))?\]\]").unwrap());

/// Scheme prefix marking a rewritten link as a note reference.
pub const NOTE_SCHEME: &str = "note:";

fn token_from(cap: &Captures<'_>) -> ReferenceToken {
    let full = cap.get(0).expect("group 0 always present");
    ReferenceToken {
        target: cap[1].to_string(),
        alias: cap.get(2).map(|m| m.as_str().to_string()),
        start: full.start(),
        end: full.end(),
    }
}

/// Find every reference token in `content`, left to right.
pub fn scan_references(content: &str) -> Vec<ReferenceToken> {
    REFERENCE.captures_iter(content).map(|cap| token_from(&cap)).collect()
}

/// Replace every reference token with the string produced by `replace`.
///
/// Text between tokens is copied through untouched.
pub fn replace_references<F>(content: &str, mut replace: F) -> String
where
    F: FnMut(&ReferenceToken) -> String,
{
    REFERENCE
        .replace_all(content, |cap: &Captures<'_>| replace(&token_from(cap)))
        .into_owned()
}

/// Build the private-scheme href for a slug.
pub fn note_href(slug: &str) -> String {
    format!("{NOTE_SCHEME}{slug}")
}

/// Extract the slug from a private-scheme href.
pub fn slug_from_href(href: &str) -> Option<&str> {
    href.strip_prefix(NOTE_SCHEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_reference() {
        let tokens = scan_references("See [[My Note]] for details.");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].target, "My Note");
        assert!(tokens[0].alias.is_none());
        assert_eq!(tokens[0].start, 4);
        assert_eq!(tokens[0].end, 15);
    }

    #[test]
    fn test_reference_with_alias() {
        let tokens = scan_references("See [[My Note|the note]] here.");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].target, "My Note");
        assert_eq!(tokens[0].alias.as_deref(), Some("the note"));
    }

    #[test]
    fn test_alias_may_contain_pipe() {
        let tokens = scan_references("[[a|b|c]]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].target, "a");
        assert_eq!(tokens[0].alias.as_deref(), Some("b|c"));
    }

    #[test]
    fn test_multiple_references() {
        let tokens = scan_references("[[One]], [[Two|2]] and [[three/four]]");
        let targets: Vec<&str> = tokens.iter().map(|t| t.target.as_str()).collect();
        assert_eq!(targets, vec!["One", "Two", "three/four"]);
    }

    #[test]
    fn test_unbalanced_brackets_ignored() {
        assert!(scan_references("[[open only").is_empty());
        assert!(scan_references("close only]]").is_empty());
        assert!(scan_references("[single]").is_empty());
        assert!(scan_references("[[]]").is_empty());
        assert!(scan_references("[[|alias]]").is_empty());
    }

    #[test]
    fn test_nested_brackets_take_innermost() {
        let tokens = scan_references("[[outer [[inner]] tail]]");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].target, "inner");
    }

    #[test]
    fn test_replace_references_preserves_surroundings() {
        let out = replace_references("a [[x]] b [[y|Y]] c", |t| format!("<{}>", t.display_label()));
        assert_eq!(out, "a <x> b <Y> c");
    }

    #[test]
    fn test_note_href_round_trip() {
        let href = note_href("people/ada");
        assert_eq!(href, "note:people/ada");
        assert_eq!(slug_from_href(&href), Some("people/ada"));
        assert_eq!(slug_from_href("https://example.com"), None);
    }
}
