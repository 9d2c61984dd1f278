//! Reference target resolution against a corpus index.
//!
//! Each candidate is tested in index order against three rules, and the first
//! candidate matching any of them wins:
//! 1. Full slug equals the normalized target
//! 2. Last slug segment equals the normalized target (short-form references)
//! 3. Title equals the target, both trimmed and case-folded
//!
//! Because rules are evaluated per candidate, an earlier entry matching only
//! by title beats a later entry matching by slug. The index order is the
//! tie-break, so loaders must hand over a stable order.

use crate::slug::normalize;
use crate::types::NoteSummary;
use serde::Serialize;

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    Slug,
    LastSegment,
    Title,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Slug => "slug",
            MatchKind::LastSegment => "last-segment",
            MatchKind::Title => "title",
        }
    }
}

/// Precomputed forms of a raw target, so a scan over the index does the
/// normalization work once.
#[derive(Debug, Clone)]
struct Query {
    slug: String,
    folded: String,
}

impl Query {
    fn new(raw_target: &str) -> Self {
        let trimmed = raw_target.trim();
        Self {
            slug: normalize(trimmed),
            folded: trimmed.to_lowercase(),
        }
    }

    fn match_kind(&self, candidate: &NoteSummary) -> Option<MatchKind> {
        // An empty slug would match degenerate entries with empty slugs.
        if !self.slug.is_empty() {
            if candidate.slug == self.slug {
                return Some(MatchKind::Slug);
            }
            if candidate.last_segment() == Some(self.slug.as_str()) {
                return Some(MatchKind::LastSegment);
            }
        }
        if !self.folded.is_empty() && candidate.title.trim().to_lowercase() == self.folded {
            return Some(MatchKind::Title);
        }
        None
    }
}

/// Resolve a raw reference target to a corpus entry.
///
/// Returns `None` for unresolved references. Never fails.
pub fn resolve<'a>(raw_target: &str, index: &'a [NoteSummary]) -> Option<&'a NoteSummary> {
    resolve_with_kind(raw_target, index).map(|(summary, _)| summary)
}

/// Like [`resolve`], also reporting which rule matched.
pub fn resolve_with_kind<'a>(
    raw_target: &str,
    index: &'a [NoteSummary],
) -> Option<(&'a NoteSummary, MatchKind)> {
    let query = Query::new(raw_target);
    index
        .iter()
        .find_map(|candidate| query.match_kind(candidate).map(|kind| (candidate, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<NoteSummary> {
        vec![
            NoteSummary::new("index", "Vault"),
            NoteSummary::new("people/ada-lovelace", "Ada Lovelace"),
            NoteSummary::new("places/cafe-creme", "Café Crème"),
            NoteSummary::new("misc/q-and-a", "Q & A: Notes"),
        ]
    }

    #[test]
    fn test_resolve_by_full_slug() {
        let index = corpus();
        let (found, kind) = resolve_with_kind("People/Ada Lovelace", &index).unwrap();
        assert_eq!(found.slug, "people/ada-lovelace");
        assert_eq!(kind, MatchKind::Slug);
    }

    #[test]
    fn test_resolve_by_last_segment() {
        let index = corpus();
        let (found, kind) = resolve_with_kind("ada lovelace", &index).unwrap();
        assert_eq!(found.slug, "people/ada-lovelace");
        assert_eq!(kind, MatchKind::LastSegment);
    }

    #[test]
    fn test_resolve_diacritics_fold_to_segment() {
        let index = corpus();
        let found = resolve("Café Crème", &index).unwrap();
        assert_eq!(found.slug, "places/cafe-creme");
    }

    #[test]
    fn test_resolve_by_title() {
        let index = corpus();
        let (found, kind) = resolve_with_kind("  vault ", &index).unwrap();
        assert_eq!(found.slug, "index");
        assert_eq!(kind, MatchKind::Title);
    }

    #[test]
    fn test_title_match_is_not_normalized() {
        let index = vec![NoteSummary::new("x/y", "Q & A: Notes")];
        assert!(resolve("q & a: notes", &index).is_some());
        assert!(resolve("q a notes", &index).is_none());
    }

    #[test]
    fn test_unresolved() {
        let index = corpus();
        assert!(resolve("Missing Thing", &index).is_none());
        assert!(resolve("", &index).is_none());
        assert!(resolve("   ", &index).is_none());
        assert!(resolve("anything", &[]).is_none());
    }

    #[test]
    fn test_first_candidate_wins_across_rules() {
        let index = vec![
            NoteSummary::new("a/first", "Shared"),
            NoteSummary::new("shared", "Something Else"),
        ];
        // The first entry matches by title before the second is checked for slug.
        let (found, kind) = resolve_with_kind("Shared", &index).unwrap();
        assert_eq!(found.slug, "a/first");
        assert_eq!(kind, MatchKind::Title);
    }

    #[test]
    fn test_duplicate_slugs_resolve_to_first() {
        let index = vec![
            NoteSummary::new("dup", "One"),
            NoteSummary::new("dup", "Two"),
        ];
        assert_eq!(resolve("dup", &index).unwrap().title, "One");
    }

    #[test]
    fn test_empty_slug_entries_not_matched_by_punctuation() {
        let index = vec![NoteSummary::new("", "")];
        assert!(resolve("!!!", &index).is_none());
    }
}
