//! Shared types for notelink.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lightweight corpus entry used for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Canonical identifier, unique within one corpus snapshot (e.g. "people/ada-lovelace").
    pub slug: String,

    /// Path components of the slug; joined with `/` they give back `slug`.
    pub slug_segments: Vec<String>,

    /// Display title.
    pub title: String,

    /// Optional short description from front-matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NoteSummary {
    /// Build a summary from a slug, splitting it into segments on `/`.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let slug = slug.into();
        let slug_segments = slug
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            slug,
            slug_segments,
            title: title.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The final slug segment, used for short-form references.
    pub fn last_segment(&self) -> Option<&str> {
        self.slug_segments.last().map(String::as_str)
    }
}

/// A fully loaded note: summary fields plus the raw body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub summary: NoteSummary,

    /// Raw markdown body (front-matter removed).
    pub content: String,
}

impl Note {
    pub fn new(summary: NoteSummary, content: impl Into<String>) -> Self {
        Self {
            summary,
            content: content.into(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.summary.slug
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    pub fn description(&self) -> Option<&str> {
        self.summary.description.as_deref()
    }
}

/// A `[[target]]` or `[[target|alias]]` occurrence found in a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceToken {
    /// Raw text before the pipe (untrimmed).
    pub target: String,

    /// Raw text after the pipe, if any (untrimmed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Byte offset where the `[[` starts.
    pub start: usize,

    /// Byte offset just past the closing `]]`.
    pub end: usize,
}

impl ReferenceToken {
    /// The text shown to the reader: the alias, or the target when the alias
    /// is missing or blank.
    ///
    /// Whitespace runs, line breaks included, collapse to a single space so
    /// the label always fits on one markdown line. Empty when both parts
    /// are blank.
    pub fn display_label(&self) -> String {
        let raw = self
            .alias
            .as_deref()
            .filter(|alias| !alias.trim().is_empty())
            .unwrap_or(&self.target);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Metadata needed to render a preview popup for one referenced note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupNoteData {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Previews keyed by slug. Ordered so serialized output is stable.
pub type PreviewMap = BTreeMap<String, PopupNoteData>;

/// Output of a rewriting pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewritten {
    /// Body with every reference token replaced.
    pub text: String,

    /// Resolved slugs in first-reference order, each listed once.
    pub referenced_slugs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_segments() {
        let summary = NoteSummary::new("people/ada-lovelace", "Ada Lovelace");
        assert_eq!(summary.slug_segments, vec!["people", "ada-lovelace"]);
        assert_eq!(summary.slug_segments.join("/"), summary.slug);
        assert_eq!(summary.last_segment(), Some("ada-lovelace"));
    }

    #[test]
    fn test_display_label_prefers_alias() {
        let token = ReferenceToken {
            target: " Ada ".to_string(),
            alias: Some("  the countess ".to_string()),
            start: 0,
            end: 10,
        };
        assert_eq!(token.display_label(), "the countess");

        let token = ReferenceToken {
            alias: None,
            ..token
        };
        assert_eq!(token.display_label(), "Ada");
    }

    #[test]
    fn test_display_label_collapses_whitespace() {
        let token = ReferenceToken {
            target: "Alpha\n\n  Note".to_string(),
            alias: Some(" \t ".to_string()),
            start: 0,
            end: 20,
        };
        assert_eq!(token.display_label(), "Alpha Note");

        let blank = ReferenceToken {
            target: "   ".to_string(),
            alias: None,
            start: 0,
            end: 7,
        };
        assert_eq!(blank.display_label(), "");
    }

    #[test]
    fn test_note_serializes_flat() {
        let note = Note::new(NoteSummary::new("a", "A"), "body");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["slug"], "a");
        assert_eq!(json["content"], "body");
        assert!(json.get("description").is_none());
    }
}
