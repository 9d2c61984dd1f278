//! Preview metadata for referenced notes.

use crate::config::ExcerptConfig;
use crate::source::NoteSource;
use crate::types::{Note, PopupNoteData, PreviewMap};
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

// Blank line, tolerating CRLF and whitespace-only separator lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\s*\r?\n").unwrap());

/// Derive the preview excerpt for a note.
///
/// A non-blank description is used verbatim. Otherwise the first non-empty
/// paragraph of the body is used, cut to `options.max_chars` characters with
/// `options.ellipsis` appended when it was longer.
pub fn derive_excerpt(note: &Note, options: &ExcerptConfig) -> Option<String> {
    if let Some(description) = note.description().filter(|d| !d.trim().is_empty()) {
        return Some(description.to_string());
    }

    let paragraph = PARAGRAPH_BREAK
        .split(&note.content)
        .map(str::trim)
        .find(|p| !p.is_empty())?;

    Some(truncate(paragraph, options))
}

fn truncate(paragraph: &str, options: &ExcerptConfig) -> String {
    match paragraph.char_indices().nth(options.max_chars) {
        None => paragraph.to_string(),
        Some((cut, _)) => {
            let mut excerpt = paragraph[..cut].trim_end().to_string();
            excerpt.push_str(&options.ellipsis);
            excerpt
        }
    }
}

fn popup_for(note: &Note, options: &ExcerptConfig) -> PopupNoteData {
    PopupNoteData {
        slug: note.slug().to_string(),
        title: note.title().to_string(),
        description: note.summary.description.clone(),
        excerpt: derive_excerpt(note, options),
    }
}

/// Load preview data for every distinct slug in `slugs`.
///
/// Each slug is loaded at most once, in parallel. Slugs with no note, or
/// whose load fails, are left out of the map; callers treat a missing key as
/// "no preview available".
pub fn fetch_previews<I, S, N>(slugs: I, source: &N, options: &ExcerptConfig) -> PreviewMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    N: NoteSource + ?Sized,
{
    let mut seen = HashSet::new();
    let distinct: Vec<String> = slugs
        .into_iter()
        .filter_map(|s| {
            let s = s.as_ref();
            seen.insert(s.to_string()).then(|| s.to_string())
        })
        .collect();

    distinct
        .par_iter()
        .filter_map(|slug| match source.get_note_by_slug(slug) {
            Ok(Some(note)) => Some((slug.clone(), popup_for(&note, options))),
            Ok(None) => {
                debug!(slug = %slug, "referenced note missing, no preview");
                None
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "failed to load referenced note");
                None
            }
        })
        .collect()
}
