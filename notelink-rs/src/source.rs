//! Note loaders consumed by the engine.
//!
//! The engine only needs two reads: the ordered corpus index and a single
//! note by slug. [`DirectorySource`] serves a folder of markdown files with
//! YAML headers; [`MemorySource`] serves notes held in memory.

use crate::error::{NotelinkError, Result};
use crate::navigation::humanise;
use crate::parser::frontmatter::{Frontmatter, parse_frontmatter, split_frontmatter};
use crate::slug::normalize;
use crate::types::{Note, NoteSummary};
use glob::glob;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Read access to a corpus of notes.
///
/// `list_summaries` must return the same entries in the same order for the
/// duration of one rendering pass; resolution ties are broken by that order.
pub trait NoteSource: Sync {
    /// All summaries in corpus order.
    fn list_summaries(&self) -> Result<Vec<NoteSummary>>;

    /// Load one note, or `None` when no note has that slug.
    fn get_note_by_slug(&self, slug: &str) -> Result<Option<Note>>;
}

/// In-memory corpus. Order of insertion is corpus order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    notes: Vec<Note>,
}

impl MemorySource {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }
}

impl NoteSource for MemorySource {
    fn list_summaries(&self) -> Result<Vec<NoteSummary>> {
        Ok(self.notes.iter().map(|n| n.summary.clone()).collect())
    }

    fn get_note_by_slug(&self, slug: &str) -> Result<Option<Note>> {
        Ok(self.notes.iter().find(|n| n.slug() == slug).cloned())
    }
}

/// Corpus backed by a directory of `.md` files.
///
/// `people/Ada Lovelace.md` gets the slug `people/ada-lovelace`. Titles come
/// from the `title` header key, falling back to the humanised last segment.
/// Entries with an `order` key sort first (ascending); the rest follow in
/// path order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(NotelinkError::NotesDirNotFound(root));
        }
        Ok(Self { root })
    }

    /// Relative paths of all visible markdown files, sorted.
    pub fn list_paths(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut paths = Vec::new();
        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    let Ok(relative) = path.strip_prefix(&self.root) else {
                        continue;
                    };
                    let hidden = relative
                        .components()
                        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
                    if !hidden && path.is_file() {
                        paths.push(relative.to_path_buf());
                    }
                }
                Err(e) => warn!(error = %e, "skipping unreadable entry"),
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn load_path(&self, relative: &Path) -> Result<(Note, Option<i64>)> {
        let raw = std::fs::read_to_string(self.root.join(relative))?;
        let (fields, body) = match parse_frontmatter(&raw, relative) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(path = %relative.display(), error = %e, "ignoring front-matter");
                (Frontmatter::default(), split_frontmatter(&raw).body)
            }
        };

        let mut summary = NoteSummary::new(slug_for_path(relative), String::new());
        let fallback_title = summary.last_segment().map(humanise).unwrap_or_default();
        summary.title = fields
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(fallback_title);
        summary.description = fields.description.filter(|d| !d.trim().is_empty());

        Ok((Note::new(summary, body), fields.order))
    }
}

impl NoteSource for DirectorySource {
    fn list_summaries(&self) -> Result<Vec<NoteSummary>> {
        let mut entries = Vec::new();
        for path in self.list_paths()? {
            match self.load_path(&path) {
                Ok((note, order)) => entries.push((order, note.summary)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable note"),
            }
        }
        // Stable: unordered entries keep path order.
        entries.sort_by_key(|(order, _)| order.unwrap_or(i64::MAX));

        info!(root = %self.root.display(), notes = entries.len(), "loaded corpus index");
        Ok(entries.into_iter().map(|(_, summary)| summary).collect())
    }

    fn get_note_by_slug(&self, slug: &str) -> Result<Option<Note>> {
        let Some(path) = self
            .list_paths()?
            .into_iter()
            .find(|p| slug_for_path(p) == slug)
        else {
            debug!(slug, "no file for slug");
            return Ok(None);
        };
        let (note, _) = self.load_path(&path)?;
        Ok(Some(note))
    }
}

/// Canonical slug for a path relative to the notes root.
///
/// Each component is normalized on its own and empty results are dropped, so
/// the segments never contain `/` and always join back to the slug.
pub fn slug_for_path(relative: &Path) -> String {
    let stemmed = relative.with_extension("");
    stemmed
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(normalize(&part.to_string_lossy())),
            _ => None,
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
