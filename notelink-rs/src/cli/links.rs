//! Reference listing and rewrite commands.

use crate::cli::args::SlugArgs;
use crate::cli::output::Output;
use crate::error::{NotelinkError, Result};
use crate::parser::reference::scan_references;
use crate::resolve::resolve;
use crate::rewrite::rewrite;
use crate::source::NoteSource;
use crate::types::Note;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RefInfo {
    pub target: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Serialize)]
pub struct RefsResponse {
    pub slug: String,
    pub total: usize,
    pub unresolved: usize,
    pub refs: Vec<RefInfo>,
}

pub(crate) fn load_note<N: NoteSource + ?Sized>(source: &N, slug: &str) -> Result<Note> {
    source
        .get_note_by_slug(slug)?
        .ok_or_else(|| NotelinkError::NoteNotFound(slug.to_string()))
}

pub fn refs<N: NoteSource + ?Sized>(source: &N, args: &SlugArgs, output: &Output) -> Result<()> {
    let note = load_note(source, &args.slug)?;
    let index = source.list_summaries()?;

    let refs: Vec<RefInfo> = scan_references(&note.content)
        .into_iter()
        .map(|token| RefInfo {
            resolved: resolve(&token.target, &index).map(|s| s.slug.clone()),
            label: token.display_label(),
            target: token.target.trim().to_string(),
            start: token.start,
            end: token.end,
        })
        .collect();

    output.print(&RefsResponse {
        slug: note.summary.slug,
        total: refs.len(),
        unresolved: refs.iter().filter(|r| r.resolved.is_none()).count(),
        refs,
    })
}

pub fn rewrite_note<N: NoteSource + ?Sized>(
    source: &N,
    args: &SlugArgs,
    output: &Output,
) -> Result<()> {
    let note = load_note(source, &args.slug)?;
    let index = source.list_summaries()?;
    output.print(&rewrite(&note.content, &index))
}
