//! List and home command implementations.

use crate::cli::output::Output;
use crate::config::NavigationConfig;
use crate::error::Result;
use crate::navigation::{index_listing, landing_note, next_after_landing, overview_slug};
use crate::source::NoteSource;
use crate::types::NoteSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub notes: Vec<NoteSummary>,
}

pub fn run<N: NoteSource + ?Sized>(source: &N, output: &Output) -> Result<()> {
    let notes = source.list_summaries()?;
    output.print(&ListResponse {
        total: notes.len(),
        notes,
    })
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_after_landing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<NoteSummary>,
    pub notes: Vec<NoteSummary>,
}

pub fn home<N: NoteSource + ?Sized>(
    source: &N,
    nav: &NavigationConfig,
    output: &Output,
) -> Result<()> {
    let summaries = source.list_summaries()?;
    let notes: Vec<NoteSummary> = index_listing(&summaries, nav).into_iter().cloned().collect();

    output.print(&HomeResponse {
        total: notes.len(),
        overview: overview_slug(&summaries, nav).map(str::to_string),
        next_after_landing: next_after_landing(&summaries, nav).map(|s| s.slug.clone()),
        landing: landing_note(&summaries, nav).cloned(),
        notes,
    })
}
