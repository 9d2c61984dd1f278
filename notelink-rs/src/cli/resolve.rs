//! Normalize and resolve command implementations.

use crate::cli::args::{NormalizeArgs, ResolveArgs};
use crate::cli::output::Output;
use crate::error::{NotelinkError, Result};
use crate::resolve::{MatchKind, resolve_with_kind};
use crate::slug::normalize;
use crate::source::NoteSource;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub text: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub query: String,
    pub normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchKind>,
}

pub fn normalize_text(args: &NormalizeArgs, output: &Output) -> Result<()> {
    output.print(&NormalizeResponse {
        text: args.text.clone(),
        slug: normalize(&args.text),
    })
}

/// Prints the response either way; an unresolved target is also an error so
/// the exit code reflects it.
pub fn run<N: NoteSource + ?Sized>(source: &N, args: &ResolveArgs, output: &Output) -> Result<()> {
    let index = source.list_summaries()?;
    let found = resolve_with_kind(&args.target, &index);

    let response = ResolveResponse {
        query: args.target.clone(),
        normalized: normalize(&args.target),
        resolved: found.map(|(summary, _)| summary.slug.clone()),
        title: found.map(|(summary, _)| summary.title.clone()),
        match_type: found.map(|(_, kind)| kind),
    };
    output.print(&response)?;

    match found {
        Some(_) => Ok(()),
        None => Err(NotelinkError::Unresolved(args.target.clone())),
    }
}
