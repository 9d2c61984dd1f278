//! Preview and render commands.

use crate::cli::args::{RenderArgs, SlugArgs};
use crate::cli::links::load_note;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{NotelinkError, Result};
use crate::page::render_note_page;
use crate::preview::fetch_previews;
use crate::rewrite::rewrite;
use crate::source::NoteSource;

pub fn previews<N: NoteSource + ?Sized>(
    source: &N,
    config: &Config,
    args: &SlugArgs,
    output: &Output,
) -> Result<()> {
    let note = load_note(source, &args.slug)?;
    let index = source.list_summaries()?;
    let rewritten = rewrite(&note.content, &index);
    let map = fetch_previews(&rewritten.referenced_slugs, source, &config.excerpt);
    output.print(&map)
}

pub fn render<N: NoteSource + ?Sized>(
    source: &N,
    config: &Config,
    args: &RenderArgs,
    output: &Output,
) -> Result<()> {
    let page = render_note_page(source, &args.slug, config)?
        .ok_or_else(|| NotelinkError::NoteNotFound(args.slug.clone()))?;

    if args.html_only {
        output.print_raw(&page.html);
        Ok(())
    } else {
        output.print(&page)
    }
}
