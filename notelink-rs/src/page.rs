//! One full rendering pass for a note page.

use crate::config::Config;
use crate::error::Result;
use crate::navigation::{Breadcrumb, Neighbors, breadcrumbs, neighbors};
use crate::preview::fetch_previews;
use crate::render::PreviewComponents;
use crate::rewrite::rewrite;
use crate::source::NoteSource;
use crate::types::{PreviewMap, Rewritten};
use serde::Serialize;
use tracing::debug;

/// Everything a page template needs to show one note.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub html: String,
    pub referenced_slugs: Vec<String>,
    pub previews: PreviewMap,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub neighbors: Neighbors,
}

/// Load `slug`, rewrite its references, fetch previews and render HTML.
///
/// Returns `Ok(None)` when the note does not exist. Errors come only from
/// loading the note itself or the corpus index.
pub fn render_note_page<N>(source: &N, slug: &str, config: &Config) -> Result<Option<RenderedPage>>
where
    N: NoteSource + ?Sized,
{
    let Some(note) = source.get_note_by_slug(slug)? else {
        return Ok(None);
    };

    let summaries = source.list_summaries()?;
    let Rewritten {
        text,
        referenced_slugs,
    } = rewrite(&note.content, &summaries);
    debug!(slug, references = referenced_slugs.len(), "rewrote note body");

    let previews = fetch_previews(&referenced_slugs, source, &config.excerpt);
    let components = PreviewComponents::new(previews, &config.links);
    let html = components.render_markdown(&text);

    Ok(Some(RenderedPage {
        breadcrumbs: breadcrumbs(&note.summary, &config.links.route_prefix),
        neighbors: neighbors(&summaries, note.slug()),
        slug: note.summary.slug,
        title: note.summary.title,
        description: note.summary.description,
        html,
        referenced_slugs,
        previews: components.previews().clone(),
    }))
}
