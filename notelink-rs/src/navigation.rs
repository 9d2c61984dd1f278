//! Pure navigation helpers over the corpus index.

use crate::config::NavigationConfig;
use crate::types::NoteSummary;
use serde::Serialize;

/// Previous and next entries around a note, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<NoteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NoteSummary>,
}

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
    pub is_last: bool,
}

/// Turn a slug segment into a display label: `foo-bar` becomes `Foo Bar`.
///
/// A segment with no word characters is returned unchanged.
pub fn humanise(segment: &str) -> String {
    let words: Vec<String> = segment
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        segment.to_string()
    } else {
        words.join(" ")
    }
}

/// Route for a slug: each segment percent-encoded under `route_prefix`.
pub fn note_route<S: AsRef<str>>(route_prefix: &str, segments: &[S]) -> String {
    let mut href = route_prefix.trim_end_matches('/').to_string();
    for segment in segments {
        href.push('/');
        href.push_str(&urlencoding::encode(segment.as_ref()));
    }
    href
}

/// Find the entries before and after `slug`. Unknown slugs have no neighbors.
pub fn neighbors(summaries: &[NoteSummary], slug: &str) -> Neighbors {
    let Some(index) = summaries.iter().position(|s| s.slug == slug) else {
        return Neighbors::default();
    };
    Neighbors {
        previous: index
            .checked_sub(1)
            .and_then(|i| summaries.get(i))
            .cloned(),
        next: summaries.get(index + 1).cloned(),
    }
}

/// Breadcrumb trail for a note, one crumb per slug segment.
///
/// The first crumb keeps its raw segment, middle crumbs are humanised and
/// the last one shows the note title.
pub fn breadcrumbs(summary: &NoteSummary, route_prefix: &str) -> Vec<Breadcrumb> {
    let segments = &summary.slug_segments;
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let is_last = index + 1 == segments.len();
            let label = if is_last {
                summary.title.clone()
            } else if index == 0 {
                segment.clone()
            } else {
                humanise(segment)
            };
            Breadcrumb {
                label,
                href: note_route(route_prefix, &segments[..=index]),
                is_last,
            }
        })
        .collect()
}

fn prefix_segments(prefix: &str) -> Vec<&str> {
    prefix.split('/').filter(|s| !s.is_empty()).collect()
}

fn has_prefix(summary: &NoteSummary, prefix: &[&str]) -> bool {
    summary.slug_segments.len() >= prefix.len()
        && summary
            .slug_segments
            .iter()
            .zip(prefix)
            .all(|(segment, expected)| segment.as_str() == *expected)
}

/// Whether `summary` sits strictly below the landing prefix.
pub fn is_landing(summary: &NoteSummary, nav: &NavigationConfig) -> bool {
    let prefix = prefix_segments(&nav.landing_prefix);
    !prefix.is_empty()
        && summary.slug_segments.len() > prefix.len()
        && has_prefix(summary, &prefix)
}

/// Whether `summary` falls under one of the hidden subtrees.
pub fn is_hidden(summary: &NoteSummary, nav: &NavigationConfig) -> bool {
    nav.hidden_prefixes.iter().any(|raw| {
        let prefix = prefix_segments(raw);
        !prefix.is_empty() && has_prefix(summary, &prefix)
    })
}

/// First landing candidate in corpus order.
pub fn landing_note<'a>(
    summaries: &'a [NoteSummary],
    nav: &NavigationConfig,
) -> Option<&'a NoteSummary> {
    summaries.iter().find(|s| is_landing(s, nav))
}

/// Entries shown in the index listing: everything except landing candidates
/// and hidden subtrees, in corpus order.
pub fn index_listing<'a>(
    summaries: &'a [NoteSummary],
    nav: &NavigationConfig,
) -> Vec<&'a NoteSummary> {
    summaries
        .iter()
        .filter(|s| !is_landing(s, nav) && !is_hidden(s, nav))
        .collect()
}

/// The note a reader continues to from the landing note. `None` without a
/// landing note.
pub fn next_after_landing<'a>(
    summaries: &'a [NoteSummary],
    nav: &NavigationConfig,
) -> Option<&'a NoteSummary> {
    landing_note(summaries, nav)?;
    index_listing(summaries, nav).first().copied()
}

/// Slug of the overview note: the first whose slug starts with the overview
/// prefix, else the first note of the corpus.
pub fn overview_slug<'a>(summaries: &'a [NoteSummary], nav: &NavigationConfig) -> Option<&'a str> {
    summaries
        .iter()
        .find(|s| s.slug.starts_with(&nav.overview_prefix))
        .or_else(|| summaries.first())
        .map(|s| s.slug.as_str())
}
