//! Markdown rendering with preview popups for note references.
//!
//! Rewritten bodies carry `note:<slug>` link targets. While converting
//! markdown to HTML those links are intercepted and replaced by a popup
//! component bound to the prefetched [`PopupNoteData`]. Every other link is
//! left to the default renderer.

use crate::config::LinksConfig;
use crate::navigation::note_route;
use crate::parser::reference::slug_from_href;
use crate::types::{PopupNoteData, PreviewMap};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Classification of a link destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Ordinary href, rendered as a normal anchor.
    External(String),
    /// `note:<slug>` produced by the rewriter.
    InternalPreview(String),
    /// No destination at all.
    PlainText,
}

impl LinkTarget {
    pub fn classify(href: Option<&str>) -> Self {
        match href {
            None | Some("") => LinkTarget::PlainText,
            Some(href) => match slug_from_href(href) {
                Some(slug) => LinkTarget::InternalPreview(slug.to_string()),
                None => LinkTarget::External(href.to_string()),
            },
        }
    }
}

/// What a link should render as, once bound to the preview map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkComponent<'a> {
    /// Interactive popup for a note with preview data.
    Preview(&'a PopupNoteData),
    /// Note reference without preview data: emphasized label, no popup.
    Label,
    /// Link with no destination: bare span.
    Span,
    /// Not ours; standard anchor rendering.
    Default,
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Link overrides built from one pass's preview map.
#[derive(Debug, Clone, Default)]
pub struct PreviewComponents {
    previews: PreviewMap,
    route_prefix: String,
}

impl PreviewComponents {
    pub fn new(previews: PreviewMap, links: &LinksConfig) -> Self {
        Self {
            previews,
            route_prefix: links.route_prefix.clone(),
        }
    }

    pub fn previews(&self) -> &PreviewMap {
        &self.previews
    }

    /// Pick the component for a link target.
    pub fn bind(&self, target: &LinkTarget) -> LinkComponent<'_> {
        match target {
            LinkTarget::External(_) => LinkComponent::Default,
            LinkTarget::PlainText => LinkComponent::Span,
            LinkTarget::InternalPreview(slug) => match self.previews.get(slug) {
                Some(note) => LinkComponent::Preview(note),
                None => LinkComponent::Label,
            },
        }
    }

    /// HTML for an intercepted link. `children` is already-rendered HTML.
    /// `ordinal` keeps popup ids unique when a note is referenced twice.
    fn component_html(&self, component: LinkComponent<'_>, children: &str, ordinal: usize) -> String {
        match component {
            LinkComponent::Preview(note) => self.popup_html(note, children, ordinal),
            LinkComponent::Label => format!("<span class=\"note-label\">{children}</span>"),
            LinkComponent::Span | LinkComponent::Default => format!("<span>{children}</span>"),
        }
    }

    fn popup_html(&self, note: &PopupNoteData, children: &str, ordinal: usize) -> String {
        let slug = html_escape(&note.slug);
        let panel_id = format!("popup-{slug}-{ordinal}");
        let segments: Vec<&str> = note.slug.split('/').filter(|s| !s.is_empty()).collect();
        let href = html_escape(&note_route(&self.route_prefix, &segments));

        let mut out = String::new();
        out.push_str("<span class=\"note-popup\">");
        out.push_str(&format!(
            "<button type=\"button\" class=\"note-popup-trigger\" aria-expanded=\"false\" \
             aria-controls=\"{panel_id}\" data-note-slug=\"{slug}\">{children}</button>"
        ));
        out.push_str(&format!(
            "<span id=\"{panel_id}\" class=\"note-popup-panel\" role=\"dialog\" aria-modal=\"false\" hidden>"
        ));
        out.push_str("<span class=\"note-popup-kicker\">Note preview</span>");
        out.push_str(&format!(
            "<span class=\"note-popup-title\">{}</span>",
            html_escape(&note.title)
        ));
        if let Some(excerpt) = &note.excerpt {
            out.push_str(&format!(
                "<span class=\"note-popup-excerpt\">{}</span>",
                html_escape(excerpt)
            ));
        }
        out.push_str(&format!(
            "<a class=\"note-popup-open\" href=\"{href}\">Open full note →</a>"
        ));
        out.push_str("</span></span>");
        out
    }

    /// Convert markdown to HTML, swapping note links for popup components.
    ///
    /// Tables and strikethrough are enabled. External links render exactly
    /// as they would without this binding.
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let mut events: Vec<Event<'_>> = Vec::new();
        let mut captured: Option<(LinkTarget, Vec<Event<'_>>)> = None;
        let mut ordinal = 0;

        for event in Parser::new_ext(markdown, options) {
            if let Some((_, children)) = captured.as_mut() {
                if matches!(event, Event::End(TagEnd::Link)) {
                    if let Some((target, children)) = captured.take() {
                        let mut inner = String::new();
                        html::push_html(&mut inner, children.into_iter());
                        let component = self.bind(&target);
                        let rendered = self.component_html(component, &inner, ordinal);
                        ordinal += 1;
                        events.push(Event::InlineHtml(rendered.into()));
                    }
                } else {
                    children.push(event);
                }
                continue;
            }

            match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => match LinkTarget::classify(Some(&*dest_url)) {
                    LinkTarget::External(_) => events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    })),
                    target => captured = Some((target, Vec::new())),
                },
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}
