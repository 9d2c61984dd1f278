//! End-to-end checks of the resolution engine through the public API.

use notelink::{
    Config, LinkComponent, LinkTarget, MemorySource, Note, NoteSource, NoteSummary,
    PreviewComponents, fetch_previews, normalize, render_note_page, resolve, rewrite,
};
use pretty_assertions::assert_eq;

fn corpus() -> MemorySource {
    MemorySource::new(vec![
        Note::new(
            NoteSummary::new("notes/alpha-note", "Alpha Note"),
            "Alpha body mentions [[Beta]].",
        ),
        Note::new(
            NoteSummary::new("notes/beta", "Beta").with_description("D"),
            "Ignored because the description wins.",
        ),
        Note::new(NoteSummary::new("long", "Long"), "z".repeat(400)),
    ])
}

#[test]
fn normalize_is_idempotent_and_total() {
    for input in ["", " ", "Alpha Note", "ÀÉÎ/õü", "a--b", "--", "x/y/z", "😀 emoji"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
    assert_eq!(normalize(""), "");
}

#[test]
fn resolve_matches_slug_segment_and_title() {
    let index = corpus().list_summaries().unwrap();
    assert_eq!(resolve("notes/alpha-note", &index).unwrap().slug, "notes/alpha-note");
    assert_eq!(resolve("alpha note", &index).unwrap().slug, "notes/alpha-note");
    assert_eq!(resolve("BETA", &index).unwrap().slug, "notes/beta");
    assert!(resolve("gamma", &index).is_none());
}

#[test]
fn rewrite_without_tokens_is_identity() {
    let index = corpus().list_summaries().unwrap();
    let body = "No references here.\n\n- just a list";
    let out = rewrite(body, &index);
    assert_eq!(out.text, body);
    assert!(out.referenced_slugs.is_empty());
}

#[test]
fn rewrite_deduplicates_equivalent_references() {
    let index = corpus().list_summaries().unwrap();
    let out = rewrite("See [[Alpha Note]] and [[alpha-note]] again.", &index);
    assert_eq!(out.referenced_slugs, vec!["notes/alpha-note"]);
    assert_eq!(out.text.matches("note:notes/alpha-note").count(), 2);
}

#[test]
fn rewrite_missing_reference_is_bold_label() {
    let index = corpus().list_summaries().unwrap();
    let out = rewrite("[[Missing Thing]]", &index);
    assert_eq!(out.text, "**Missing Thing**");
    assert!(out.referenced_slugs.is_empty());
}

#[test]
fn rewrite_is_deterministic() {
    let index = corpus().list_summaries().unwrap();
    let body = "[[Beta]] [[Alpha Note|a]] [[nope]] [[beta]]";
    let first = rewrite(body, &index);
    let second = rewrite(body, &index);
    assert_eq!(first, second);
}

#[test]
fn fetch_previews_omits_missing_and_derives_excerpts() {
    let source = corpus();
    let config = Config::default();
    let map = fetch_previews(["notes/beta", "gone", "long"], &source, &config.excerpt);

    assert_eq!(map.len(), 2);
    assert!(!map.contains_key("gone"));
    assert_eq!(map["notes/beta"].excerpt.as_deref(), Some("D"));
    assert_eq!(
        map["long"].excerpt.as_deref(),
        Some(format!("{}…", "z".repeat(280)).as_str())
    );
}

#[test]
fn renderer_degrades_for_missing_preview() {
    let source = corpus();
    let config = Config::default();
    let index = source.list_summaries().unwrap();
    let out = rewrite("[[Beta]]", &index);

    // Preview map built without the referenced slug.
    let components = PreviewComponents::new(Default::default(), &config.links);
    assert_eq!(
        components.bind(&LinkTarget::classify(Some("note:notes/beta"))),
        LinkComponent::Label
    );
    assert_eq!(
        components.render_markdown(&out.text),
        "<p><strong><span class=\"note-label\">Beta</span></strong></p>\n"
    );
}

#[test]
fn full_page_pass() {
    let page = render_note_page(&corpus(), "notes/alpha-note", &Config::default())
        .unwrap()
        .unwrap();
    assert_eq!(page.referenced_slugs, vec!["notes/beta"]);
    assert!(page.html.contains("<span class=\"note-popup-excerpt\">D</span>"));
    assert!(page.html.contains("href=\"/notes/notes/beta\""));
}

#[test]
fn multiline_reference_renders_as_one_popup() {
    let source = corpus();
    let config = Config::default();
    let index = source.list_summaries().unwrap();
    let out = rewrite("See [[Alpha\n\nNote]] now.", &index);

    let previews = fetch_previews(&out.referenced_slugs, &source, &config.excerpt);
    let html = PreviewComponents::new(previews, &config.links).render_markdown(&out.text);
    assert!(!html.contains("note:"));
    assert_eq!(html.matches("class=\"note-popup\"").count(), 1);
    assert!(html.contains(">Alpha Note</button>"));
}

#[test]
fn blank_reference_is_not_a_thematic_break() {
    let config = Config::default();
    let out = rewrite("[[   ]]", &[]);
    let html = PreviewComponents::new(Default::default(), &config.links).render_markdown(&out.text);
    assert!(!html.contains("<hr"));
    assert_eq!(html, "<p>[[   ]]</p>\n");
}
