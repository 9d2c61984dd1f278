//! notelink - resolve `[[wiki-style]]` references between slugged notes.
//!
//! # Overview
//!
//! A pass over one note goes through four steps:
//! - [`rewrite`](rewrite::rewrite) scans the body for `[[target]]` and
//!   `[[target|alias]]` tokens, resolves each against the corpus index and
//!   turns it into `**[label](note:slug)**`, or `**label**` when nothing matches
//! - [`fetch_previews`](preview::fetch_previews) loads each referenced note
//!   once and derives a short excerpt
//! - [`PreviewComponents`](render::PreviewComponents) renders the rewritten
//!   markdown to HTML, swapping `note:` links for preview popups
//! - [`render_note_page`](page::render_note_page) ties the steps together
//!
//! # Example
//!
//! ```
//! use notelink::{MemorySource, Note, NoteSummary, NoteSource, rewrite};
//!
//! let source = MemorySource::new(vec![Note::new(
//!     NoteSummary::new("people/ada-lovelace", "Ada Lovelace"),
//!     "Wrote the first program.",
//! )]);
//! let index = source.list_summaries().unwrap();
//!
//! let out = rewrite("Ask [[Ada Lovelace|Ada]] or [[Nobody]].", &index);
//! assert_eq!(
//!     out.text,
//!     "Ask **[Ada](note:people/ada-lovelace)** or **Nobody**."
//! );
//! assert_eq!(out.referenced_slugs, vec!["people/ada-lovelace"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod parser;
pub mod preview;
pub mod render;
pub mod resolve;
pub mod rewrite;
pub mod slug;
pub mod source;
pub mod types;

// Re-export main types at crate root
pub use config::Config;
pub use error::{NotelinkError, Result};
pub use page::{RenderedPage, render_note_page};
pub use preview::{derive_excerpt, fetch_previews};
pub use render::{LinkComponent, LinkTarget, PreviewComponents};
pub use resolve::{MatchKind, resolve, resolve_with_kind};
pub use rewrite::rewrite;
pub use slug::normalize;
pub use source::{DirectorySource, MemorySource, NoteSource};
pub use types::*;
