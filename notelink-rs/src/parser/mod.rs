//! Parsers for note text.

pub mod frontmatter;
pub mod reference;

pub use frontmatter::{Frontmatter, parse_frontmatter, split_frontmatter};
pub use reference::{NOTE_SCHEME, note_href, replace_references, scan_references, slug_from_href};
