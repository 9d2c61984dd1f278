//! Body rewriting: reference tokens become emphasized links or labels.

use crate::parser::reference::{note_href, replace_references};
use crate::resolve::resolve_with_kind;
use crate::types::{NoteSummary, Rewritten};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Backslash-escape characters markdown would read as link, emphasis,
/// code or inline HTML syntax inside a label.
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '\\' | '[' | ']' | '*' | '_' | '`' | '~' | '<' | '&') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Rewrite every reference token in `body` against `index`.
///
/// Resolved tokens become `**[label](note:slug)**`; unresolved ones become
/// `**label**`. Tokens whose label is blank are left as written. The
/// returned slugs are deduplicated and keep first-reference order. Text with
/// no tokens is returned unchanged.
pub fn rewrite(body: &str, index: &[NoteSummary]) -> Rewritten {
    let mut seen: HashSet<String> = HashSet::new();
    let mut referenced_slugs = Vec::new();

    let text = replace_references(body, |token| {
        let label = token.display_label();
        if label.is_empty() {
            trace!(start = token.start, "blank reference left as written");
            return body[token.start..token.end].to_string();
        }
        let label = escape_label(&label);
        match resolve_with_kind(&token.target, index) {
            Some((summary, kind)) => {
                debug!(
                    reference = token.target.trim(),
                    slug = %summary.slug,
                    rule = kind.as_str(),
                    "resolved reference"
                );
                if seen.insert(summary.slug.clone()) {
                    referenced_slugs.push(summary.slug.clone());
                }
                format!("**[{label}]({})**", note_href(&summary.slug))
            }
            None => {
                trace!(reference = token.target.trim(), "unresolved reference");
                format!("**{label}**")
            }
        }
    });

    Rewritten {
        text,
        referenced_slugs,
    }
}
