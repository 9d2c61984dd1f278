//! Canonical slug normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Map free-form reference text to a canonical slug.
///
/// - Trim surrounding whitespace
/// - Decompose (NFKD) and drop combining marks, so `é` folds to `e`
/// - Replace every run of characters other than ASCII letters, digits and `/`
///   with a single hyphen
/// - Strip leading and trailing hyphens
/// - Lowercase
///
/// Total and idempotent: the output only contains `[a-z0-9/-]` with no
/// hyphen runs and no hyphen at either end.
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_alphanumeric() || c == '/' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Alpha Note"), "alpha-note");
        assert_eq!(normalize("  Spaced  Out  "), "spaced-out");
        assert_eq!(normalize("What's New?"), "what-s-new");
        assert_eq!(normalize("C++ Programming"), "c-programming");
        assert_eq!(normalize("under_score"), "under-score");
    }

    #[test]
    fn test_normalize_keeps_path_separator() {
        assert_eq!(normalize("People/Ada Lovelace"), "people/ada-lovelace");
        assert_eq!(normalize("a / b"), "a-/-b");
    }

    #[test]
    fn test_normalize_folds_diacritics() {
        assert_eq!(normalize("Café Crème"), "cafe-creme");
        assert_eq!(normalize("Ärjylä"), "arjyla");
        assert_eq!(normalize("naïve"), "naive");
    }

    #[test]
    fn test_normalize_strips_edge_hyphens() {
        assert_eq!(normalize("--hello--"), "hello");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_non_latin_drops_to_empty() {
        assert_eq!(normalize("日本語"), "");
        assert_eq!(normalize("日本 notes"), "notes");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "",
            "Alpha Note",
            "  Spaced  Out  ",
            "People/Ada Lovelace",
            "--x--y--",
            "Café/ Crème /",
            "a//b",
            "ﬁne print",
            "日本 notes",
            "tab\tand\nnewline",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
