//! YAML front-matter handling for the directory loader.

use crate::error::{NotelinkError, Result};
use serde::Deserialize;
use std::path::Path;

/// Header fields the loader cares about. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Explicit position in the corpus index; lower sorts first.
    #[serde(default)]
    pub order: Option<i64>,
}

/// A file split into its raw YAML header and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    pub yaml: Option<&'a str>,
    pub body: &'a str,
}

/// Split a file into front-matter and body.
///
/// The header must open with `---` on the first line and close with a line
/// holding only `---`. Anything else is treated as body.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let no_header = FrontmatterSplit {
        yaml: None,
        body: content,
    };

    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return no_header;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = rest[..offset].trim_end_matches(['\r', '\n']);
            let body = &rest[offset + line.len()..];
            return FrontmatterSplit {
                yaml: Some(yaml),
                body,
            };
        }
        offset += line.len();
    }

    no_header
}

/// Parse the header of `content`, returning the typed fields and the body.
///
/// A file without a header yields default fields. `path` is only used for
/// error messages.
pub fn parse_frontmatter<'a>(content: &'a str, path: &Path) -> Result<(Frontmatter, &'a str)> {
    let split = split_frontmatter(content);
    let fields = match split.yaml {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|e| NotelinkError::InvalidFrontmatter {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        _ => Frontmatter::default(),
    };
    Ok((fields, split.body))
}
