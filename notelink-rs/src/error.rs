//! Error types and exit codes for notelink.
//!
//! Only loading, configuration and output are fallible. The resolution
//! engine itself (normalize, resolve, rewrite, previews, render) is total.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const INVALID_FRONTMATTER: i32 = 5;
}

/// Main error type for notelink operations.
#[derive(Error, Debug)]
pub enum NotelinkError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Unresolved reference: {0}")]
    Unresolved(String),

    #[error("Notes directory not found at: {0}")]
    NotesDirNotFound(PathBuf),

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl NotelinkError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NotelinkError::NoteNotFound(_) | NotelinkError::Unresolved(_) => {
                exit_code::NOTE_NOT_FOUND
            }
            NotelinkError::InvalidFrontmatter { .. } => exit_code::INVALID_FRONTMATTER,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for notelink operations.
pub type Result<T> = std::result::Result<T, NotelinkError>;
