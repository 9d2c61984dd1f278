//! Configuration loaded from `config.toml`.
//!
//! Lookup order: the file named by `NOTELINK_CONFIG`, then
//! `<config dir>/notelink/config.toml`, then built-in defaults. Every field
//! is optional in the file.

use crate::error::{NotelinkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "NOTELINK_CONFIG";

/// Default maximum excerpt length, in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 280;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub excerpt: ExcerptConfig,
    pub links: LinksConfig,
    pub navigation: NavigationConfig,
    pub source: SourceConfig,
}

/// How preview excerpts are cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    pub max_chars: usize,
    /// Appended when a paragraph was cut.
    pub ellipsis: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_EXCERPT_CHARS,
            ellipsis: "…".to_string(),
        }
    }
}

/// Where rendered "open full note" links point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub route_prefix: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/notes".to_string(),
        }
    }
}

/// Index page policies. Prefixes are slug segments joined with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Notes strictly below this prefix are landing candidates. Empty
    /// disables the landing note.
    pub landing_prefix: String,
    /// Subtrees left out of the index listing.
    pub hidden_prefixes: Vec<String>,
    /// Slug prefix of the overview note; the first note when nothing matches.
    pub overview_prefix: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            landing_prefix: "1/0".to_string(),
            hidden_prefixes: vec!["1/9".to_string()],
            overview_prefix: "1/0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment or the user config dir.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/notelink/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notelink").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            NotelinkError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loading config");
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.excerpt.max_chars == 0 {
            return Err(NotelinkError::Config(
                "excerpt.max_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Pick the notes directory: CLI override, then config, then the
    /// current directory.
    pub fn resolve_notes_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.source.notes_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
