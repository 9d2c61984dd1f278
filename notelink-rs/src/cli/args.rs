//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelink")]
#[command(author, version, about = "Resolve [[references]] between notes and render previews", long_about = None)]
pub struct Cli {
    /// Directory holding the notes (overrides config)
    #[arg(long, global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Maximum excerpt length in characters (overrides config)
    #[arg(long, global = true)]
    pub max_chars: Option<usize>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the corpus index in resolution order
    List,

    /// Show the landing note, overview and index listing
    Home,

    /// Print the canonical slug for a piece of text
    Normalize(NormalizeArgs),

    /// Resolve a reference target against the corpus
    Resolve(ResolveArgs),

    /// List the reference tokens in a note
    Refs(SlugArgs),

    /// Rewrite a note's references into links
    Rewrite(SlugArgs),

    /// Fetch preview metadata for the notes a note references
    Previews(SlugArgs),

    /// Render a note page to HTML with preview popups
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize
    pub text: String,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Reference target, as written inside [[...]]
    pub target: String,
}

#[derive(Args, Debug)]
pub struct SlugArgs {
    /// Slug of the note
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Slug of the note
    pub slug: String,

    /// Print only the rendered HTML
    #[arg(long)]
    pub html_only: bool,
}
