//! notelink CLI entry point.

use clap::Parser;
use notelink::cli::args::{Cli, Commands};
use notelink::cli::output::Output;
use notelink::cli::{links, list, page, resolve};
use notelink::config::Config;
use notelink::error::{NotelinkError, exit_code};
use notelink::logging;
use notelink::source::DirectorySource;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), NotelinkError> {
    let output = Output::new(cli.output_format());

    // Needs no corpus.
    if let Commands::Normalize(args) = &cli.command {
        return resolve::normalize_text(args, &output);
    }

    let mut config = Config::load()?;
    if let Some(max_chars) = cli.max_chars {
        config.excerpt.max_chars = max_chars;
        config.validate()?;
    }
    let source = DirectorySource::new(config.resolve_notes_dir(cli.notes_dir.as_deref()))?;

    match &cli.command {
        Commands::Normalize(args) => resolve::normalize_text(args, &output),
        Commands::List => list::run(&source, &output),
        Commands::Home => list::home(&source, &config.navigation, &output),
        Commands::Resolve(args) => resolve::run(&source, args, &output),
        Commands::Refs(args) => links::refs(&source, args, &output),
        Commands::Rewrite(args) => links::rewrite_note(&source, args, &output),
        Commands::Previews(args) => page::previews(&source, &config, args, &output),
        Commands::Render(args) => page::render(&source, &config, args, &output),
    }
}
