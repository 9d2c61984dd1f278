//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level. `RUST_LOG` takes precedence.
pub fn filter_directive(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    format!("notelink={level}")
}

/// Install a stderr fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
