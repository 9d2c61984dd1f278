//! CLI command implementations.

pub mod args;
pub mod output;

pub mod links;
pub mod list;
pub mod page;
pub mod resolve;

pub use args::{Cli, Commands};
pub use output::Output;
