//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;

pub use args::Cli;
pub use commands::run;
pub use error::{CliError, CliResult};
