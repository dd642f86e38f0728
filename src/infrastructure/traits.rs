//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing the command flow
//! to be tested with stub implementations.

use std::io;
use std::process::Output;

use crate::infrastructure::error::InfraResult;

/// The external query capability: one blocking prompt -> response call.
///
/// Construction of implementations takes no configuration from this crate;
/// the real client sources credentials from its own environment.
pub trait QueryClient: Send + Sync {
    /// Send `prompt` verbatim and block until the full response (or a fault)
    /// is available. No streaming, no cancellation, no session state.
    fn query(&self, prompt: &str) -> InfraResult<String>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments and capture its output.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }
}
