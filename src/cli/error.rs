//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user, always as `Error: <description>`.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the exit code for this error.
    ///
    /// Every failure is terminal and reported identically; missing prompt
    /// and delegate faults both map to the same code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::FAILURE,
            CliError::Infra(_) => crate::exitcode::FAILURE,
        }
    }
}
