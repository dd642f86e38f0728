//! Infrastructure-level errors

use thiserror::Error;

/// Infrastructure errors cover everything that can go wrong talking to the
/// external client. The `Display` form is the bare fault description; the
/// CLI layer prefixes it with `Error: `.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Client {
        message: String,
        exit_code: Option<i32>,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
