//! Infrastructure layer: the real query client and its I/O boundary

pub mod client;
pub mod error;
pub mod traits;

pub use client::ClaudeCodeClient;
pub use error::{InfraError, InfraResult};
