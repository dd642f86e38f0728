//! Real query client backed by the `claude` binary
//!
//! The Claude Code CLI is invoked in non-interactive print mode (`claude -p
//! <prompt>`) and treated as an opaque blocking call: the process is spawned,
//! the adapter waits unboundedly, and the child's stdout is the response.
//! Credentials and model selection are the binary's own concern.

use std::sync::Arc;

use tracing::debug;

use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{CommandRunner, QueryClient, RealCommandRunner};

const CLAUDE_BIN: &str = "claude";

/// Query client that shells out to the Claude Code CLI.
pub struct ClaudeCodeClient {
    cmd: Arc<dyn CommandRunner>,
}

impl ClaudeCodeClient {
    /// Create a client using the real command runner.
    pub fn new() -> Self {
        Self::with_runner(Arc::new(RealCommandRunner))
    }

    /// Create a client with a custom command runner (for testing).
    pub fn with_runner(cmd: Arc<dyn CommandRunner>) -> Self {
        Self { cmd }
    }
}

impl Default for ClaudeCodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient for ClaudeCodeClient {
    fn query(&self, prompt: &str) -> InfraResult<String> {
        debug!("invoking {} -p ({} byte prompt)", CLAUDE_BIN, prompt.len());

        let output = self
            .cmd
            .run(CLAUDE_BIN, &["-p", prompt])
            .map_err(|e| InfraError::io(format!("failed to launch {}", CLAUDE_BIN), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", CLAUDE_BIN, output.status),
                msg => msg.to_string(),
            };
            return Err(InfraError::Client {
                message,
                exit_code: output.status.code(),
            });
        }

        // The CLI terminates its output with a newline; strip it so the
        // adapter controls the trailing newline itself.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let response = stdout
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&stdout);
        Ok(response.to_string())
    }
}
