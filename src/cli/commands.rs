//! Command execution: the single prompt -> response flow

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::exitcode;
use crate::infrastructure::traits::QueryClient;

/// Parse `args`, forward the prompt to `client`, and render the outcome.
///
/// The argument sequence is taken as an explicit parameter (program name
/// first) so the full flow can be exercised in-process. Returns the process
/// exit code: 0 on success, 1 on any failure. The response goes to `out`
/// verbatim with a trailing newline; failures produce a single
/// `Error: <description>` line on `err`. The two streams are never mixed.
pub fn run<I, T>(args: I, client: &dyn QueryClient, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{e}");
            return exitcode::OK;
        }
        Err(e) => {
            let _ = write!(err, "{e}");
            return exitcode::FAILURE;
        }
    };

    match query(&cli, client) {
        Ok(response) => {
            let _ = writeln!(out, "{response}");
            exitcode::OK
        }
        Err(e) => {
            let _ = writeln!(err, "{}", format!("Error: {}", e).red());
            e.exit_code()
        }
    }
}

fn query(cli: &Cli, client: &dyn QueryClient) -> CliResult<String> {
    let prompt = cli
        .prompt
        .as_deref()
        .ok_or_else(|| CliError::Usage("No prompt provided".to_string()))?;
    debug!("prompt: {:?}", prompt);

    let response = client.query(prompt)?;
    debug!("response: {} bytes", response.len());
    Ok(response)
}
