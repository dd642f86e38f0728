//! CLI argument definitions using clap

use clap::Parser;

/// One-shot CLI adapter for Claude Code: forward a single prompt, print the response
#[derive(Parser, Debug)]
#[command(name = "claude-ask")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt to send to the assistant (quote at the shell level if it contains spaces)
    pub prompt: Option<String>,

    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,
}
