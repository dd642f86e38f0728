use std::{env, io, process};

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use claude_ask::cli::args::Cli;
use claude_ask::cli::commands;
use claude_ask::infrastructure::ClaudeCodeClient;

fn main() {
    // Pre-parse only for the -d count; run() owns parsing, rendering and
    // the exit code, so argv errors stay on the uniform 0/1 contract.
    let verbosity = Cli::try_parse().map(|cli| cli.debug).unwrap_or(0);
    setup_logging(verbosity);

    let client = ClaudeCodeClient::new();
    let args: Vec<String> = env::args().collect();
    let code = commands::run(args, &client, &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
