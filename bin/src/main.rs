//! stockpeek CLI - Single-ticker equity snapshot.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod commands;
mod display;

use commands::analyze::RunOptions;

#[derive(Parser)]
#[command(name = "stockpeek")]
#[command(about = "Fetch a year of daily prices for one ticker, summarize and chart them", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker symbol with optional exchange suffix (e.g., RELIANCE.NS, AAPL).
    /// Prompted for when omitted.
    ticker: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress spinner and data preview)
    #[arg(short, long)]
    quiet: bool,

    /// Skip the interactive chart
    #[arg(long)]
    no_chart: bool,
}

/// Installs the stderr diagnostics subscriber.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = RunOptions {
        quiet: cli.quiet,
        chart: !cli.no_chart,
    };
    commands::analyze::run(cli.ticker, options).await
}
