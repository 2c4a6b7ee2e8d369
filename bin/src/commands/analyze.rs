//! Snapshot command implementation.
//!
//! Reads a ticker, acquires a year of daily history, prints the summary
//! statistics and hands the most recent sessions to the chart surface.

use crate::display::{PREVIEW_ROWS, error_chain, not_found_guidance, preview, spinner};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use inquire::{InquireError, Text};
use std::io::Write;
use std::process::ExitCode;
use stockpeek_lib::prelude::*;

/// Flags that shape one run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOptions {
    /// Suppress the spinner and the data preview.
    pub(crate) quiet: bool,
    /// Present the chart after the report.
    pub(crate) chart: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Nothing was entered, so nothing ran.
    NoTicker,
    /// A report was printed.
    Analyzed,
    /// Data was acquired but too short to analyze.
    Insufficient,
    /// The provider had no data for the ticker.
    NotFound,
    /// The provider call failed.
    Failed,
}

impl Outcome {
    /// Whether scripts should see this run as failed.
    pub(crate) const fn is_failure(self) -> bool {
        matches!(self, Self::NotFound | Self::Failed)
    }

    pub(crate) const fn exit_code(self) -> ExitCode {
        if self.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    }
}

/// Runs the snapshot for `ticker_arg`, prompting when it is absent.
pub(crate) async fn run(ticker_arg: Option<String>, options: RunOptions) -> Result<ExitCode> {
    let input = match ticker_arg {
        Some(arg) => arg,
        None => prompt_ticker()?,
    };

    let today = chrono::Utc::now().date_naive();
    let outcome = run_input(
        &input,
        || YahooClient::with_defaults().context("Failed to create HTTP client"),
        &mut BrowserSurface::new(),
        today,
        options,
        &mut std::io::stdout(),
    )
    .await?;
    Ok(outcome.exit_code())
}

/// Validates `input`, then connects and runs the snapshot.
///
/// Empty input returns before `connect` is called.
pub(crate) async fn run_input<P, C, S, W>(
    input: &str,
    connect: C,
    surface: &mut S,
    today: NaiveDate,
    options: RunOptions,
    out: &mut W,
) -> Result<Outcome>
where
    C: FnOnce() -> Result<P>,
    P: BarProvider,
    S: ChartSurface + ?Sized,
    W: Write,
{
    let Some(ticker) = parse_ticker(input) else {
        writeln!(out, "No ticker entered. Exiting.")?;
        return Ok(Outcome::NoTicker);
    };

    let provider = connect()?;
    snapshot(&provider, surface, &ticker, today, options, out).await
}

/// Asks for a ticker on the terminal. A cancelled prompt reads as empty input.
fn prompt_ticker() -> Result<String> {
    let answer = Text::new("Ticker symbol:")
        .with_help_message("Add the exchange suffix for non-US listings, e.g. RELIANCE.NS")
        .prompt();

    match answer {
        Ok(input) => Ok(input),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(String::new())
        }
        Err(e) => Err(e).context("Failed to read ticker"),
    }
}

/// Normalizes raw input, returning `None` when nothing was entered.
fn parse_ticker(input: &str) -> Option<Ticker> {
    match Ticker::parse(input) {
        Ok(ticker) => Some(ticker),
        Err(TickerError::Empty) => {
            tracing::debug!("empty ticker input");
            None
        }
    }
}

/// Acquires, reports and charts one ticker, writing console text to `out`.
pub(crate) async fn snapshot<P, S, W>(
    provider: &P,
    surface: &mut S,
    ticker: &Ticker,
    today: NaiveDate,
    options: RunOptions,
    out: &mut W,
) -> Result<Outcome>
where
    P: BarProvider + ?Sized,
    S: ChartSurface + ?Sized,
    W: Write,
{
    let window = DateRange::trailing_year(today);
    let pb = spinner(options.quiet, format!("Fetching daily history for {ticker} ({window})"));
    let acquisition = acquire(provider, ticker, window).await;
    pb.finish_and_clear();

    let registry = ExchangeRegistry::global();
    match &acquisition {
        Acquisition::Success(table) => {
            writeln!(out, "Fetched {} trading sessions for {ticker}.", table.len())?;
            if !options.quiet {
                writeln!(out)?;
                write!(out, "{}", preview(table.tail(PREVIEW_ROWS)))?;
            }
        }
        Acquisition::NotFound => write!(out, "{}", not_found_guidance(ticker, registry))?,
        Acquisition::TransientError(error) => {
            writeln!(out, "Failed to fetch data for {ticker}: {}", error_chain(error))?;
        }
    }

    let table = acquisition.table();
    let currency = registry.currency_prefix(table.and_then(PriceTable::currency), ticker);

    writeln!(out)?;
    let mut outcome = match analyze(table) {
        Ok(analysis) => {
            writeln!(out, "{}", Report::new(&analysis, ticker, &currency))?;
            Outcome::Analyzed
        }
        Err(skipped) => {
            writeln!(out, "{skipped}")?;
            Outcome::Insufficient
        }
    };

    match acquisition {
        Acquisition::Success(ref table) => {
            if options.chart {
                let bars = table.tail(DISPLAY_SESSIONS);
                writeln!(out, "\nOpening chart of the last {} sessions...", bars.len())?;
                ChartRenderer::default().render(bars, ticker, &currency, surface);
            }
        }
        Acquisition::NotFound => outcome = Outcome::NotFound,
        Acquisition::TransientError(_) => outcome = Outcome::Failed,
    }

    Ok(outcome)
}
