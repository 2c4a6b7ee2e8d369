//! Display utilities and console formatting for the stockpeek CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::time::Duration;
use stockpeek_lib::prelude::*;

/// Number of trailing sessions shown in the data preview.
pub(crate) const PREVIEW_ROWS: usize = 5;

/// Creates the spinner shown while the history request is in flight.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Renders bars as a right-aligned table with a date index column.
pub(crate) fn preview(bars: &[DailyBar]) -> String {
    let mut out = format!(
        "{:<12}{:>12}{:>12}{:>12}{:>12}{:>14}\n",
        "Date", "Open", "High", "Low", "Close", "Volume"
    );
    for bar in bars {
        out.push_str(&format!(
            "{:<12}{:>12.2}{:>12.2}{:>12.2}{:>12.2}{:>14}\n",
            bar.date.format("%Y-%m-%d").to_string(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        ));
    }
    out
}

/// Explains how to form a ticker after the provider returned no data.
pub(crate) fn not_found_guidance(ticker: &Ticker, registry: &ExchangeRegistry) -> String {
    format!(
        "No data found for {ticker}.\n\
         Check the symbol and add the exchange suffix for non-US listings.\n\
         Examples: {}\n",
        registry.examples().join(", ")
    )
}

/// Joins an error and its sources into one line, skipping sources whose
/// text the message already carries.
pub(crate) fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
