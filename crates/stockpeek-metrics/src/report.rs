//! Text rendering of an analysis.

use std::fmt;

use stockpeek_types::Ticker;

use crate::{Analysis, Direction, HIGH_LOW_WINDOW};

/// Formats a monetary value with a currency prefix and two decimals.
///
/// ```
/// assert_eq!(stockpeek_metrics::format_money("₹", 1234.5), "₹1234.50");
/// ```
#[must_use]
pub fn format_money(currency: &str, value: f64) -> String {
    format!("{currency}{value:.2}")
}

/// Formats a change as an explicit sign, the currency prefix and the magnitude.
///
/// ```
/// use stockpeek_metrics::format_signed_money;
///
/// assert_eq!(format_signed_money("$", 5.0), "+$5.00");
/// assert_eq!(format_signed_money("$", -5.0), "-$5.00");
/// ```
#[must_use]
pub fn format_signed_money(currency: &str, change: f64) -> String {
    let sign = Direction::of(change).sign();
    format!("{sign}{currency}{:.2}", change.abs())
}

/// Console report for one analysis.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    analysis: &'a Analysis,
    ticker: &'a Ticker,
    currency: &'a str,
}

impl<'a> Report<'a> {
    /// Creates a report that prefixes monetary values with `currency`.
    #[must_use]
    pub const fn new(analysis: &'a Analysis, ticker: &'a Ticker, currency: &'a str) -> Self {
        Self {
            analysis,
            ticker,
            currency,
        }
    }

    /// Returns the change line, e.g. `▲ +₹5.00 (+5.00%)`.
    #[must_use]
    pub fn change_line(&self) -> String {
        let a = self.analysis;
        format!(
            "{} {} ({:+.2}%)",
            a.direction().glyph(),
            format_signed_money(self.currency, a.change),
            a.change_percent
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        let high_label = format!("{HIGH_LOW_WINDOW}-Day High:");
        let low_label = format!("{HIGH_LOW_WINDOW}-Day Low:");

        writeln!(f, "Analysis for {} (as of {})", self.ticker, a.as_of)?;
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, "{:<16}{}", "Latest Price:", format_money(self.currency, a.latest_price))?;
        writeln!(f, "{:<16}{}", "Previous Close:", format_money(self.currency, a.previous_price))?;
        writeln!(f, "{:<16}{}", "Change:", self.change_line())?;
        writeln!(f, "{:<16}{}", high_label, format_money(self.currency, a.high))?;
        write!(f, "{:<16}{}", low_label, format_money(self.currency, a.low))?;
        if a.window < HIGH_LOW_WINDOW {
            write!(f, "\n(high/low over the {} sessions available)", a.window)?;
        }
        Ok(())
    }
}
