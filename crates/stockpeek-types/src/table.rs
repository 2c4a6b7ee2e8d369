//! Immutable, chronologically ordered price table.

use crate::{DailyBar, TableError, Ticker};

/// Daily history for one ticker, oldest session first.
///
/// A table always holds at least one bar and its dates strictly increase.
/// Consumers read it through slices and never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    ticker: Ticker,
    currency: Option<String>,
    bars: Vec<DailyBar>,
}

impl PriceTable {
    /// Creates a table after checking it is non-empty and strictly chronological.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] for an empty bar list and
    /// [`TableError::NotChronological`] if any date does not follow its predecessor.
    pub fn new(
        ticker: Ticker,
        currency: Option<String>,
        bars: Vec<DailyBar>,
    ) -> Result<Self, TableError> {
        if bars.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(TableError::NotChronological {
                previous: pair[0].date,
                current: pair[1].date,
            });
        }
        Ok(Self {
            ticker,
            currency,
            bars,
        })
    }

    /// Returns the ticker the table was fetched for.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Returns the ISO currency code reported by the provider.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns all bars, oldest first.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the most recent session.
    #[must_use]
    pub fn latest(&self) -> &DailyBar {
        // non-empty by construction
        &self.bars[self.bars.len() - 1]
    }

    /// Returns the last `n` sessions, or all of them if fewer exist.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[DailyBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }
}
