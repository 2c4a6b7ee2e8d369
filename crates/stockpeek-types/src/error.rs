//! Error types for stockpeek.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while assembling a [`PriceTable`](crate::PriceTable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table would contain no sessions.
    #[error("Price table has no rows")]
    Empty,

    /// Sessions are out of order or a date repeats.
    #[error("Sessions not in chronological order: {current} follows {previous}")]
    NotChronological {
        /// The date of the earlier row.
        previous: NaiveDate,
        /// The offending date.
        current: NaiveDate,
    },
}

/// Error for invalid ticker input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// Nothing but whitespace was entered.
    #[error("No ticker entered")]
    Empty,
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
