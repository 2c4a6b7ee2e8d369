//! Calendar windows for history requests.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::DateRangeError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Length of the trailing window used for a default fetch.
    pub const ONE_YEAR_DAYS: u64 = 365;

    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window covering `days` days back from `end`, inclusive of both ends.
    #[must_use]
    pub fn trailing_days(end: NaiveDate, days: u64) -> Self {
        let start = end.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Creates the one-year trailing window ending at `end`.
    #[must_use]
    pub fn trailing_year(end: NaiveDate) -> Self {
        Self::trailing_days(end, Self::ONE_YEAR_DAYS)
    }

    /// Returns the Unix timestamp of `start` at midnight UTC.
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        self.start.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// Returns the Unix timestamp of midnight UTC following `end`.
    ///
    /// The provider treats the upper bound as exclusive, so this covers the
    /// whole of the end date.
    #[must_use]
    pub fn end_timestamp(&self) -> i64 {
        self.end
            .succ_opt()
            .unwrap_or(self.end)
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
