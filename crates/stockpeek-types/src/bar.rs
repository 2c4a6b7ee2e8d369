//! Daily OHLCV session record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading session's summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date in the exchange's local calendar.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

impl DailyBar {
    /// Creates a new daily bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if prices are positive and `high`/`low` bound `open` and `close`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite() && *p > 0.0)
            && self.high >= self.open.max(self.close).max(self.low)
            && self.low <= self.open.min(self.close).min(self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_consistent_bar() {
        let bar = DailyBar::new(date(), 100.0, 105.0, 98.0, 103.0, 1_000);
        assert!(bar.is_consistent());
    }

    #[test]
    fn test_high_below_close_is_inconsistent() {
        let bar = DailyBar::new(date(), 100.0, 101.0, 98.0, 103.0, 1_000);
        assert!(!bar.is_consistent());
    }

    #[test]
    fn test_low_above_open_is_inconsistent() {
        let bar = DailyBar::new(date(), 100.0, 105.0, 101.0, 103.0, 1_000);
        assert!(!bar.is_consistent());
    }

    #[test]
    fn test_non_positive_price_is_inconsistent() {
        let bar = DailyBar::new(date(), 0.0, 1.0, 0.0, 0.5, 10);
        assert!(!bar.is_consistent());
    }

    #[test]
    fn test_flat_session_is_consistent() {
        let bar = DailyBar::new(date(), 50.0, 50.0, 50.0, 50.0, 0);
        assert!(bar.is_consistent());
    }
}
