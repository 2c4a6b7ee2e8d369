//! Snapshot statistics over a price table.

use chrono::NaiveDate;
use stockpeek_types::{DailyBar, PriceTable};
use thiserror::Error;

/// Number of most recent sessions the high/low span covers.
pub const HIGH_LOW_WINDOW: usize = 100;

/// Why an analysis was not produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSkipped {
    /// There is no table to analyze.
    #[error("No data available to analyze")]
    NoData,

    /// The table is too short to compare two sessions.
    #[error("Insufficient data: need at least 2 sessions, got {rows}")]
    InsufficientRows {
        /// Number of sessions present.
        rows: usize,
    },
}

/// Direction of the latest day-over-day move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Close at or above the previous close.
    Up,
    /// Close below the previous close.
    Down,
}

impl Direction {
    /// Classifies a price change. A zero change counts as up.
    #[must_use]
    pub fn of(change: f64) -> Self {
        if change >= 0.0 { Self::Up } else { Self::Down }
    }

    /// Returns the glyph shown next to the change.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }

    /// Returns the explicit sign character.
    #[must_use]
    pub const fn sign(&self) -> char {
        match self {
            Self::Up => '+',
            Self::Down => '-',
        }
    }
}

/// Descriptive statistics for the most recent sessions of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    /// Date of the latest session.
    pub as_of: NaiveDate,
    /// Number of sessions in the table.
    pub sessions: usize,
    /// Close of the latest session.
    pub latest_price: f64,
    /// Close of the session before it.
    pub previous_price: f64,
    /// `latest_price - previous_price`.
    pub change: f64,
    /// `change / previous_price * 100`.
    pub change_percent: f64,
    /// Highest `high` over the trailing window.
    pub high: f64,
    /// Lowest `low` over the trailing window.
    pub low: f64,
    /// Sessions the high/low span actually covers, `min(100, sessions)`.
    pub window: usize,
}

impl Analysis {
    /// Returns the direction of the latest move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::of(self.change)
    }
}

/// Analyzes an acquired table.
///
/// # Errors
///
/// Returns [`AnalysisSkipped::NoData`] for `None` and
/// [`AnalysisSkipped::InsufficientRows`] for a single-session table.
pub fn analyze(table: Option<&PriceTable>) -> Result<Analysis, AnalysisSkipped> {
    table.map_or(Err(AnalysisSkipped::NoData), |table| {
        analyze_bars(table.bars())
    })
}

/// Analyzes chronologically ordered bars.
///
/// # Errors
///
/// Returns [`AnalysisSkipped::NoData`] for an empty slice and
/// [`AnalysisSkipped::InsufficientRows`] for fewer than two bars.
pub fn analyze_bars(bars: &[DailyBar]) -> Result<Analysis, AnalysisSkipped> {
    let (previous, latest) = match bars {
        [] => return Err(AnalysisSkipped::NoData),
        [_] => return Err(AnalysisSkipped::InsufficientRows { rows: 1 }),
        [.., previous, latest] => (previous, latest),
    };

    let latest_price = latest.close;
    let previous_price = previous.close;
    let change = latest_price - previous_price;
    let change_percent = change / previous_price * 100.0;

    let recent = &bars[bars.len().saturating_sub(HIGH_LOW_WINDOW)..];
    let high = recent.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let low = recent.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);

    Ok(Analysis {
        as_of: latest.date,
        sessions: bars.len(),
        latest_price,
        previous_price,
        change,
        change_percent,
        high,
        low,
        window: recent.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Days;
    use stockpeek_types::Ticker;

    fn day(i: usize) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(i as u64)
    }

    fn bars_from_closes(closes: &[f64]) -> Vec<DailyBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| DailyBar::new(day(i), *c, c + 1.0, c - 1.0, *c, 1_000))
            .collect()
    }

    #[test]
    fn test_absent_table_is_no_data() {
        assert_eq!(analyze(None), Err(AnalysisSkipped::NoData));
        assert_eq!(analyze_bars(&[]), Err(AnalysisSkipped::NoData));
    }

    #[test]
    fn test_single_row_is_insufficient() {
        let table = PriceTable::new(
            Ticker::parse("new.ns").unwrap(),
            None,
            bars_from_closes(&[42.0]),
        )
        .unwrap();

        let skipped = analyze(Some(&table)).unwrap_err();
        assert_eq!(skipped, AnalysisSkipped::InsufficientRows { rows: 1 });
        assert!(skipped.to_string().contains("got 1"));
    }

    #[test]
    fn test_rise() {
        let analysis = analyze_bars(&bars_from_closes(&[100.0, 105.0])).unwrap();

        assert_eq!(analysis.latest_price, 105.0);
        assert_eq!(analysis.previous_price, 100.0);
        assert_relative_eq!(analysis.change, 5.0);
        assert_relative_eq!(analysis.change_percent, 5.0);
        assert_eq!(analysis.direction(), Direction::Up);
        assert_eq!(analysis.as_of, day(1));
    }

    #[test]
    fn test_fall() {
        let analysis = analyze_bars(&bars_from_closes(&[100.0, 95.0])).unwrap();

        assert_relative_eq!(analysis.change, -5.0);
        assert_relative_eq!(analysis.change_percent, -5.0);
        assert_eq!(analysis.direction(), Direction::Down);
    }

    #[test]
    fn test_change_percent_is_exact() {
        let closes = [311.35, 298.7, 301.15];
        let analysis = analyze_bars(&bars_from_closes(&closes)).unwrap();

        assert_eq!(analysis.change, closes[2] - closes[1]);
        assert_eq!(
            analysis.change_percent,
            (closes[2] - closes[1]) / closes[1] * 100.0
        );
    }

    #[test]
    fn test_unchanged_close_is_up() {
        let analysis = analyze_bars(&bars_from_closes(&[10.0, 10.0])).unwrap();
        assert_eq!(analysis.change, 0.0);
        assert_eq!(analysis.direction(), Direction::Up);
    }

    #[test]
    fn test_high_low_cover_last_hundred_only() {
        // Sessions 1-50 carry extremes that must be ignored.
        let mut bars: Vec<DailyBar> = (0..150)
            .map(|i| DailyBar::new(day(i), 100.0, 110.0, 90.0, 100.0, 1_000))
            .collect();
        bars[10].high = 500.0;
        bars[20].low = 1.0;
        bars[49].high = 999.0;
        bars[50].low = 60.0;
        bars[120].high = 130.0;
        bars[140].low = 70.0;

        let analysis = analyze_bars(&bars).unwrap();

        assert_eq!(analysis.window, HIGH_LOW_WINDOW);
        assert_eq!(analysis.sessions, 150);
        assert_eq!(analysis.high, 130.0);
        assert_eq!(analysis.low, 60.0);
    }

    #[test]
    fn test_high_low_short_table_uses_all_rows() {
        let bars = bars_from_closes(&[10.0, 12.0, 8.0]);
        let analysis = analyze_bars(&bars).unwrap();

        assert_eq!(analysis.window, 3);
        assert_eq!(analysis.high, 13.0);
        assert_eq!(analysis.low, 7.0);
        assert!(analysis.low <= analysis.high);
    }

    #[test]
    fn test_direction_glyphs() {
        assert_eq!(Direction::of(1.0).glyph(), "▲");
        assert_eq!(Direction::of(-0.01).glyph(), "▼");
        assert_eq!(Direction::Up.sign(), '+');
        assert_eq!(Direction::Down.sign(), '-');
    }
}
