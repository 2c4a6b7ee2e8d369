//! Provider abstraction and acquisition outcome.
//!
//! [`BarProvider`] is the seam between the pipeline and a market-data
//! source. [`acquire`] runs one provider call and folds every possible
//! outcome into an [`Acquisition`], so callers never see a provider failure
//! as anything but a value.

use async_trait::async_trait;
use stockpeek_types::{DateRange, PriceTable, Ticker};

use crate::FetchError;

/// A source of daily bars.
#[async_trait]
pub trait BarProvider: Send + Sync {
    /// Fetches daily bars for `ticker` over `window`.
    ///
    /// Returns `Ok(None)` when the source has no data for the ticker.
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        window: DateRange,
    ) -> Result<Option<PriceTable>, FetchError>;
}

/// Outcome of acquiring history for one ticker.
#[derive(Debug)]
pub enum Acquisition {
    /// The provider returned at least one session.
    Success(PriceTable),
    /// The provider has no data for the ticker.
    NotFound,
    /// The call failed; the cause is kept for display.
    TransientError(FetchError),
}

impl Acquisition {
    /// Returns the table on success.
    #[must_use]
    pub const fn table(&self) -> Option<&PriceTable> {
        match self {
            Self::Success(table) => Some(table),
            _ => None,
        }
    }
}

impl From<Result<Option<PriceTable>, FetchError>> for Acquisition {
    fn from(result: Result<Option<PriceTable>, FetchError>) -> Self {
        match result {
            Ok(Some(table)) => Self::Success(table),
            Ok(None) => Self::NotFound,
            Err(error) => Self::TransientError(error),
        }
    }
}

/// Requests `window` of daily bars for `ticker` and classifies the result.
pub async fn acquire<P>(provider: &P, ticker: &Ticker, window: DateRange) -> Acquisition
where
    P: BarProvider + ?Sized,
{
    tracing::info!(%ticker, %window, "acquiring daily bars");
    let acquisition = Acquisition::from(provider.daily_bars(ticker, window).await);

    match &acquisition {
        Acquisition::Success(table) => {
            tracing::info!(%ticker, rows = table.len(), "acquired daily bars");
        }
        Acquisition::NotFound => tracing::info!(%ticker, "no data for ticker"),
        Acquisition::TransientError(error) => {
            tracing::warn!(%ticker, %error, "acquisition failed");
        }
    }

    acquisition
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockpeek_types::DailyBar;

    enum FakeProvider {
        Rows(usize),
        Empty,
        Failing,
    }

    #[async_trait]
    impl BarProvider for FakeProvider {
        async fn daily_bars(
            &self,
            ticker: &Ticker,
            window: DateRange,
        ) -> Result<Option<PriceTable>, FetchError> {
            match self {
                Self::Rows(n) => {
                    let bars = window
                        .start
                        .iter_days()
                        .take(*n)
                        .map(|d| DailyBar::new(d, 10.0, 11.0, 9.0, 10.5, 100))
                        .collect();
                    Ok(Some(PriceTable::new(ticker.clone(), Some("USD".into()), bars)?))
                }
                Self::Empty => Ok(None),
                Self::Failing => Err(FetchError::Status { status: 503 }),
            }
        }
    }

    fn window() -> DateRange {
        DateRange::trailing_year(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
    }

    fn ticker() -> Ticker {
        Ticker::parse("aapl").unwrap()
    }

    #[tokio::test]
    async fn test_acquire_success() {
        let acquisition = acquire(&FakeProvider::Rows(5), &ticker(), window()).await;
        assert!(matches!(acquisition, Acquisition::Success(_)));
        assert_eq!(acquisition.table().map(PriceTable::len), Some(5));
    }

    #[tokio::test]
    async fn test_acquire_not_found() {
        let acquisition = acquire(&FakeProvider::Empty, &ticker(), window()).await;
        assert!(matches!(acquisition, Acquisition::NotFound));
        assert!(acquisition.table().is_none());
    }

    #[tokio::test]
    async fn test_acquire_transient_error_keeps_cause() {
        let acquisition = acquire(&FakeProvider::Failing, &ticker(), window()).await;
        match acquisition {
            Acquisition::TransientError(error) => {
                assert_eq!(error.to_string(), "Server error: 503");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_acquire_through_trait_object() {
        let provider: Box<dyn BarProvider> = Box::new(FakeProvider::Rows(1));
        let acquisition = acquire(provider.as_ref(), &ticker(), window()).await;
        assert_eq!(acquisition.table().map(PriceTable::len), Some(1));
    }

    #[test]
    fn test_empty_table_error_is_transient() {
        let acquisition = Acquisition::from(Err(FetchError::from(
            stockpeek_types::TableError::Empty,
        )));
        assert!(matches!(acquisition, Acquisition::TransientError(FetchError::Table(_))));
    }
}
