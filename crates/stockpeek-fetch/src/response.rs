//! Chart payload decoding and normalization.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use stockpeek_types::{DailyBar, PriceTable, Ticker};

use crate::FetchError;

/// Provider error code meaning the symbol is unknown or has no history.
const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

impl ChartError {
    /// Returns true if the provider meant "no such symbol".
    pub(crate) fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case(NOT_FOUND_CODE)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    currency: Option<String>,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Decodes a chart payload into a price table.
///
/// Returns `Ok(None)` when the provider has no history for the ticker: a
/// `Not Found` error object, a missing or empty result, or a result whose
/// rows are all incomplete.
///
/// Rows with a null field or an inconsistent high/low envelope are dropped.
/// The remaining rows are sorted by date and, where a date repeats, the last
/// row wins.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the body is not a chart payload and
/// [`FetchError::Api`] if the provider reported any other error.
pub fn parse_chart(ticker: &Ticker, body: &[u8]) -> Result<Option<PriceTable>, FetchError> {
    let envelope: ChartEnvelope = serde_json::from_slice(body)?;

    if let Some(error) = envelope.chart.error {
        if error.is_not_found() {
            tracing::debug!(%ticker, description = %error.description, "provider reports no data");
            return Ok(None);
        }
        return Err(error.into());
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(None);
    };

    let currency = result.meta.currency.clone();
    let bars = normalize(ticker, result);
    if bars.is_empty() {
        return Ok(None);
    }

    Ok(Some(PriceTable::new(ticker.clone(), currency, bars)?))
}

/// Decodes only the error object of a payload, if there is one.
pub(crate) fn parse_error(body: &[u8]) -> Option<ChartError> {
    serde_json::from_slice::<ChartEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.chart.error)
}

impl From<ChartError> for FetchError {
    fn from(error: ChartError) -> Self {
        Self::Api {
            code: error.code,
            description: error.description,
        }
    }
}

fn normalize(ticker: &Ticker, result: ChartResult) -> Vec<DailyBar> {
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let offset = result.meta.gmtoffset;
    let total = result.timestamp.len();

    let mut bars: Vec<DailyBar> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            Some(DailyBar::new(
                session_date(*ts, offset)?,
                value_at(&quote.open, i)?,
                value_at(&quote.high, i)?,
                value_at(&quote.low, i)?,
                value_at(&quote.close, i)?,
                volume(value_at(&quote.volume, i)?)?,
            ))
        })
        .collect();

    let complete = bars.len();
    bars.retain(DailyBar::is_consistent);

    if complete < total {
        tracing::warn!(%ticker, dropped = total - complete, "dropped incomplete rows");
    }
    if bars.len() < complete {
        tracing::warn!(%ticker, dropped = complete - bars.len(), "dropped rows with inconsistent high/low");
    }

    bars.sort_by_key(|bar| bar.date);
    let mut rows: Vec<DailyBar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match rows.last_mut() {
            Some(last) if last.date == bar.date => *last = bar,
            _ => rows.push(bar),
        }
    }
    rows
}

fn value_at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

/// Converts a session timestamp to the exchange-local trading date.
fn session_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp.checked_add(gmtoffset)?, 0).map(|dt| dt.date_naive())
}

fn volume(raw: f64) -> Option<u64> {
    (raw.is_finite() && raw >= 0.0).then(|| raw.round() as u64)
}
