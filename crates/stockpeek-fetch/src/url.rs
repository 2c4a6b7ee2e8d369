//! Chart endpoint URL construction.

use stockpeek_types::{DateRange, Ticker};

/// Base URL for the Yahoo Finance v8 chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Bar interval requested from the provider.
pub const DAILY_INTERVAL: &str = "1d";

/// Builds the URL for a ticker's daily bars over `window`.
///
/// URL format: `{base}/{SYMBOL}?period1={start}&period2={end}&interval=1d&includePrePost=false`
///
/// Characters that are not valid in a path segment (`^` for indices, `=` for
/// futures) are percent-encoded.
///
/// # Example
///
/// ```
/// use stockpeek_fetch::url::{BASE_URL, chart_url};
/// use stockpeek_types::{DateRange, Ticker};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let window = DateRange::new(day, day).unwrap();
/// let url = chart_url(BASE_URL, &Ticker::parse("tcs.ns").unwrap(), window);
/// assert_eq!(
///     url,
///     "https://query1.finance.yahoo.com/v8/finance/chart/TCS.NS?period1=1704067200&period2=1704153600&interval=1d&includePrePost=false"
/// );
/// ```
#[must_use]
pub fn chart_url(base: &str, ticker: &Ticker, window: DateRange) -> String {
    format!(
        "{}/{}?period1={}&period2={}&interval={}&includePrePost=false",
        base.trim_end_matches('/'),
        encode_symbol(ticker.as_str()),
        window.start_timestamp(),
        window.end_timestamp(),
        DAILY_INTERVAL,
    )
}

fn encode_symbol(symbol: &str) -> String {
    let mut encoded = String::with_capacity(symbol.len());
    for c in symbol.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '-' | '_' => encoded.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    encoded
}
