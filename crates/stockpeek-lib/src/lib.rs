//! Single-ticker equity snapshot.
//!
//! This is a facade crate that re-exports functionality from the stockpeek
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockpeek_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ticker = Ticker::parse("reliance.ns")?;
//!     let client = YahooClient::with_defaults()?;
//!     let today = chrono::Utc::now().date_naive();
//!
//!     if let Acquisition::Success(table) =
//!         acquire(&client, &ticker, DateRange::trailing_year(today)).await
//!     {
//!         let currency = ExchangeRegistry::global().currency_prefix(table.currency(), &ticker);
//!         let analysis = analyze(Some(&table))?;
//!         println!("{}", Report::new(&analysis, &ticker, &currency));
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use stockpeek_types::*;

// Re-export exchange registry
pub use stockpeek_exchanges::ExchangeRegistry;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use stockpeek_fetch::{
    Acquisition, BarProvider, ClientConfig, FetchError, YahooClient, acquire, parse_chart, url,
};

// Re-export statistics
#[cfg(feature = "metrics")]
pub use stockpeek_metrics::{
    Analysis, AnalysisSkipped, Direction, HIGH_LOW_WINDOW, Report, analyze, analyze_bars,
    format_money, format_signed_money,
};

// Re-export charting
#[cfg(feature = "chart")]
pub use stockpeek_chart::{
    BrowserSurface, ChartRenderer, ChartStyle, ChartSurface, DISPLAY_SESSIONS, HtmlSurface,
};

/// Prelude module for convenient imports.
///
/// ```
/// use stockpeek_lib::prelude::*;
/// ```
pub mod prelude {
    pub use stockpeek_types::{DailyBar, DateRange, PriceTable, TableError, Ticker, TickerError};

    pub use stockpeek_exchanges::ExchangeRegistry;

    #[cfg(feature = "fetch")]
    pub use stockpeek_fetch::{Acquisition, BarProvider, FetchError, YahooClient, acquire};

    #[cfg(feature = "metrics")]
    pub use stockpeek_metrics::{Analysis, AnalysisSkipped, Report, analyze};

    #[cfg(feature = "chart")]
    pub use stockpeek_chart::{BrowserSurface, ChartRenderer, ChartSurface, DISPLAY_SESSIONS};
}
