//! Core types for stockpeek.
//!
//! This crate provides the fundamental data structures used throughout stockpeek:
//!
//! - [`DailyBar`] - One trading session's open, high, low, close and volume
//! - [`PriceTable`] - Chronologically ordered, non-empty sequence of bars
//! - [`Ticker`] - Normalized ticker symbol
//! - [`DateRange`] - Calendar window used to request history
//! - [`Exchange`] - Exchange suffix metadata

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod date_range;
mod error;
mod exchange;
mod table;
mod ticker;

pub use bar::DailyBar;
pub use date_range::DateRange;
pub use error::{DateRangeError, TableError, TickerError};
pub use exchange::Exchange;
pub use table::PriceTable;
pub use ticker::Ticker;
