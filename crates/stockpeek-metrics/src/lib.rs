//! Descriptive price statistics for stockpeek.
//!
//! This crate turns a price table into a snapshot:
//!
//! - [`analyze`] - Computes an [`Analysis`] or explains why it was skipped
//! - [`Report`] - Human-readable rendering of an analysis

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod report;

pub use analysis::{Analysis, AnalysisSkipped, Direction, HIGH_LOW_WINDOW, analyze, analyze_bars};
pub use report::{Report, format_money, format_signed_money};
