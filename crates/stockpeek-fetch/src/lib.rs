//! Daily history acquisition for stockpeek.
//!
//! This crate provides the acquisition step of the pipeline:
//!
//! - [`url::chart_url`] - Constructs chart endpoint URLs
//! - [`YahooClient`] - HTTP client for the chart endpoint
//! - [`parse_chart`] - Decodes and normalizes a chart payload
//! - [`BarProvider`] - Seam between the pipeline and a data source
//! - [`acquire`] - Classifies a fetch into [`Acquisition`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod provider;
mod response;
pub mod url;

pub use client::{ClientConfig, YahooClient};
pub use error::FetchError;
pub use provider::{Acquisition, BarProvider, acquire};
pub use response::parse_chart;
