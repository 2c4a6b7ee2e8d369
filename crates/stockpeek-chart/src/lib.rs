//! Interactive charting for stockpeek.
//!
//! This crate renders recent sessions as a two-panel figure:
//!
//! - [`ChartRenderer`] - Builds the price/volume figure
//! - [`ChartStyle`] - Panel proportions and colors
//! - [`ChartSurface`] - Where a finished figure is shown
//! - [`BrowserSurface`] - Opens the figure in the default browser
//! - [`HtmlSurface`] - Keeps the figure as standalone HTML in memory

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod renderer;
mod surface;

pub use renderer::{ChartRenderer, ChartStyle, DISPLAY_SESSIONS};
pub use surface::{BrowserSurface, ChartSurface, HtmlSurface};
