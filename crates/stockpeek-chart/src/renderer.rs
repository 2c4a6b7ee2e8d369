//! Two-panel price and volume figure.

use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::themes::PLOTLY_DARK;
use plotly::layout::{Axis, Layout, RangeSlider};
use plotly::{Bar, Plot, Scatter};
use stockpeek_types::{DailyBar, Ticker};

use crate::ChartSurface;

/// Number of most recent sessions callers are expected to pass in.
pub const DISPLAY_SESSIONS: usize = 100;

/// Panel proportions and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Share of the plotting height given to the price panel.
    pub price_share: f64,
    /// Vertical gap between the panels, as a fraction of the figure.
    pub panel_gap: f64,
    /// Figure height in pixels.
    pub height: usize,
    /// Price line color.
    pub line_color: String,
    /// Volume bar color.
    pub bar_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            price_share: 0.7,
            panel_gap: 0.05,
            height: 720,
            line_color: "#00cc96".to_string(),
            bar_color: "#636efa".to_string(),
        }
    }
}

impl ChartStyle {
    /// Returns the vertical domains `(price, volume)` of the two panels.
    ///
    /// The gap is taken out first and the remainder split by `price_share`,
    /// with the price panel on top.
    #[must_use]
    pub fn domains(&self) -> ([f64; 2], [f64; 2]) {
        let usable = 1.0 - self.panel_gap;
        let volume_top = usable * (1.0 - self.price_share);
        ([volume_top + self.panel_gap, 1.0], [0.0, volume_top])
    }
}

/// Builds and presents the price/volume figure.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    /// Creates a renderer with the given style.
    #[must_use]
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Returns the renderer's style.
    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Builds the figure for `bars`, or `None` if there are no bars.
    ///
    /// `currency` prefixes the price axis tick labels.
    #[must_use]
    pub fn figure(&self, bars: &[DailyBar], ticker: &Ticker, currency: &str) -> Option<Plot> {
        if bars.is_empty() {
            return None;
        }

        let dates: Vec<String> = bars.iter().map(|b| b.date.to_string()).collect();
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<u64> = bars.iter().map(|b| b.volume).collect();

        let price = Scatter::new(dates.clone(), closes)
            .name("Close")
            .mode(Mode::Lines)
            .line(Line::new().color(self.style.line_color.clone()).width(2.0))
            .x_axis("x")
            .y_axis("y");

        let volume = Bar::new(dates, volumes)
            .name("Volume")
            .marker(Marker::new().color(self.style.bar_color.clone()))
            .x_axis("x")
            .y_axis("y2");

        let (price_domain, volume_domain) = self.style.domains();
        let title = format!("{ticker}: last {} sessions", bars.len());
        let price_title = format!("{ticker} Price ({})", currency.trim());
        let volume_title = format!("{ticker} Volume");

        let layout = Layout::new()
            .title(Title::from(title.as_str()))
            .template(&*PLOTLY_DARK)
            .show_legend(false)
            .height(self.style.height)
            .x_axis(
                Axis::new()
                    .anchor("y2")
                    .range_slider(RangeSlider::new().visible(false)),
            )
            .y_axis(
                Axis::new()
                    .domain(&price_domain)
                    .anchor("x")
                    .title(Title::from(price_title.as_str()))
                    .tick_prefix(currency),
            )
            .y_axis2(
                Axis::new()
                    .domain(&volume_domain)
                    .anchor("x")
                    .title(Title::from(volume_title.as_str())),
            );

        let mut plot = Plot::new();
        plot.add_trace(price);
        plot.add_trace(volume);
        plot.set_layout(layout);
        Some(plot)
    }

    /// Builds the figure and presents it on `surface`.
    ///
    /// Returns false, without touching the surface, if `bars` is empty.
    pub fn render<S>(
        &self,
        bars: &[DailyBar],
        ticker: &Ticker,
        currency: &str,
        surface: &mut S,
    ) -> bool
    where
        S: ChartSurface + ?Sized,
    {
        let Some(plot) = self.figure(bars, ticker, currency) else {
            tracing::debug!(%ticker, "nothing to chart");
            return false;
        };
        tracing::debug!(%ticker, sessions = bars.len(), "presenting chart");
        surface.present(&plot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlSurface;
    use approx::assert_relative_eq;
    use chrono::{Days, NaiveDate};
    use serde_json::Value;

    fn bars(n: usize) -> Vec<DailyBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let px = 200.0 + i as f64;
                let date = start + Days::new(i as u64);
                DailyBar::new(date, px, px + 3.0, px - 3.0, px + 1.0, 5_000 + i as u64)
            })
            .collect()
    }

    fn ticker() -> Ticker {
        Ticker::parse("hdfcbank.ns").unwrap()
    }

    fn figure_json(n: usize) -> Value {
        let plot = ChartRenderer::default()
            .figure(&bars(n), &ticker(), "₹")
            .unwrap();
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_default_domains_split_seventy_thirty() {
        let (price, volume) = ChartStyle::default().domains();
        let price_height = price[1] - price[0];
        let volume_height = volume[1] - volume[0];

        assert_relative_eq!(price[1], 1.0);
        assert_relative_eq!(volume[0], 0.0);
        assert!(volume[1] < price[0]);
        assert_relative_eq!(price_height / (price_height + volume_height), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_figure_traces() {
        let json = figure_json(3);
        let data = json["data"].as_array().unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "scatter");
        assert_eq!(data[0]["mode"], "lines");
        assert_eq!(data[0]["x"][0], "2024-01-01");
        assert_eq!(data[0]["y"][2], 203.0);
        assert_eq!(data[1]["type"], "bar");
        assert_eq!(data[1]["yaxis"], "y2");
        assert_eq!(data[1]["y"][1], 5_001);
    }

    #[test]
    fn test_figure_layout() {
        let json = figure_json(3);
        let layout = &json["layout"];

        assert_eq!(layout["showlegend"], false);
        assert_eq!(layout["xaxis"]["rangeslider"]["visible"], false);
        assert_eq!(layout["yaxis"]["tickprefix"], "₹");
        assert_eq!(layout["template"]["layout"]["paper_bgcolor"], "rgb(17,17,17)");
        assert!(layout["title"]["text"].as_str().unwrap().contains("HDFCBANK.NS"));
        assert!(layout["yaxis"]["title"]["text"].as_str().unwrap().contains("HDFCBANK.NS"));
        assert!(layout["yaxis2"]["title"]["text"].as_str().unwrap().contains("HDFCBANK.NS"));
    }

    #[test]
    fn test_empty_bars_is_noop() {
        let mut surface = HtmlSurface::new();
        let rendered = ChartRenderer::default().render(&[], &ticker(), "₹", &mut surface);

        assert!(!rendered);
        assert!(surface.pages().is_empty());
    }

    #[test]
    fn test_render_presents_once() {
        let mut surface = HtmlSurface::new();
        let rendered =
            ChartRenderer::default().render(&bars(DISPLAY_SESSIONS), &ticker(), "₹", &mut surface);

        assert!(rendered);
        assert_eq!(surface.pages().len(), 1);
        assert!(surface.last().unwrap().contains("HDFCBANK.NS"));
    }
}
