//! Display surfaces for finished figures.

use plotly::Plot;

/// Trait for destinations that display a finished figure.
pub trait ChartSurface {
    /// Presents the figure. This is the last step of a run.
    fn present(&mut self, plot: &Plot);
}

/// Opens figures in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSurface;

impl BrowserSurface {
    /// Creates a browser surface.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChartSurface for BrowserSurface {
    fn present(&mut self, plot: &Plot) {
        tracing::debug!("opening chart in browser");
        plot.show();
    }
}

/// Keeps each presented figure as a standalone HTML page in memory.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    pages: Vec<String>,
}

impl HtmlSurface {
    /// Creates an empty surface.
    #[must_use]
    pub const fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Returns the pages presented so far.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Returns the most recently presented page.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.pages.last().map(String::as_str)
    }
}

impl ChartSurface for HtmlSurface {
    fn present(&mut self, plot: &Plot) {
        self.pages.push(plot.to_html());
    }
}
