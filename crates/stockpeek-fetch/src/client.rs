//! HTTP client for the chart endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use stockpeek_types::{DateRange, PriceTable, Ticker};

use crate::response::{parse_chart, parse_error};
use crate::url::{BASE_URL, chart_url};
use crate::{BarProvider, FetchError};

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint base URL, without the symbol segment.
    pub base_url: String,
    /// User agent string. The endpoint rejects requests without a browser-like agent.
    pub user_agent: String,
    /// Overall request timeout. `None` leaves the request unbounded.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout. `None` leaves it to the OS.
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: format!(
                "Mozilla/5.0 (X11; Linux x86_64) stockpeek/{}",
                env!("CARGO_PKG_VERSION")
            ),
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// HTTP client that downloads daily bars from the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    config: ClientConfig,
}

impl YahooClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the raw chart payload for `ticker` over `window`.
    ///
    /// Returns `Ok(None)` if the endpoint answers 404, or answers another
    /// error status with a `Not Found` error object.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any other error status.
    pub async fn download(
        &self,
        ticker: &Ticker,
        window: DateRange,
    ) -> Result<Option<Vec<u8>>, FetchError> {
        let url = chart_url(&self.config.base_url, ticker, window);
        tracing::debug!(%url, "requesting daily bars");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            return match parse_error(&body) {
                Some(error) if error.is_not_found() => Ok(None),
                Some(error) => Err(error.into()),
                None => Err(FetchError::Status {
                    status: status.as_u16(),
                }),
            };
        }

        Ok(Some(body.to_vec()))
    }
}

#[async_trait]
impl BarProvider for YahooClient {
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        window: DateRange,
    ) -> Result<Option<PriceTable>, FetchError> {
        match self.download(ticker, window).await? {
            Some(body) => parse_chart(ticker, &body),
            None => Ok(None),
        }
    }
}
