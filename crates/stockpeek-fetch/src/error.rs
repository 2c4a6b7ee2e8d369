//! Fetch failures.

use stockpeek_types::TableError;
use thiserror::Error;

/// Errors that can occur while acquiring daily history.
///
/// Every variant is a transient or unexpected failure; "no such ticker" is
/// not an error and is reported as `Ok(None)` by providers.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The provider reported an error of its own.
    #[error("Provider error {code}: {description}")]
    Api {
        /// Provider error code.
        code: String,
        /// Provider error description.
        description: String,
    },

    /// The decoded rows do not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}
