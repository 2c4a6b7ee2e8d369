//! Exchange suffix metadata.

use serde::{Deserialize, Serialize};

/// A listing venue identified by its ticker suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Ticker suffix without the dot (e.g., "NS"). Empty for US listings.
    suffix: String,
    /// Human-readable name (e.g., "National Stock Exchange of India").
    name: String,
    /// ISO 4217 code prices are quoted in.
    currency: String,
    /// A representative ticker on this venue.
    example: String,
}

impl Exchange {
    /// Creates a new exchange.
    #[must_use]
    pub fn new(
        suffix: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            name: name.into(),
            currency: currency.into(),
            example: example.into(),
        }
    }

    /// Returns the ticker suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quote currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns an example ticker.
    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.suffix.is_empty() {
            write!(f, "{} (no suffix)", self.name)
        } else {
            write!(f, "{} (.{})", self.name, self.suffix)
        }
    }
}
