//! Ticker symbol normalization.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::TickerError;

/// A trimmed, upper-cased, non-empty ticker symbol such as `RELIANCE.NS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalizes raw user input into a ticker.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Empty`] if the input is blank.
    pub fn parse(input: &str) -> Result<Self, TickerError> {
        let symbol = input.trim();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        Ok(Self(symbol.to_uppercase()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the exchange suffix (the part after the last `.`), if any.
    ///
    /// ```
    /// use stockpeek_types::Ticker;
    ///
    /// assert_eq!(Ticker::parse("infy.ns").unwrap().suffix(), Some("NS"));
    /// assert_eq!(Ticker::parse("AAPL").unwrap().suffix(), None);
    /// ```
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.0
            .rsplit_once('.')
            .map(|(_, suffix)| suffix)
            .filter(|suffix| !suffix.is_empty())
    }
}

impl std::str::FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let ticker = Ticker::parse("  reliance.ns \n").unwrap();
        assert_eq!(ticker.as_str(), "RELIANCE.NS");
        assert_eq!(ticker.to_string(), "RELIANCE.NS");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Ticker::parse(""), Err(TickerError::Empty));
        assert_eq!(Ticker::parse("   \t"), Err(TickerError::Empty));
    }

    #[test]
    fn test_suffix() {
        assert_eq!(Ticker::parse("500325.bo").unwrap().suffix(), Some("BO"));
        assert_eq!(Ticker::parse("BRK.B").unwrap().suffix(), Some("B"));
        assert_eq!(Ticker::parse("MSFT").unwrap().suffix(), None);
        assert_eq!(Ticker::parse("ODD.").unwrap().suffix(), None);
    }

    #[test]
    fn test_from_str() {
        let ticker: Ticker = "^nsei".parse().unwrap();
        assert_eq!(ticker.as_str(), "^NSEI");
    }

    #[test]
    fn test_serde_transparent() {
        let ticker = Ticker::parse("tcs.ns").unwrap();
        assert_eq!(serde_json::to_string(&ticker).unwrap(), "\"TCS.NS\"");
    }
}
