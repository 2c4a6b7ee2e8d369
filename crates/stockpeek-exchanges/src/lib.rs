//! Exchange registry for stockpeek.
//!
//! This crate maps ticker suffixes to the venue they denote and the
//! currency that venue quotes in, and maps currency codes to the symbol
//! printed in front of monetary values.
//!
//! # Example
//!
//! ```
//! use stockpeek_exchanges::ExchangeRegistry;
//! use stockpeek_types::Ticker;
//!
//! let registry = ExchangeRegistry::global();
//! let ticker = Ticker::parse("reliance.ns").unwrap();
//!
//! assert_eq!(registry.currency_prefix(None, &ticker), "₹");
//! assert_eq!(registry.currency_prefix(Some("USD"), &ticker), "$");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockpeek/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use stockpeek_types::{Exchange, Ticker};

/// The exchange metadata JSON embedded at compile time.
const EXCHANGES_JSON: &str = include_str!("../data/exchanges.json");

/// Prefix used when neither the provider nor the suffix identify a currency.
const FALLBACK_PREFIX: &str = "$";

/// Global exchange registry instance.
static REGISTRY: OnceLock<ExchangeRegistry> = OnceLock::new();

#[derive(Deserialize)]
struct RegistryData {
    exchanges: Vec<Exchange>,
    currencies: HashMap<String, String>,
}

/// Registry of known exchange suffixes and currency symbols.
#[derive(Debug)]
pub struct ExchangeRegistry {
    exchanges: HashMap<String, Exchange>,
    currencies: HashMap<String, String>,
}

impl ExchangeRegistry {
    /// Returns the global exchange registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads exchanges from the embedded JSON data.
    fn load() -> Self {
        let data: RegistryData =
            serde_json::from_str(EXCHANGES_JSON).expect("Invalid exchanges.json");
        let exchanges = data
            .exchanges
            .into_iter()
            .map(|e| (e.suffix().to_uppercase(), e))
            .collect();
        Self {
            exchanges,
            currencies: data.currencies,
        }
    }

    /// Looks up an exchange by suffix (case-insensitive, leading dot optional).
    #[must_use]
    pub fn get(&self, suffix: &str) -> Option<&Exchange> {
        let key = suffix.trim_start_matches('.').to_uppercase();
        self.exchanges.get(&key)
    }

    /// Returns the exchange implied by a ticker's suffix.
    ///
    /// Tickers without a suffix resolve to the US listing entry. Suffixes that
    /// are not exchange codes (share classes such as `BRK.B`) fall back to it too.
    #[must_use]
    pub fn for_ticker(&self, ticker: &Ticker) -> Option<&Exchange> {
        ticker
            .suffix()
            .and_then(|suffix| self.get(suffix))
            .or_else(|| self.get(""))
    }

    /// Returns the display symbol for an ISO currency code.
    ///
    /// Codes are matched exactly first so that pence (`GBp`) stays distinct
    /// from pounds (`GBP`).
    #[must_use]
    pub fn currency_symbol(&self, code: &str) -> Option<&str> {
        self.currencies
            .get(code)
            .or_else(|| self.currencies.get(&code.to_uppercase()))
            .map(String::as_str)
    }

    /// Resolves the prefix printed before monetary values.
    ///
    /// Preference order: the provider-reported currency, the currency of the
    /// ticker's exchange, then a dollar sign. Unknown codes are printed as the
    /// code followed by a space.
    #[must_use]
    pub fn currency_prefix(&self, currency: Option<&str>, ticker: &Ticker) -> String {
        let code = currency
            .filter(|c| !c.trim().is_empty())
            .or_else(|| self.for_ticker(ticker).map(Exchange::currency));

        match code {
            Some(code) => self
                .currency_symbol(code)
                .map_or_else(|| format!("{code} "), str::to_string),
            None => FALLBACK_PREFIX.to_string(),
        }
    }

    /// Returns all exchanges sorted by suffix.
    pub fn all(&self) -> Vec<&Exchange> {
        let mut exchanges: Vec<&Exchange> = self.exchanges.values().collect();
        exchanges.sort_by(|a, b| a.suffix().cmp(b.suffix()));
        exchanges
    }

    /// Returns example tickers, one per exchange, for user guidance.
    pub fn examples(&self) -> Vec<&str> {
        self.all().into_iter().map(Exchange::example).collect()
    }

    /// Returns the total number of exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[test]
    fn test_registry_loads() {
        let registry = ExchangeRegistry::global();
        assert!(!registry.is_empty());
        assert_eq!(registry.examples().len(), registry.len());
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = ExchangeRegistry::global();
        assert_eq!(registry.get("ns").map(Exchange::currency), Some("INR"));
        assert_eq!(registry.get(".NS").map(Exchange::currency), Some("INR"));
        assert!(registry.get("XX").is_none());
    }

    #[test]
    fn test_for_ticker() {
        let registry = ExchangeRegistry::global();
        assert_eq!(
            registry.for_ticker(&ticker("tcs.bo")).map(Exchange::suffix),
            Some("BO")
        );
        assert_eq!(
            registry.for_ticker(&ticker("aapl")).map(Exchange::currency),
            Some("USD")
        );
        assert_eq!(
            registry.for_ticker(&ticker("brk.b")).map(Exchange::currency),
            Some("USD")
        );
    }

    #[test]
    fn test_currency_prefix_prefers_provider_currency() {
        let registry = ExchangeRegistry::global();
        assert_eq!(registry.currency_prefix(Some("EUR"), &ticker("infy.ns")), "€");
    }

    #[test]
    fn test_currency_prefix_falls_back_to_exchange() {
        let registry = ExchangeRegistry::global();
        assert_eq!(registry.currency_prefix(None, &ticker("infy.ns")), "₹");
        assert_eq!(registry.currency_prefix(Some(""), &ticker("hsba.l")), "£");
    }

    #[test]
    fn test_currency_prefix_unknown_code() {
        let registry = ExchangeRegistry::global();
        assert_eq!(registry.currency_prefix(Some("ZAR"), &ticker("npn.jo")), "ZAR ");
    }

    #[test]
    fn test_currency_symbol_pence_distinct() {
        let registry = ExchangeRegistry::global();
        assert_eq!(registry.currency_symbol("GBP"), Some("£"));
        assert_eq!(registry.currency_symbol("GBp"), Some("GBp "));
        assert_eq!(registry.currency_symbol("inr"), Some("₹"));
    }
}
