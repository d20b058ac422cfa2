//! Coin registry for the candela technical-analysis toolkit.
//!
//! The market data provider addresses coins by its own identifiers
//! (`bitcoin`, `ethereum`, ...) rather than by exchange tickers. This crate
//! embeds a table of well-known coins and resolves tickers to provider ids.
//!
//! # Example
//!
//! ```
//! use candela_instruments::CoinRegistry;
//!
//! let registry = CoinRegistry::global();
//!
//! assert_eq!(registry.provider_id("BTC"), "bitcoin");
//! // Unknown tickers fall back to their lowercase form.
//! assert_eq!(registry.provider_id("FOO"), "foo");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use candela_types::{Coin, Symbol};

/// The coin metadata JSON embedded at compile time.
const COINS_JSON: &str = include_str!("../data/coins.json");

/// Global coin registry instance.
static REGISTRY: OnceLock<CoinRegistry> = OnceLock::new();

/// Registry of coins known to the market data provider.
#[derive(Debug)]
pub struct CoinRegistry {
    coins: HashMap<String, Coin>,
}

impl CoinRegistry {
    /// Returns the global coin registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads coins from the embedded JSON data.
    fn load() -> Self {
        let coins: HashMap<String, Coin> =
            serde_json::from_str(COINS_JSON).expect("Invalid coins.json");
        Self { coins }
    }

    /// Looks up a coin by ticker (case-insensitive).
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&Coin> {
        self.coins.get(&ticker.to_lowercase())
    }

    /// Resolves a ticker to the provider coin id.
    ///
    /// Tickers missing from the registry are passed through lowercased.
    #[must_use]
    pub fn provider_id(&self, ticker: &str) -> Cow<'_, str> {
        self.get(ticker).map_or_else(
            || Cow::Owned(ticker.to_lowercase()),
            |coin| Cow::Borrowed(coin.provider_id()),
        )
    }

    /// Resolves the base asset of a trading pair to the provider coin id.
    #[must_use]
    pub fn provider_id_for(&self, symbol: &Symbol) -> Cow<'_, str> {
        self.provider_id(symbol.base())
    }

    /// Returns all coins as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &Coin> {
        self.coins.values()
    }

    /// Returns the total number of coins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Searches coins by ticker or name (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Coin> {
        let pattern = pattern.to_lowercase();
        let mut found: Vec<&Coin> = self
            .coins
            .values()
            .filter(|c| {
                c.ticker().to_lowercase().contains(&pattern)
                    || c.name().to_lowercase().contains(&pattern)
            })
            .collect();
        found.sort_by(|a, b| a.ticker().cmp(b.ticker()));
        found
    }

    /// Returns all coins sorted by ticker.
    pub fn sorted(&self) -> Vec<&Coin> {
        let mut coins: Vec<&Coin> = self.coins.values().collect();
        coins.sort_by(|a, b| a.ticker().cmp(b.ticker()));
        coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = CoinRegistry::global();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = CoinRegistry::global();
        assert!(registry.get("btc").is_some());
        assert!(registry.get("BTC").is_some());
        assert!(registry.get("Eth").is_some());
    }

    #[test]
    fn test_provider_id_known() {
        let registry = CoinRegistry::global();
        assert_eq!(registry.provider_id("ETH"), "ethereum");
        let symbol: Symbol = "sol/usdt".parse().unwrap();
        assert_eq!(registry.provider_id_for(&symbol), "solana");
    }

    #[test]
    fn test_provider_id_fallback() {
        let registry = CoinRegistry::global();
        assert_eq!(registry.provider_id("WIDGET"), "widget");
    }

    #[test]
    fn test_keys_match_tickers() {
        let registry = CoinRegistry::global();
        assert!(
            registry
                .all()
                .all(|c| registry.get(c.ticker()).map(Coin::ticker) == Some(c.ticker()))
        );
    }

    #[test]
    fn test_search() {
        let registry = CoinRegistry::global();
        let results = registry.search("bit");
        assert!(results.iter().any(|c| c.ticker() == "BTC"));
    }
}
