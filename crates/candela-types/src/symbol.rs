//! Trading pair symbols.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A `BASE/QUOTE` trading pair such as `BTC/USDT`.
///
/// Both parts are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    base: String,
    quote: String,
}

impl Symbol {
    /// Creates a symbol from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty or not alphanumeric.
    pub fn new(base: &str, quote: &str) -> Result<Self, SymbolParseError> {
        let base = validate_part(base)?;
        let quote = validate_part(quote)?;
        Ok(Self { base, quote })
    }

    /// Returns the base asset ticker (e.g., "BTC").
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the quote currency ticker (e.g., "USDT").
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.quote
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self {
            base: "BTC".to_string(),
            quote: "USDT".to_string(),
        }
    }
}

fn validate_part(part: &str) -> Result<String, SymbolParseError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(SymbolParseError::EmptyPart);
    }
    if !part.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SymbolParseError::InvalidCharacters(part.to_string()));
    }
    Ok(part.to_uppercase())
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| SymbolParseError::MissingSeparator(s.to_string()))?;
        Self::new(base, quote)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

/// Error returned when parsing an invalid symbol string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolParseError {
    /// The string has no `/` separator.
    #[error("invalid symbol '{0}', expected BASE/QUOTE (e.g. BTC/USDT)")]
    MissingSeparator(String),

    /// One side of the pair is empty.
    #[error("symbol parts must not be empty")]
    EmptyPart,

    /// A part contains characters other than ASCII letters and digits.
    #[error("invalid characters in symbol part '{0}'")]
    InvalidCharacters(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol() {
        let symbol: Symbol = "btc/usdt".parse().unwrap();
        assert_eq!(symbol.base(), "BTC");
        assert_eq!(symbol.quote(), "USDT");
        assert_eq!(symbol.to_string(), "BTC/USDT");
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            "BTCUSDT".parse::<Symbol>(),
            Err(SymbolParseError::MissingSeparator("BTCUSDT".to_string()))
        );
    }

    #[test]
    fn test_empty_part() {
        assert_eq!("BTC/".parse::<Symbol>(), Err(SymbolParseError::EmptyPart));
        assert_eq!("/USD".parse::<Symbol>(), Err(SymbolParseError::EmptyPart));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            "BT-C/USD".parse::<Symbol>(),
            Err(SymbolParseError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let symbol: Symbol = serde_json::from_str("\"eth/usd\"").unwrap();
        assert_eq!(symbol.base(), "ETH");
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"ETH/USD\"");
    }
}
