//! CoinGecko URL construction.

use candela_instruments::CoinRegistry;
use candela_types::{Symbol, Timeframe};

/// Base URL of the CoinGecko public API.
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Builds the OHLC URL for a provider coin id.
///
/// URL format: `{BASE_URL}/coins/{COIN_ID}/ohlc?vs_currency={QUOTE}&days={DAYS}`
///
/// # Example
///
/// ```
/// use candela_fetch::url::ohlc_url;
///
/// let url = ohlc_url("bitcoin", "usdt", 30);
/// assert_eq!(url, "https://api.coingecko.com/api/v3/coins/bitcoin/ohlc?vs_currency=usdt&days=30");
/// ```
#[must_use]
pub fn ohlc_url(coin_id: &str, quote: &str, days: u32) -> String {
    format!(
        "{}/coins/{}/ohlc?vs_currency={}&days={}",
        BASE_URL,
        coin_id,
        quote.to_lowercase(),
        days
    )
}

/// Builds the OHLC URL for a symbol and timeframe.
///
/// The coin id comes from the instrument registry, falling back to the
/// lowercased base ticker. The timeframe selects the number of days.
#[must_use]
pub fn symbol_url(symbol: &Symbol, timeframe: Timeframe) -> String {
    let coin_id = CoinRegistry::global().provider_id_for(symbol);
    ohlc_url(&coin_id, symbol.quote(), timeframe.days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_url_known_coin() {
        let symbol: Symbol = "BTC/USDT".parse().unwrap();
        assert_eq!(
            symbol_url(&symbol, Timeframe::Day1),
            "https://api.coingecko.com/api/v3/coins/bitcoin/ohlc?vs_currency=usdt&days=30"
        );
    }

    #[test]
    fn test_symbol_url_days_per_timeframe() {
        let symbol: Symbol = "ETH/USD".parse().unwrap();
        assert!(symbol_url(&symbol, Timeframe::Minute15).ends_with("days=1"));
        assert!(symbol_url(&symbol, Timeframe::Hour1).ends_with("days=1"));
        assert!(symbol_url(&symbol, Timeframe::Hour4).ends_with("days=7"));
        assert!(symbol_url(&symbol, Timeframe::Day1).ends_with("days=30"));
    }

    #[test]
    fn test_symbol_url_unknown_coin_falls_back() {
        let symbol: Symbol = "ZZZQ/EUR".parse().unwrap();
        assert_eq!(
            symbol_url(&symbol, Timeframe::Hour4),
            "https://api.coingecko.com/api/v3/coins/zzzq/ohlc?vs_currency=eur&days=7"
        );
    }
}
