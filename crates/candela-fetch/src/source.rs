//! Candle providers.

use async_trait::async_trait;
use candela_types::{CandelaError, Candle, Result, Symbol, Timeframe};
use std::collections::HashMap;

use crate::{DownloadError, MarketClient, ParseError, parse_candles, url::symbol_url};

/// A provider of raw candles for a symbol and timeframe.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetches the raw candles covering `timeframe`'s history window, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached, answers with a
    /// non-success status, or sends a malformed payload.
    async fn fetch_candles(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<Vec<Candle>>;
}

/// CoinGecko OHLC endpoint.
#[derive(Debug, Clone)]
pub struct CoinGecko {
    client: MarketClient,
}

impl CoinGecko {
    /// Creates a source over an existing client.
    #[must_use]
    pub const fn new(client: MarketClient) -> Self {
        Self { client }
    }

    /// Creates a source with a default client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        let client = MarketClient::with_defaults().map_err(DownloadError::from)?;
        Ok(Self::new(client))
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &MarketClient {
        &self.client
    }
}

#[async_trait]
impl CandleSource for CoinGecko {
    async fn fetch_candles(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<Vec<Candle>> {
        let url = symbol_url(symbol, timeframe);
        let body = self.client.get(&url).await?;
        let candles = parse_candles(&body)?;
        tracing::debug!(
            symbol = %symbol,
            timeframe = %timeframe,
            candles = candles.len(),
            "fetched candles"
        );
        Ok(candles)
    }
}

/// In-memory candles keyed by symbol and timeframe.
///
/// Unknown keys yield an empty candle list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candles: HashMap<(Symbol, Timeframe), Vec<Candle>>,
}

impl StaticSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds candles for a symbol and timeframe, replacing any previous set.
    #[must_use]
    pub fn with_candles(mut self, symbol: Symbol, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.candles.insert((symbol, timeframe), candles);
        self
    }
}

#[async_trait]
impl CandleSource for StaticSource {
    async fn fetch_candles(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<Vec<Candle>> {
        Ok(self
            .candles
            .get(&(symbol.clone(), timeframe))
            .cloned()
            .unwrap_or_default())
    }
}

impl From<DownloadError> for CandelaError {
    fn from(error: DownloadError) -> Self {
        match error {
            DownloadError::Status { status } => Self::Status { status },
            DownloadError::Http(e) => Self::Http(e.to_string()),
        }
    }
}

impl From<ParseError> for CandelaError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(ms: i64, close: f64) -> Candle {
        Candle::from_millis(ms, close, close, close, close).unwrap()
    }

    #[tokio::test]
    async fn test_static_source() {
        let symbol: Symbol = "BTC/USDT".parse().unwrap();
        let source = StaticSource::new().with_candles(
            symbol.clone(),
            Timeframe::Hour1,
            vec![candle(0, 1.0), candle(3_600_000, 2.0)],
        );

        let candles = source.fetch_candles(&symbol, Timeframe::Hour1).await.unwrap();
        assert_eq!(candles.len(), 2);

        let missing = source.fetch_candles(&symbol, Timeframe::Day1).await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_source_as_trait_object() {
        let source: Box<dyn CandleSource> = Box::new(StaticSource::new());
        let symbol = Symbol::default();
        assert!(source.fetch_candles(&symbol, Timeframe::Hour4).await.unwrap().is_empty());
    }

    #[test]
    fn test_error_conversion() {
        let error: CandelaError = DownloadError::Status { status: 429 }.into();
        assert_eq!(error.to_string(), "Failed to fetch data: 429");

        let error: CandelaError = ParseError::Arity { row: 2, len: 4 }.into();
        assert!(matches!(error, CandelaError::Parse(_)));
    }
}
