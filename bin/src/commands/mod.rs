//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod catalog;
pub(crate) mod invest;
pub(crate) mod menu;

use crate::display::{Format, Output, load_config, spinner};
use anyhow::Result;
use candela_lib::prelude::*;
use std::path::Path;

/// Settings shared by the commands that fetch market data.
pub(crate) struct Session {
    pub(crate) output: Output,
    pub(crate) locale: Locale,
    pub(crate) engine: IndicatorEngine,
    pub(crate) source: CoinGecko,
    pub(crate) quiet: bool,
}

impl Session {
    pub(crate) fn new(
        format: Format,
        pretty: bool,
        locale: Locale,
        config: Option<&Path>,
        quiet: bool,
    ) -> Result<Self> {
        let config = match config {
            Some(path) => load_config(path)?,
            None => IndicatorConfig::default(),
        };
        let client = MarketClient::new(ClientConfig::default())?;

        Ok(Self {
            output: Output::new(format, locale, pretty),
            locale,
            engine: IndicatorEngine::new(&config)?,
            source: CoinGecko::new(client),
            quiet,
        })
    }

    /// Fetches candles for `symbol` and downsamples them for `timeframe`.
    pub(crate) async fn series(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<OhlcSeries> {
        let progress = spinner(self.quiet, format!("Fetching {symbol} ({timeframe})"));
        let candles = self.source.fetch_candles(symbol, timeframe).await;
        progress.finish_and_clear();

        let series = build_series(&candles?, timeframe);
        tracing::info!(symbol = %symbol, timeframe = %timeframe, points = series.len(), "Built series");
        Ok(series)
    }
}
