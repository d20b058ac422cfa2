//! Technical-analysis toolkit for cryptocurrency OHLC data.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use candela_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = CoinGecko::with_defaults()?;
//!     let symbol: Symbol = "BTC/USDT".parse()?;
//!
//!     let candles = source.fetch_candles(&symbol, Timeframe::Hour4).await?;
//!     let series = build_series(&candles, Timeframe::Hour4);
//!     let snapshot = compute_indicators(&series)?;
//!
//!     TextFormatter::default().write_snapshot(&symbol, Timeframe::Hour4, &snapshot, std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export coin registry
pub use candela_instruments::CoinRegistry;

// Re-export series building
pub use candela_series::{
    CandleSampler, OhlcSeries, SeriesBuilder, SeriesConfig, SeriesError, build_series,
};

// Re-export the indicator engine
pub use candela_indicators::{
    ConfigError, Indicator, IndicatorConfig, IndicatorEngine, IndicatorKind, IndicatorRegistry,
    IndicatorSnapshot, IndicatorValue, Shape, UnknownIndicator, compute_indicators,
};

/// Individual indicator implementations and shared math.
pub mod indicators {
    pub use candela_indicators::{
        directional, levels, math, moving_average, oscillator, volatility, volume,
    };
}

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use candela_fetch::{
    CandleSource, ClientConfig, CoinGecko, DownloadError, MarketClient, ParseError, StaticSource,
    parse_candles, url,
};

// Re-export investment helpers
#[cfg(feature = "advice")]
pub use candela_advice::{
    Advice, DEFAULT_INVESTMENT, DcaPlan, OVERBOUGHT, OVERSOLD, SmartAdvice, calculate_dca,
    round_to, smart_advice,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use candela_format::{
    FormatError, Formatter, JsonFormatter, Locale, OutputFormat, TextFormatter, report_label,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{
        Candle, CandelaError, Coin, Direction, Result, Symbol, SymbolParseError, Timeframe,
        TimeframeParseError,
    };

    pub use candela_instruments::CoinRegistry;

    pub use candela_series::{OhlcSeries, build_series};

    pub use candela_indicators::{
        IndicatorConfig, IndicatorEngine, IndicatorKind, IndicatorSnapshot, IndicatorValue,
        compute_indicators,
    };

    #[cfg(feature = "fetch")]
    pub use candela_fetch::{CandleSource, ClientConfig, CoinGecko, MarketClient};

    #[cfg(feature = "advice")]
    pub use candela_advice::{Advice, DcaPlan, SmartAdvice, calculate_dca, smart_advice};

    #[cfg(feature = "format")]
    pub use candela_format::{Formatter, JsonFormatter, Locale, OutputFormat, TextFormatter};
}
