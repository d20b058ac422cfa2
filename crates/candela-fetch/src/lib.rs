//! Market data retrieval for candela.
//!
//! This crate provides the candle download pipeline:
//!
//! - [`url::ohlc_url`] - Constructs CoinGecko OHLC URLs
//! - [`MarketClient`] - HTTP client with retries and backoff
//! - [`parse_candles`] - JSON candle array parsing
//! - [`CandleSource`] - Provider abstraction, implemented by [`CoinGecko`] and [`StaticSource`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, DownloadError, MarketClient};
pub use parse::{ParseError, parse_candles};
pub use source::{CandleSource, CoinGecko, StaticSource};
