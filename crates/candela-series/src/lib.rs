//! Candle downsampling and OHLC series for candela.
//!
//! This crate provides the series builder:
//!
//! - [`OhlcSeries`] - Column-oriented OHLCV vectors consumed by the indicator engine
//! - [`SeriesConfig`] - Stride table mapping timeframes to downsampling strides
//! - [`CandleSampler`] - Streaming stride sampler
//! - [`build_series`] - Builds a series from raw candles with the default strides

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod series;

pub use builder::{CandleSampler, SeriesBuilder, SeriesConfig, build_series};
pub use series::{OhlcSeries, SeriesError};
