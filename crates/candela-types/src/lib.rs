//! Core types for the candela technical-analysis toolkit.
//!
//! This crate provides the fundamental data structures used throughout candela:
//!
//! - [`Candle`] - A single OHLC observation as delivered by the market data provider
//! - [`Timeframe`] - Requested analysis granularity with its fetch window and stride
//! - [`Symbol`] - A `BASE/QUOTE` trading pair
//! - [`Coin`] - Provider metadata for a base asset
//! - [`Direction`] - Up/down trend label used by trend indicators

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod coin;
mod direction;
mod error;
mod symbol;
mod timeframe;

pub use candle::Candle;
pub use coin::Coin;
pub use direction::Direction;
pub use error::{CandelaError, Result};
pub use symbol::{Symbol, SymbolParseError};
pub use timeframe::{Timeframe, TimeframeParseError};
