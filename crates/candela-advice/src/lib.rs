//! Investment summaries for candela.
//!
//! - [`calculate_dca`] - Average close and coins bought for a fixed amount
//! - [`smart_advice`] - Buy/wait/sell call from RSI and MACD

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dca;
mod smart;

pub use dca::{DEFAULT_INVESTMENT, DcaPlan, calculate_dca, round_to};
pub use smart::{Advice, OVERBOUGHT, OVERSOLD, SmartAdvice, smart_advice};
