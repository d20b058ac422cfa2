//! Technical indicator engine for candela.
//!
//! This crate computes the 33-indicator snapshot:
//!
//! - [`IndicatorEngine`] - Evaluates a registry over an [`OhlcSeries`](candela_series::OhlcSeries)
//! - [`IndicatorRegistry`] - Ordered set of [`Indicator`] implementations
//! - [`IndicatorConfig`] - Windows and multipliers of the standard set
//! - [`IndicatorSnapshot`] - Results keyed by [`IndicatorKind`]
//! - [`math`] - Moving averages, Wilder smoothing, true range and friends

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod indicator;
mod kind;
mod registry;
mod snapshot;
mod value;

pub mod directional;
pub mod levels;
pub mod math;
pub mod moving_average;
pub mod oscillator;
pub mod volatility;
pub mod volume;

pub use config::{ConfigError, IndicatorConfig};
pub use engine::{IndicatorEngine, compute_indicators};
pub use indicator::Indicator;
pub use kind::{IndicatorKind, UnknownIndicator};
pub use registry::IndicatorRegistry;
pub use snapshot::IndicatorSnapshot;
pub use value::{IndicatorValue, Shape};
