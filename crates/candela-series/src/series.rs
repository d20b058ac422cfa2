//! Column-oriented OHLCV series.

use candela_types::Candle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for structurally invalid series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// A vector's length differs from the close vector.
    #[error("series column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: &'static str,
        /// Length of the close column.
        expected: usize,
        /// Length of the offending column.
        actual: usize,
    },
}

/// OHLCV series stored as parallel vectors.
///
/// All five vectors are expected to have identical length; indicator
/// computation calls [`OhlcSeries::validate`] before touching them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    /// Closing prices.
    pub close: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Volumes (all zero for the current provider).
    pub volume: Vec<f64>,
    /// Period open times as epoch milliseconds.
    pub timestamp: Vec<i64>,
}

impl OhlcSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            close: Vec::new(),
            high: Vec::new(),
            low: Vec::new(),
            volume: Vec::new(),
            timestamp: Vec::new(),
        }
    }

    /// Creates an empty series with room for `capacity` bars.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            close: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
            timestamp: Vec::with_capacity(capacity),
        }
    }

    /// Builds a series from every candle, with zero volume.
    #[must_use]
    pub fn from_candles(candles: &[Candle]) -> Self {
        let mut series = Self::with_capacity(candles.len());
        for candle in candles {
            series.push(candle, 0.0);
        }
        series
    }

    /// Appends a candle with the given volume.
    pub fn push(&mut self, candle: &Candle, volume: f64) {
        self.close.push(candle.close);
        self.high.push(candle.high);
        self.low.push(candle.low);
        self.volume.push(volume);
        self.timestamp.push(candle.timestamp_millis());
    }

    /// Returns the number of bars (length of the close vector).
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Checks that every vector has the same length as `close`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] naming the first column whose
    /// length differs.
    pub fn validate(&self) -> Result<(), SeriesError> {
        let expected = self.close.len();
        let columns = [
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("volume", self.volume.len()),
            ("timestamp", self.timestamp.len()),
        ];
        for (column, actual) in columns {
            if actual != expected {
                return Err(SeriesError::LengthMismatch {
                    column,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Returns the latest `(high, low, close)` triple, if any.
    #[must_use]
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        let close = *self.close.last()?;
        let high = *self.high.last()?;
        let low = *self.low.last()?;
        Some((high, low, close))
    }

    /// Returns the typical price `(high + low + close) / 3` for every bar.
    #[must_use]
    pub fn typical_prices(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .zip(&self.close)
            .map(|((h, l), c)| (h + l + c) / 3.0)
            .collect()
    }

    /// Returns the total volume across the series.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.volume.iter().sum()
    }
}
