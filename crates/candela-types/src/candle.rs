//! Candle data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLC observation for a fixed period.
///
/// The upstream provider does not report volume, so a candle carries only
/// prices. Volume is synthesized as zero when a series is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Period open time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Creates a candle from an epoch-millisecond timestamp.
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    #[must_use]
    pub fn from_millis(millis: i64, open: f64, high: f64, low: f64, close: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|ts| Self::new(ts, open, high, low, close))
    }

    /// Returns the timestamp as epoch milliseconds.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_millis() {
        let candle = Candle::from_millis(1_704_067_200_000, 1.0, 2.0, 0.5, 1.5).unwrap();
        assert_eq!(candle.timestamp_millis(), 1_704_067_200_000);
        assert_eq!(candle.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_range_and_typical_price() {
        let candle = Candle::from_millis(0, 10.0, 12.0, 9.0, 11.0).unwrap();
        assert_relative_eq!(candle.range(), 3.0);
        assert_relative_eq!(candle.typical_price(), 32.0 / 3.0);
    }
}
