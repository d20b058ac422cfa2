//! Benchmark utilities for candela.
//!
//! Deterministic synthetic market data, so benchmark runs need no network.

use candela_lib::{Candle, OhlcSeries};

/// Epoch milliseconds of the first synthetic candle (2024-01-01T00:00:00Z).
pub const START_MILLIS: i64 = 1_704_067_200_000;

/// One hour in milliseconds.
pub const HOUR_MILLIS: i64 = 3_600_000;

/// Close price of the `i`-th synthetic point: an upward drift with two
/// overlapping cycles.
#[must_use]
pub fn synthetic_close(i: usize) -> f64 {
    let x = i as f64;
    100.0 + 0.05 * x + 5.0 * (x / 12.0).sin() + 2.0 * (x / 3.5).cos()
}

/// Generates `n` hourly candles.
#[must_use]
pub fn synthetic_candles(n: usize) -> Vec<Candle> {
    (0..n)
        .filter_map(|i| {
            let close = synthetic_close(i);
            let open = if i == 0 { close } else { synthetic_close(i - 1) };
            let high = open.max(close) + 0.5;
            let low = open.min(close) - 0.5;
            Candle::from_millis(START_MILLIS + i as i64 * HOUR_MILLIS, open, high, low, close)
        })
        .collect()
}

/// Generates an `n`-point series with a non-zero volume column.
#[must_use]
pub fn synthetic_series(n: usize) -> OhlcSeries {
    let mut series = OhlcSeries::from_candles(&synthetic_candles(n));
    for (i, volume) in series.volume.iter_mut().enumerate() {
        *volume = 1_000.0 + 250.0 * (i as f64 / 5.0).sin().abs();
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_candles() {
        let candles = synthetic_candles(720);
        assert_eq!(candles.len(), 720);
        assert!(candles.iter().all(|c| c.low <= c.close && c.close <= c.high));
        assert_eq!(
            candles[1].timestamp_millis() - candles[0].timestamp_millis(),
            HOUR_MILLIS
        );
    }

    #[test]
    fn test_synthetic_series_is_valid() {
        let series = synthetic_series(120);
        assert_eq!(series.len(), 120);
        assert!(series.validate().is_ok());
        assert!(series.volume.iter().all(|v| *v >= 1_000.0));
    }
}
