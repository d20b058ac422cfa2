//! Stride-based candle downsampling.

use candela_types::{Candle, Timeframe};
use serde::{Deserialize, Serialize};

use crate::OhlcSeries;

/// Downsampling strides per timeframe.
///
/// A candle at raw index `i` survives when `i % stride == 0`. Strides are
/// positional and assume hourly provider candles; they do not align buckets
/// to calendar boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Stride for the 15-minute timeframe.
    pub minute15: usize,
    /// Stride for the 1-hour timeframe.
    pub hour1: usize,
    /// Stride for the 4-hour timeframe.
    pub hour4: usize,
    /// Stride for the daily timeframe.
    pub day1: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            minute15: Timeframe::Minute15.stride(),
            hour1: Timeframe::Hour1.stride(),
            hour4: Timeframe::Hour4.stride(),
            day1: Timeframe::Day1.stride(),
        }
    }
}

impl SeriesConfig {
    /// Returns the stride for a timeframe. A configured stride of zero is treated as one.
    #[must_use]
    pub fn stride(&self, timeframe: Timeframe) -> usize {
        let stride = match timeframe {
            Timeframe::Minute15 => self.minute15,
            Timeframe::Hour1 => self.hour1,
            Timeframe::Hour4 => self.hour4,
            Timeframe::Day1 => self.day1,
        };
        stride.max(1)
    }
}

/// Streaming stride sampler.
///
/// Emits the first candle and every `stride`-th candle after it.
#[derive(Debug)]
pub struct CandleSampler {
    stride: usize,
    index: usize,
}

impl CandleSampler {
    /// Creates a new sampler. A stride of zero is treated as one.
    #[must_use]
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            index: 0,
        }
    }

    /// Returns the sampling stride.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Processes a candle, returning it if it falls on the stride.
    pub fn process(&mut self, candle: Candle) -> Option<Candle> {
        let keep = self.index % self.stride == 0;
        self.index += 1;
        keep.then_some(candle)
    }
}

/// Builds OHLC series from raw candles using a configurable stride table.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    config: SeriesConfig,
}

impl SeriesBuilder {
    /// Creates a builder with the given stride table.
    #[must_use]
    pub const fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    /// Returns the stride table.
    #[must_use]
    pub const fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Downsamples `raw` for `timeframe` into an OHLC series with zero volume.
    ///
    /// The output length is `ceil(raw.len() / stride)`.
    #[must_use]
    pub fn build(&self, raw: &[Candle], timeframe: Timeframe) -> OhlcSeries {
        let mut sampler = CandleSampler::new(self.config.stride(timeframe));
        let mut series = OhlcSeries::with_capacity(raw.len().div_ceil(sampler.stride()));

        for candle in raw {
            if let Some(kept) = sampler.process(*candle) {
                series.push(&kept, 0.0);
            }
        }

        tracing::debug!(
            timeframe = %timeframe,
            stride = sampler.stride(),
            raw = raw.len(),
            kept = series.len(),
            "built series"
        );
        series
    }
}

/// Downsamples `raw` for `timeframe` using the default stride table.
#[must_use]
pub fn build_series(raw: &[Candle], timeframe: Timeframe) -> OhlcSeries {
    SeriesBuilder::default().build(raw, timeframe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let price = 100.0 + i as f64;
                Candle::from_millis(i as i64 * 3_600_000, price, price, price, price).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_length_is_ceil_of_stride() {
        for n in [0, 1, 3, 4, 5, 23, 24, 25, 30, 720] {
            let raw = ramp(n);
            for tf in Timeframe::all() {
                let series = build_series(&raw, *tf);
                assert_eq!(series.len(), n.div_ceil(tf.stride()), "n={n} tf={tf}");
                assert!(series.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for tf in Timeframe::all() {
            let series = build_series(&[], *tf);
            assert!(series.is_empty());
            assert!(series.high.is_empty());
            assert!(series.low.is_empty());
            assert!(series.volume.is_empty());
            assert!(series.timestamp.is_empty());
        }
    }

    #[test]
    fn test_hour1_keeps_everything() {
        let raw = ramp(5);
        let series = build_series(&raw, Timeframe::Hour1);
        assert_eq!(series.close, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    }

    #[test]
    fn test_daily_keeps_positions_0_and_24() {
        let raw = ramp(30);
        let series = build_series(&raw, Timeframe::Day1);
        assert_eq!(series.close, vec![100.0, 124.0]);
        assert_eq!(series.timestamp, vec![0, 24 * 3_600_000]);
    }

    #[test]
    fn test_volume_is_zero() {
        let series = build_series(&ramp(9), Timeframe::Hour4);
        assert_eq!(series.volume, vec![0.0; 3]);
    }

    #[test]
    fn test_stride_is_positional_not_wall_clock() {
        // Candles 30 minutes apart: "4h" still keeps every 4th candle, which
        // here spans 2 hours. Known approximation of positional sampling.
        let raw: Vec<Candle> = (0..8)
            .map(|i| Candle::from_millis(i * 1_800_000, 1.0, 1.0, 1.0, 1.0).unwrap())
            .collect();
        let series = build_series(&raw, Timeframe::Hour4);
        assert_eq!(series.timestamp, vec![0, 4 * 1_800_000]);
    }

    #[test]
    fn test_custom_stride_table() {
        let builder = SeriesBuilder::new(SeriesConfig {
            hour1: 2,
            ..SeriesConfig::default()
        });
        let series = builder.build(&ramp(5), Timeframe::Hour1);
        assert_eq!(series.close, vec![100.0, 102.0, 104.0]);
    }

    #[test]
    fn test_zero_stride_treated_as_one() {
        let config = SeriesConfig {
            day1: 0,
            ..SeriesConfig::default()
        };
        assert_eq!(config.stride(Timeframe::Day1), 1);
        assert_eq!(CandleSampler::new(0).stride(), 1);
    }

    #[test]
    fn test_sampler_streaming() {
        let mut sampler = CandleSampler::new(3);
        let kept: Vec<_> = ramp(7)
            .into_iter()
            .filter_map(|c| sampler.process(c))
            .map(|c| c.close)
            .collect();
        assert_eq!(kept, vec![100.0, 103.0, 106.0]);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: SeriesConfig = serde_json::from_str(r#"{"day1": 12}"#).unwrap();
        assert_eq!(config.day1, 12);
        assert_eq!(config.hour4, 4);
    }
}
