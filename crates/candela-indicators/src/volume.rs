//! Volume-weighted indicators.
//!
//! The current market data provider reports no volume, so these mostly see
//! all-zero volume. MFI and VWAP then produce all-zero lines and OBV and the
//! accumulation/distribution line stay at 0.

use candela_series::OhlcSeries;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// On-balance volume, seeded with the first bar's volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obv;

impl Indicator for Obv {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Obv
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let Some(&first) = series.volume.first() else {
            return IndicatorValue::Scalar(0.0);
        };
        let obv = series
            .close
            .windows(2)
            .zip(&series.volume[1..])
            .fold(first, |obv, (pair, volume)| {
                if pair[1] > pair[0] {
                    obv + volume
                } else if pair[1] < pair[0] {
                    obv - volume
                } else {
                    obv
                }
            });
        IndicatorValue::Scalar(obv)
    }
}

/// Money flow index line over typical price.
///
/// Bars before the first full window are 0. The whole line is 0 when the
/// series carries no volume.
#[derive(Debug, Clone, Copy)]
pub struct Mfi {
    period: usize,
}

impl Mfi {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Mfi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Mfi
    }

    fn shape(&self) -> Shape {
        Shape::Line
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let n = series.len();
        let mut line = vec![0.0; n];
        if self.period == 0 || series.total_volume() == 0.0 {
            return IndicatorValue::Line(line);
        }

        let typical = series.typical_prices();
        // Signed money flow of bar i, for i in 1..n.
        let (positive, negative): (Vec<f64>, Vec<f64>) = (1..n)
            .map(|i| {
                let flow = typical[i] * series.volume[i];
                if typical[i] > typical[i - 1] {
                    (flow, 0.0)
                } else if typical[i] < typical[i - 1] {
                    (0.0, flow)
                } else {
                    (0.0, 0.0)
                }
            })
            .unzip();

        for (offset, (pos, neg)) in positive
            .windows(self.period)
            .zip(negative.windows(self.period))
            .enumerate()
        {
            let pos: f64 = pos.iter().sum();
            let neg: f64 = neg.iter().sum();
            line[offset + self.period] = math::ratio_percent(pos, pos + neg);
        }
        IndicatorValue::Line(line)
    }
}

/// Cumulative volume-weighted average price line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vwap;

impl Indicator for Vwap {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Vwap
    }

    fn shape(&self) -> Shape {
        Shape::Line
    }

    fn min_periods(&self) -> usize {
        0
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        if series.total_volume() == 0.0 {
            return IndicatorValue::Line(vec![0.0; series.len()]);
        }

        let mut weighted = 0.0;
        let mut volume = 0.0;
        let line = series
            .typical_prices()
            .iter()
            .zip(&series.volume)
            .map(|(price, v)| {
                weighted += price * v;
                volume += v;
                if volume == 0.0 { 0.0 } else { weighted / volume }
            })
            .collect();
        IndicatorValue::Line(line)
    }
}

/// Latest Chaikin accumulation/distribution line value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chaikin;

impl Indicator for Chaikin {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Chaikin
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let ad = (0..series.len()).fold(0.0, |ad, i| {
            let (high, low, close) = (series.high[i], series.low[i], series.close[i]);
            let range = high - low;
            if range == 0.0 {
                ad
            } else {
                ad + ((close - low) - (high - close)) / range * series.volume[i]
            }
        });
        IndicatorValue::Scalar(ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bars(close: &[f64], volume: &[f64]) -> OhlcSeries {
        OhlcSeries {
            close: close.to_vec(),
            high: close.iter().map(|c| c + 1.0).collect(),
            low: close.iter().map(|c| c - 1.0).collect(),
            volume: volume.to_vec(),
            timestamp: (0..close.len() as i64).collect(),
        }
    }

    #[test]
    fn test_obv_seeded_with_first_volume() {
        let series = bars(&[10.0, 11.0, 10.5, 10.5], &[5.0, 2.0, 1.0, 7.0]);
        // 5 + 2 - 1 + 0
        assert_eq!(Obv.compute(&series), IndicatorValue::Scalar(6.0));
    }

    #[test]
    fn test_zero_volume_lines() {
        let close: Vec<f64> = (0..20).map(f64::from).collect();
        let series = bars(&close, &[0.0; 20]);
        assert_eq!(Vwap.compute(&series), IndicatorValue::Line(vec![0.0; 20]));
        assert_eq!(Mfi::new(14).compute(&series), IndicatorValue::Line(vec![0.0; 20]));
        assert_eq!(Chaikin.compute(&series), IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_vwap_with_volume() {
        let series = bars(&[10.0, 20.0], &[1.0, 3.0]);
        let line = Vwap.compute(&series);
        let line = line.as_line().unwrap();
        assert_relative_eq!(line[0], 10.0);
        assert_relative_eq!(line[1], 17.5);
    }

    #[test]
    fn test_mfi_rising_is_100() {
        let close: Vec<f64> = (0..16).map(f64::from).collect();
        let series = bars(&close, &[1.0; 16]);
        let value = Mfi::new(14).compute(&series);
        let line = value.as_line().unwrap();
        assert_eq!(line.len(), 16);
        assert_eq!(&line[..14], &[0.0; 14]);
        assert_relative_eq!(line[14], 100.0);
        assert_relative_eq!(line[15], 100.0);
    }

    #[test]
    fn test_mfi_zero_period_is_zero_line() {
        let close: Vec<f64> = (0..5).map(f64::from).collect();
        let series = bars(&close, &[1.0; 5]);
        assert_eq!(Mfi::new(0).compute(&series), IndicatorValue::Line(vec![0.0; 5]));
    }

    #[test]
    fn test_chaikin_close_at_high() {
        let mut series = bars(&[10.0, 10.0], &[2.0, 3.0]);
        series.close.clone_from(&series.high);
        assert_relative_eq!(Chaikin.compute(&series).as_scalar().unwrap(), 5.0);
    }
}
