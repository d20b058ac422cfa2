//! Trend strength and direction indicators.

use candela_series::OhlcSeries;
use candela_types::Direction;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// Average directional index: Wilder mean of the DX line.
#[derive(Debug, Clone, Copy)]
pub struct Adx {
    period: usize,
}

impl Adx {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Adx {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Adx
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        2 * self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let dx = math::dx(&series.high, &series.low, &series.close, self.period);
        IndicatorValue::Scalar(math::latest(&math::wilder(&dx, self.period)))
    }
}

/// Latest directional movement index (DX).
#[derive(Debug, Clone, Copy)]
pub struct Dmi {
    period: usize,
}

impl Dmi {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Dmi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Dmi
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let dx = math::dx(&series.high, &series.low, &series.close, self.period);
        IndicatorValue::Scalar(math::latest(&dx))
    }
}

/// Aroon `{up, down}` over the trailing `period + 1` bars.
#[derive(Debug, Clone, Copy)]
pub struct Aroon {
    period: usize,
}

impl Aroon {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }

    /// Position of the most recent extreme in `window` under `better`.
    fn extreme_index(window: &[f64], better: impl Fn(f64, f64) -> bool) -> usize {
        window
            .iter()
            .enumerate()
            .fold(0, |best, (i, &value)| {
                if i == 0 || !better(window[best], value) {
                    i
                } else {
                    best
                }
            })
    }
}

impl Indicator for Aroon {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Aroon
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["up", "down"])
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let high = math::trailing(&series.high, self.period + 1);
        let low = math::trailing(&series.low, self.period + 1);
        // Index 0 is `period` bars ago, so the index counts bars of recency.
        let up = Self::extreme_index(high, |best, value| best > value);
        let down = Self::extreme_index(low, |best, value| best < value);
        let period = self.period as f64;
        IndicatorValue::pair(
            ["up", "down"],
            [
                math::ratio_percent(up as f64, period),
                math::ratio_percent(down as f64, period),
            ],
        )
    }
}

/// Latest parabolic SAR.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicSar {
    step: f64,
    max_step: f64,
}

impl ParabolicSar {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(step: f64, max_step: f64) -> Self {
        Self { step, max_step }
    }
}

impl Indicator for ParabolicSar {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::ParabolicSar
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        2
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let sar = math::parabolic_sar(&series.high, &series.low, self.step, self.max_step);
        IndicatorValue::Scalar(math::latest(&sar))
    }
}

/// Parabolic SAR trend: up while the SAR sits below the latest high.
#[derive(Debug, Clone, Copy)]
pub struct PsarTrend {
    step: f64,
    max_step: f64,
}

impl PsarTrend {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(step: f64, max_step: f64) -> Self {
        Self { step, max_step }
    }
}

impl Indicator for PsarTrend {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::PsarTrend
    }

    fn shape(&self) -> Shape {
        Shape::Direction
    }

    fn min_periods(&self) -> usize {
        2
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let sar = math::parabolic_sar(&series.high, &series.low, self.step, self.max_step);
        let direction = match (sar.last(), series.high.last()) {
            (Some(sar), Some(high)) => Direction::up_if(sar < high),
            _ => Direction::Down,
        };
        IndicatorValue::Direction(direction)
    }
}

/// Ichimoku `{tenkan, kijun}` midpoints; each is 0 until its window fills.
#[derive(Debug, Clone, Copy)]
pub struct Ichimoku {
    tenkan: usize,
    kijun: usize,
}

impl Ichimoku {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(tenkan: usize, kijun: usize) -> Self {
        Self { tenkan, kijun }
    }

    fn midpoint(series: &OhlcSeries, period: usize) -> f64 {
        if series.len() < period {
            return 0.0;
        }
        let high = math::highest(math::trailing(&series.high, period));
        let low = math::lowest(math::trailing(&series.low, period));
        (high + low) / 2.0
    }
}

impl Indicator for Ichimoku {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Ichimoku
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["tenkan", "kijun"])
    }

    fn min_periods(&self) -> usize {
        0
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::pair(
            ["tenkan", "kijun"],
            [
                Self::midpoint(series, self.tenkan),
                Self::midpoint(series, self.kijun),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bars(close: &[f64], spread: f64) -> OhlcSeries {
        OhlcSeries {
            close: close.to_vec(),
            high: close.iter().map(|c| c + spread).collect(),
            low: close.iter().map(|c| c - spread).collect(),
            volume: vec![0.0; close.len()],
            timestamp: (0..close.len() as i64).collect(),
        }
    }

    fn ramp(n: i32) -> Vec<f64> {
        (0..n).map(|i| 100.0 + f64::from(i)).collect()
    }

    #[test]
    fn test_adx_strong_trend() {
        let adx = Adx::new(14);
        assert_eq!(adx.min_periods(), 28);
        let value = adx.compute(&bars(&ramp(28), 1.0));
        assert_relative_eq!(value.as_scalar().unwrap(), 100.0);
    }

    #[test]
    fn test_dmi_strong_trend() {
        let value = Dmi::new(14).compute(&bars(&ramp(15), 1.0));
        assert_relative_eq!(value.as_scalar().unwrap(), 100.0);
    }

    #[test]
    fn test_dmi_flat_is_zero() {
        let value = Dmi::new(14).compute(&bars(&[10.0; 15], 1.0));
        assert_eq!(value, IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_aroon_rising() {
        let value = Aroon::new(25).compute(&bars(&ramp(26), 1.0));
        assert_relative_eq!(value.field("up").unwrap(), 100.0);
        assert_relative_eq!(value.field("down").unwrap(), 0.0);
    }

    #[test]
    fn test_aroon_ties_use_most_recent() {
        let value = Aroon::new(4).compute(&bars(&[1.0; 5], 0.0));
        assert_relative_eq!(value.field("up").unwrap(), 100.0);
        assert_relative_eq!(value.field("down").unwrap(), 100.0);
    }

    #[test]
    fn test_psar_trend_rising() {
        let series = bars(&ramp(30), 1.0);
        let trend = PsarTrend::new(0.02, 0.2).compute(&series);
        assert_eq!(trend, IndicatorValue::Direction(Direction::Up));

        let sar = ParabolicSar::new(0.02, 0.2).compute(&series);
        assert!(sar.as_scalar().unwrap() < *series.low.last().unwrap());
    }

    #[test]
    fn test_ichimoku_short_kijun_is_zero() {
        let value = Ichimoku::new(9, 26).compute(&bars(&ramp(10), 1.0));
        // Trailing 9 bars: highs up to 110, lows from 100.
        assert_relative_eq!(value.field("tenkan").unwrap(), 105.0);
        assert_eq!(value.field("kijun"), Some(0.0));
    }
}
