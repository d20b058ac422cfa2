//! Volatility bands and ranges.

use candela_series::OhlcSeries;
use candela_types::Direction;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// Bollinger bands `{upper, middle, lower}` using the population deviation.
#[derive(Debug, Clone, Copy)]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
}

impl Bollinger {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize, std_dev: f64) -> Self {
        Self { period, std_dev }
    }
}

impl Indicator for Bollinger {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Bollinger
    }

    fn shape(&self) -> Shape {
        Shape::Triple(["upper", "middle", "lower"])
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let window = math::trailing(&series.close, self.period);
        let middle = math::mean(window);
        let width = self.std_dev * math::population_std(window, middle);
        IndicatorValue::triple(
            ["upper", "middle", "lower"],
            [middle + width, middle, middle - width],
        )
    }
}

/// Keltner channel `{upper, lower}`: EMA of close plus or minus a multiple of ATR.
#[derive(Debug, Clone, Copy)]
pub struct Keltner {
    period: usize,
    multiplier: f64,
}

impl Keltner {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }
}

impl Indicator for Keltner {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Keltner
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["upper", "lower"])
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let ema = math::latest(&math::ema(&series.close, self.period));
        let atr = math::latest(&math::atr(
            &series.high,
            &series.low,
            &series.close,
            self.period,
        ));
        let width = self.multiplier * atr;
        IndicatorValue::pair(["upper", "lower"], [ema + width, ema - width])
    }
}

/// Latest average true range.
#[derive(Debug, Clone, Copy)]
pub struct Atr {
    period: usize,
}

impl Atr {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Atr {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Atr
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let atr = math::atr(&series.high, &series.low, &series.close, self.period);
        IndicatorValue::Scalar(math::latest(&atr))
    }
}

/// Single-bar supertrend: `hl2 + ATR`, up when the close is above `hl2`.
#[derive(Debug, Clone, Copy)]
pub struct Supertrend {
    period: usize,
}

impl Supertrend {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }

    fn direction(series: &OhlcSeries) -> (f64, Direction) {
        series.latest().map_or((0.0, Direction::Down), |(high, low, close)| {
            let hl2 = (high + low) / 2.0;
            (hl2, Direction::up_if(close > hl2))
        })
    }
}

impl Indicator for Supertrend {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Supertrend
    }

    fn shape(&self) -> Shape {
        Shape::Trend
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let (hl2, direction) = Self::direction(series);
        let atr = math::atr(&series.high, &series.low, &series.close, self.period);
        IndicatorValue::Trend {
            value: hl2 + math::latest(&atr),
            direction,
        }
    }

    fn neutral(&self, series: &OhlcSeries) -> IndicatorValue {
        // The direction only needs the latest bar.
        let (_, direction) = Self::direction(series);
        IndicatorValue::Trend {
            value: 0.0,
            direction,
        }
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

    #[test]
    fn test_bollinger_flat_collapses() {
        let value = Bollinger::new(20, 2.0).compute(&bars(&[50.0; 20], 1.0));
        assert_eq!(
            value,
            IndicatorValue::triple(["upper", "middle", "lower"], [50.0, 50.0, 50.0])
        );
    }

    #[test]
    fn test_bollinger_population_std() {
        // Window [1, 3]: mean 2, population std 1.
        let value = Bollinger::new(2, 2.0).compute(&bars(&[1.0, 3.0], 0.0));
        assert_relative_eq!(value.field("upper").unwrap(), 4.0);
        assert_relative_eq!(value.field("lower").unwrap(), 0.0);
    }

    #[test]
    fn test_atr_constant_range() {
        let value = Atr::new(14).compute(&bars(&[100.0; 15], 1.0));
        assert_relative_eq!(value.as_scalar().unwrap(), 2.0);
    }

    #[test]
    fn test_keltner_symmetric() {
        let value = Keltner::new(20, 2.0).compute(&bars(&[100.0; 21], 1.0));
        assert_relative_eq!(value.field("upper").unwrap(), 104.0);
        assert_relative_eq!(value.field("lower").unwrap(), 96.0);
    }

    #[test]
    fn test_supertrend_value() {
        let mut series = bars(&[100.0; 11], 1.0);
        series.close[10] = 100.5;
        let value = Supertrend::new(10).compute(&series);
        assert_eq!(value.direction(), Some(Direction::Up));
        assert!(value.field("value").unwrap() > 100.0);
    }

    #[test]
    fn test_supertrend_neutral_keeps_direction() {
        let mut series = bars(&[100.0; 3], 1.0);
        series.close[2] = 100.5;
        let supertrend = Supertrend::new(10);
        assert_eq!(
            supertrend.neutral(&series),
            IndicatorValue::Trend {
                value: 0.0,
                direction: Direction::Up,
            }
        );
        assert_eq!(
            supertrend.neutral(&OhlcSeries::new()),
            IndicatorValue::Trend {
                value: 0.0,
                direction: Direction::Down,
            }
        );
    }
}
