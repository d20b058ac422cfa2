//! Moving-average based indicators.

use candela_series::OhlcSeries;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// Latest simple moving average of close.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Sma
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::Scalar(math::latest(&math::sma(&series.close, self.period)))
    }
}

/// Latest exponential moving average of close.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Ema {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ema {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Ema
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::Scalar(math::latest(&math::ema(&series.close, self.period)))
    }
}

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, Copy)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Returns the MACD line: fast EMA minus slow EMA, aligned on the last bar.
    #[must_use]
    pub fn line(&self, close: &[f64]) -> Vec<f64> {
        let fast = math::ema(close, self.fast);
        let slow = math::ema(close, self.slow);
        let len = fast.len().min(slow.len());
        math::trailing(&fast, len)
            .iter()
            .zip(math::trailing(&slow, len))
            .map(|(f, s)| f - s)
            .collect()
    }
}

impl Indicator for Macd {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Macd
    }

    fn shape(&self) -> Shape {
        Shape::Triple(["macd", "signal", "histogram"])
    }

    fn min_periods(&self) -> usize {
        (self.fast.max(self.slow) + self.signal).saturating_sub(1)
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let line = self.line(&series.close);
        let macd = math::latest(&line);
        let signal = math::latest(&math::ema(&line, self.signal));
        IndicatorValue::triple(
            ["macd", "signal", "histogram"],
            [macd, signal, macd - signal],
        )
    }
}

/// One-bar percent change of a triple-smoothed EMA.
#[derive(Debug, Clone, Copy)]
pub struct Trix {
    period: usize,
}

impl Trix {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Trix {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Trix
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        (3 * self.period).saturating_sub(1)
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let single = math::ema(&series.close, self.period);
        let double = math::ema(&single, self.period);
        let triple = math::ema(&double, self.period);

        let value = match triple.as_slice() {
            [.., previous, current] => math::ratio_percent(current - previous, *previous),
            _ => 0.0,
        };
        IndicatorValue::Scalar(value)
    }
}

/// Heikin-Ashi style close of the latest bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeikinAshi;

impl Indicator for HeikinAshi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::HeikinAshi
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let value = series
            .latest()
            .map_or(0.0, |(high, low, close)| (high + low + close) / 3.0);
        IndicatorValue::Scalar(value)
    }
}
