//! Price levels and channels.

use candela_series::OhlcSeries;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// Lowest low and highest high of the whole series.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportResistance;

impl Indicator for SupportResistance {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::SupportResistance
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["support", "resistance"])
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::pair(
            ["support", "resistance"],
            [math::lowest(&series.low), math::highest(&series.high)],
        )
    }
}

/// Classic floor pivot of the latest bar with its first resistance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pivot;

impl Indicator for Pivot {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Pivot
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["pivot", "r1"])
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let (high, low, close) = series.latest().unwrap_or_default();
        let pivot = (high + low + close) / 3.0;
        IndicatorValue::pair(["pivot", "r1"], [pivot, 2.0 * pivot - low])
    }
}

/// Retracement levels between the series' lowest low and highest high.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    ratios: Vec<f64>,
}

impl Fibonacci {
    /// Creates the indicator for the given retracement ratios.
    #[must_use]
    pub const fn new(ratios: Vec<f64>) -> Self {
        Self { ratios }
    }
}

impl Indicator for Fibonacci {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Fibonacci
    }

    fn shape(&self) -> Shape {
        Shape::Levels(self.ratios.len())
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let low = math::lowest(&series.low);
        let range = math::highest(&series.high) - low;
        IndicatorValue::Levels(self.ratios.iter().map(|r| low + range * r).collect())
    }
}

/// Highest high and lowest low over a trailing window, or the whole series
/// when shorter.
fn channel(series: &OhlcSeries, period: usize) -> IndicatorValue {
    IndicatorValue::pair(
        ["upper", "lower"],
        [
            math::highest(math::trailing(&series.high, period)),
            math::lowest(math::trailing(&series.low, period)),
        ],
    )
}

/// Donchian channel `{upper, lower}`.
#[derive(Debug, Clone, Copy)]
pub struct Donchian {
    period: usize,
}

impl Donchian {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Donchian {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Donchian
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["upper", "lower"])
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        channel(series, self.period)
    }
}

/// Price channel `{upper, lower}`; same bands as Donchian under its own key.
#[derive(Debug, Clone, Copy)]
pub struct PriceChannels {
    period: usize,
}

impl PriceChannels {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for PriceChannels {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::PriceChannels
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["upper", "lower"])
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        channel(series, self.period)
    }
}
