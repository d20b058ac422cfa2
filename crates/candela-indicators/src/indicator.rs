//! The indicator capability.

use candela_series::OhlcSeries;

use crate::{IndicatorKind, IndicatorValue, Shape};

/// A technical indicator computed over an OHLCV series.
///
/// Implementations are pure: the same series always yields the same value.
/// [`compute`](Indicator::compute) is only called once the series holds at
/// least [`min_periods`](Indicator::min_periods) bars and its columns have
/// equal lengths.
pub trait Indicator: Send + Sync + std::fmt::Debug {
    /// Returns the snapshot key this indicator fills.
    fn kind(&self) -> IndicatorKind;

    /// Returns the output shape, used to build the neutral default.
    fn shape(&self) -> Shape;

    /// Returns the minimum number of bars needed for a meaningful value.
    fn min_periods(&self) -> usize;

    /// Computes the indicator.
    fn compute(&self, series: &OhlcSeries) -> IndicatorValue;

    /// Returns the value used when the series is shorter than
    /// [`min_periods`](Indicator::min_periods).
    fn neutral(&self, series: &OhlcSeries) -> IndicatorValue {
        self.shape().neutral(series.len())
    }
}
