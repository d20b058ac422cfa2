//! Momentum oscillators.

use candela_series::OhlcSeries;

use crate::math;
use crate::{Indicator, IndicatorKind, IndicatorValue, Shape};

/// Latest relative strength index.
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Rsi
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::Scalar(math::latest(&math::rsi(&series.close, self.period)))
    }
}

/// Close minus the close `period` bars earlier.
#[derive(Debug, Clone, Copy)]
pub struct Momentum {
    period: usize,
}

impl Momentum {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Momentum {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Momentum
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let value = lagged(&series.close, self.period).map_or(0.0, |(base, last)| last - base);
        IndicatorValue::Scalar(value)
    }
}

/// Percent change of close over `period` bars.
#[derive(Debug, Clone, Copy)]
pub struct Roc {
    period: usize,
}

impl Roc {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Roc {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Roc
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let value = lagged(&series.close, self.period)
            .map_or(0.0, |(base, last)| math::ratio_percent(last - base, base));
        IndicatorValue::Scalar(value)
    }
}

/// Returns `(close[n - 1 - lag], close[n - 1])`.
fn lagged(close: &[f64], lag: usize) -> Option<(f64, f64)> {
    let last = close.len().checked_sub(1)?;
    let base = last.checked_sub(lag)?;
    Some((close[base], close[last]))
}

/// Williams %R: position of the close within the trailing range, in `[-100, 0]`.
#[derive(Debug, Clone, Copy)]
pub struct WilliamsR {
    period: usize,
}

impl WilliamsR {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for WilliamsR {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::WilliamsR
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let hh = math::highest(math::trailing(&series.high, self.period));
        let ll = math::lowest(math::trailing(&series.low, self.period));
        let close = math::latest(&series.close);
        IndicatorValue::Scalar(math::ratio_percent(close - hh, hh - ll))
    }
}

/// Commodity channel index on typical price.
#[derive(Debug, Clone, Copy)]
pub struct Cci {
    period: usize,
}

impl Cci {
    /// Lambert's scaling constant.
    pub const CONSTANT: f64 = 0.015;

    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Cci {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Cci
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let typical = series.typical_prices();
        let window = math::trailing(&typical, self.period);
        let average = math::mean(window);
        let deviation = math::mean_deviation(window, average);
        let value = if deviation == 0.0 {
            0.0
        } else {
            (math::latest(window) - average) / (Self::CONSTANT * deviation)
        };
        IndicatorValue::Scalar(value)
    }
}

/// Slow stochastic `{k, d}`.
#[derive(Debug, Clone, Copy)]
pub struct Stochastic {
    k: usize,
    slow: usize,
    d: usize,
}

impl Stochastic {
    /// Creates the indicator from the fast %K window and the two smoothing windows.
    #[must_use]
    pub const fn new(k: usize, slow: usize, d: usize) -> Self {
        Self { k, slow, d }
    }
}

impl Indicator for Stochastic {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Stochastic
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["k", "d"])
    }

    fn min_periods(&self) -> usize {
        (self.k + self.slow + self.d).saturating_sub(2)
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let fast = math::stochastic_k(&series.high, &series.low, &series.close, self.k);
        let slow_k = math::sma(&fast, self.slow);
        let slow_d = math::sma(&slow_k, self.d);
        IndicatorValue::pair(["k", "d"], [math::latest(&slow_k), math::latest(&slow_d)])
    }
}

/// Fast stochastic %K applied to the RSI line.
#[derive(Debug, Clone, Copy)]
pub struct StochRsi {
    rsi_period: usize,
    k: usize,
}

impl StochRsi {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(rsi_period: usize, k: usize) -> Self {
        Self { rsi_period, k }
    }
}

impl Indicator for StochRsi {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::StochRsi
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        self.rsi_period + self.k
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let rsi = math::rsi(&series.close, self.rsi_period);
        let k = math::stochastic_k(&rsi, &rsi, &rsi, self.k);
        IndicatorValue::Scalar(math::latest(&k))
    }
}

/// Elder ray `{bull_power, bear_power}` against an EMA of close.
#[derive(Debug, Clone, Copy)]
pub struct ElderRay {
    period: usize,
}

impl ElderRay {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for ElderRay {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::ElderRay
    }

    fn shape(&self) -> Shape {
        Shape::Pair(["bull_power", "bear_power"])
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        let ema = math::latest(&math::ema(&series.close, self.period));
        let (high, low, _) = series.latest().unwrap_or_default();
        IndicatorValue::pair(["bull_power", "bear_power"], [high - ema, low - ema])
    }
}

/// Mean close over the trailing window, or over the whole series when shorter.
#[derive(Debug, Clone, Copy)]
pub struct Ultimate {
    period: usize,
}

impl Ultimate {
    /// Creates the indicator.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ultimate {
    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Ultimate
    }

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &OhlcSeries) -> IndicatorValue {
        IndicatorValue::Scalar(math::mean(math::trailing(&series.close, self.period)))
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
    fn test_rsi_rising() {
        let value = Rsi::new(14).compute(&bars(&ramp(15), 0.5));
        assert_relative_eq!(value.as_scalar().unwrap(), 100.0);
    }

    #[test]
    fn test_momentum_and_roc() {
        let series = bars(&ramp(11), 0.5);
        assert_eq!(Momentum::new(10).compute(&series), IndicatorValue::Scalar(10.0));
        assert_relative_eq!(Roc::new(10).compute(&series).as_scalar().unwrap(), 10.0);
    }

    #[test]
    fn test_roc_zero_base() {
        let series = bars(&[0.0, 5.0], 0.0);
        assert_eq!(Roc::new(1).compute(&series), IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_williams_r_at_high_is_zero() {
        let mut series = bars(&ramp(14), 1.0);
        let last = series.close.len() - 1;
        series.close[last] = series.high[last];
        assert_relative_eq!(WilliamsR::new(14).compute(&series).as_scalar().unwrap(), 0.0);
    }

    #[test]
    fn test_williams_r_zero_range() {
        let series = bars(&[5.0; 14], 0.0);
        assert_eq!(WilliamsR::new(14).compute(&series), IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_cci_flat_is_zero() {
        let series = bars(&[5.0; 20], 1.0);
        assert_eq!(Cci::new(20).compute(&series), IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_cci_rising_is_positive() {
        let value = Cci::new(20).compute(&bars(&ramp(20), 1.0));
        assert!(value.as_scalar().unwrap() > 0.0);
    }

    #[test]
    fn test_stochastic_zero_windows_do_not_underflow() {
        assert_eq!(Stochastic::new(0, 0, 0).min_periods(), 0);
    }

    #[test]
    fn test_stochastic_min_periods_and_top() {
        let stochastic = Stochastic::new(14, 3, 3);
        assert_eq!(stochastic.min_periods(), 18);

        // Close equals the high on a rising series: %K sits at the top.
        let mut series = bars(&ramp(18), 1.0);
        series.close.clone_from(&series.high);
        let value = stochastic.compute(&series);
        assert_relative_eq!(value.field("k").unwrap(), 100.0);
        assert_relative_eq!(value.field("d").unwrap(), 100.0);
    }

    #[test]
    fn test_stoch_rsi_flat_rsi_is_zero() {
        let series = bars(&ramp(28), 0.5);
        let stoch_rsi = StochRsi::new(14, 14);
        assert_eq!(stoch_rsi.min_periods(), 28);
        assert_eq!(stoch_rsi.compute(&series), IndicatorValue::Scalar(0.0));
    }

    #[test]
    fn test_elder_ray_flat() {
        let value = ElderRay::new(13).compute(&bars(&[10.0; 13], 2.0));
        assert_relative_eq!(value.field("bull_power").unwrap(), 2.0);
        assert_relative_eq!(value.field("bear_power").unwrap(), -2.0);
    }

    #[test]
    fn test_ultimate_uses_whole_series_when_short() {
        let series = bars(&[1.0, 2.0, 3.0], 0.0);
        assert_eq!(Ultimate::new(7).compute(&series), IndicatorValue::Scalar(2.0));

        let series = bars(&ramp(10), 0.0);
        assert_relative_eq!(Ultimate::new(7).compute(&series).as_scalar().unwrap(), 106.0);
    }
}
