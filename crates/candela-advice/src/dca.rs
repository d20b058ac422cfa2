//! Dollar-cost averaging summary.

use candela_indicators::math;
use candela_series::OhlcSeries;
use serde::Serialize;

/// Amount invested per DCA summary, in quote currency.
pub const DEFAULT_INVESTMENT: f64 = 100.0;

/// Result of a DCA summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DcaPlan {
    /// Amount invested, in quote currency.
    pub investment: f64,
    /// Mean close over the series, rounded to 2 decimals.
    pub avg_price: f64,
    /// Coins bought at the average price, rounded to 6 decimals.
    pub total_coins: f64,
}

/// Summarizes buying `investment` worth of coins at the series' mean close.
///
/// An empty series (or a zero mean close) yields zero price and zero coins.
///
/// # Example
///
/// ```
/// use candela_advice::calculate_dca;
/// use candela_indicators::math;
/// use candela_series::OhlcSeries;
///
/// let series = OhlcSeries { close: vec![100.0, 200.0], ..OhlcSeries::default() };
/// let plan = calculate_dca(&series, 100.0);
/// assert_eq!(plan.avg_price, 150.0);
/// assert_eq!(plan.total_coins, 0.666667);
/// ```
#[must_use]
pub fn calculate_dca(series: &OhlcSeries, investment: f64) -> DcaPlan {
    let avg_price = math::mean(&series.close);
    let total_coins = if avg_price == 0.0 {
        0.0
    } else {
        investment / avg_price
    };

    DcaPlan {
        investment,
        avg_price: round_to(avg_price, 2),
        total_coins: round_to(total_coins, 6),
    }
}

/// Rounds `value` to `decimals` places, halves away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn closes(values: &[f64]) -> OhlcSeries {
        OhlcSeries {
            close: values.to_vec(),
            ..OhlcSeries::default()
        }
    }

    #[test]
    fn test_dca_two_points() {
        let plan = calculate_dca(&closes(&[100.0, 200.0]), DEFAULT_INVESTMENT);
        assert_relative_eq!(plan.avg_price, 150.0);
        assert_relative_eq!(plan.total_coins, 0.666667);
        assert_relative_eq!(plan.investment, 100.0);
    }

    #[test]
    fn test_dca_empty_is_zero() {
        let plan = calculate_dca(&OhlcSeries::new(), DEFAULT_INVESTMENT);
        assert_eq!(plan.avg_price, 0.0);
        assert_eq!(plan.total_coins, 0.0);
    }

    #[test]
    fn test_dca_rounds_price() {
        let plan = calculate_dca(&closes(&[1.0, 2.0, 2.0]), 10.0);
        assert_relative_eq!(plan.avg_price, 1.67);
        assert_relative_eq!(plan.total_coins, 6.0);
    }

    #[test]
    fn test_round_to() {
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(0.6666666, 6), 0.666667);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
    }
}
