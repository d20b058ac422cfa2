//! Numeric building blocks shared by the indicators.
//!
//! Windowed functions return only the values for complete windows, so the
//! output of a `period`-window over `n` inputs has `n - period + 1` entries
//! (or none when `n < period`). The last element is always aligned with the
//! last input.

/// Returns the last element of `values`, or 0 when empty.
#[must_use]
pub fn latest(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(0.0)
}

/// Returns the arithmetic mean, or 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the maximum value, or 0 for an empty slice.
#[must_use]
pub fn highest(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Returns the minimum value, or 0 for an empty slice.
#[must_use]
pub fn lowest(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Returns the trailing `period` values, or the whole slice when shorter.
#[must_use]
pub fn trailing(values: &[f64], period: usize) -> &[f64] {
    &values[values.len().saturating_sub(period)..]
}

/// Population standard deviation around `center`.
#[must_use]
pub fn population_std(values: &[f64], center: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean absolute deviation around `center`.
#[must_use]
pub fn mean_deviation(values: &[f64], center: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - center).abs()).sum::<f64>() / values.len() as f64
}

/// Simple moving average over every complete window.
#[must_use]
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    values.windows(period).map(mean).collect()
}

/// Exponential moving average with `k = 2 / (period + 1)`, seeded with the
/// SMA of the first `period` values.
#[must_use]
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, period, 2.0 / (period as f64 + 1.0))
}

/// Wilder smoothing (`k = 1 / period`), seeded with the SMA of the first
/// `period` values.
#[must_use]
pub fn wilder(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, period, 1.0 / period as f64)
}

fn smoothed(values: &[f64], period: usize, k: f64) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - period + 1);
    let mut prev = mean(&values[..period]);
    out.push(prev);
    for &value in &values[period..] {
        prev += k * (value - prev);
        out.push(prev);
    }
    out
}

/// True range for bars `1..n`: `max(H - L, |H - prevC|, |L - prevC|)`.
///
/// The first bar has no previous close and is skipped, so the output has
/// `n - 1` entries.
#[must_use]
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    (1..close.len())
        .map(|i| {
            let prev_close = close[i - 1];
            (high[i] - low[i])
                .max((high[i] - prev_close).abs())
                .max((low[i] - prev_close).abs())
        })
        .collect()
}

/// Average true range: Wilder smoothing of [`true_range`].
///
/// Needs `period + 1` bars for the first value.
#[must_use]
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    wilder(&true_range(high, low, close), period)
}

/// RSI line using Wilder smoothing of gains and losses.
///
/// Needs `period + 1` prices for the first value. Each value is
/// `100 * gain / (gain + loss)`, or 0 when both averages are zero.
#[must_use]
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() <= period {
        return Vec::new();
    }
    let changes: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    wilder(&gains, period)
        .into_iter()
        .zip(wilder(&losses, period))
        .map(|(gain, loss)| ratio_percent(gain, gain + loss))
        .collect()
}

/// Fast stochastic %K over every complete window.
///
/// `100 * (close - lowest low) / (highest high - lowest low)`, or 0 when the
/// window has no range.
#[must_use]
pub fn stochastic_k(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || close.len() < period {
        return Vec::new();
    }
    (period - 1..close.len())
        .map(|i| {
            let start = i + 1 - period;
            let hh = highest(&high[start..=i]);
            let ll = lowest(&low[start..=i]);
            ratio_percent(close[i] - ll, hh - ll)
        })
        .collect()
}

/// Directional movement for bars `1..n` as `(plus_dm, minus_dm)`.
#[must_use]
pub fn directional_movement(high: &[f64], low: &[f64]) -> (Vec<f64>, Vec<f64>) {
    (1..high.len())
        .map(|i| {
            let up = high[i] - high[i - 1];
            let down = low[i - 1] - low[i];
            let plus = if up > down && up > 0.0 { up } else { 0.0 };
            let minus = if down > up && down > 0.0 { down } else { 0.0 };
            (plus, minus)
        })
        .unzip()
}

/// Directional movement index line (DX).
///
/// Needs `period + 1` bars for the first value.
#[must_use]
pub fn dx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let (plus_dm, minus_dm) = directional_movement(high, low);
    let tr = wilder(&true_range(high, low, close), period);
    let plus = wilder(&plus_dm, period);
    let minus = wilder(&minus_dm, period);

    tr.iter()
        .zip(plus.iter().zip(&minus))
        .map(|(&tr, (&plus, &minus))| {
            let plus_di = ratio_percent(plus, tr);
            let minus_di = ratio_percent(minus, tr);
            ratio_percent((plus_di - minus_di).abs(), plus_di + minus_di)
        })
        .collect()
}

/// Parabolic SAR for bars `1..n`.
///
/// The initial trend is long unless the second bar shows dominant downward
/// directional movement. `step` is added to the acceleration factor on each
/// new extreme point, capped at `max_step`.
#[must_use]
pub fn parabolic_sar(high: &[f64], low: &[f64], step: f64, max_step: f64) -> Vec<f64> {
    let n = high.len().min(low.len());
    if n < 2 {
        return Vec::new();
    }

    let down_move = low[0] - low[1];
    let up_move = high[1] - high[0];
    let mut long = !(down_move > 0.0 && down_move > up_move);
    let mut af = step;
    let (mut sar, mut ep) = if long {
        (low[0], high[1])
    } else {
        (high[0], low[1])
    };

    let mut out = Vec::with_capacity(n - 1);
    for i in 1..n {
        if long {
            if low[i] <= sar {
                long = false;
                sar = ep.max(high[i]).max(high[i - 1]);
                out.push(sar);
                af = step;
                ep = low[i];
                sar = (sar + af * (ep - sar)).max(high[i]).max(high[i - 1]);
            } else {
                out.push(sar);
                if high[i] > ep {
                    ep = high[i];
                    af = (af + step).min(max_step);
                }
                sar = (sar + af * (ep - sar)).min(low[i]).min(low[i - 1]);
            }
        } else if high[i] >= sar {
            long = true;
            sar = ep.min(low[i]).min(low[i - 1]);
            out.push(sar);
            af = step;
            ep = high[i];
            sar = (sar + af * (ep - sar)).min(low[i]).min(low[i - 1]);
        } else {
            out.push(sar);
            if low[i] < ep {
                ep = low[i];
                af = (af + step).min(max_step);
            }
            sar = (sar + af * (ep - sar)).max(high[i]).max(high[i - 1]);
        }
    }
    out
}

/// `100 * numerator / denominator`, or 0 when the denominator is zero.
#[must_use]
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        100.0 * numerator / denominator
    }
}
