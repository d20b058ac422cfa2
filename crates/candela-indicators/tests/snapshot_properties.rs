//! Whole-snapshot behavior over series built from raw candles.

use approx::assert_relative_eq;
use candela_indicators::{
    ConfigError, IndicatorConfig, IndicatorEngine, IndicatorKind, IndicatorRegistry,
    IndicatorValue, compute_indicators,
};
use candela_series::{OhlcSeries, build_series};
use candela_types::{Candle, Direction, Timeframe};

const HOUR_MS: i64 = 3_600_000;

/// Hourly candles whose close rises by one each hour, starting at 100.
fn rising_candles(n: i64) -> Vec<Candle> {
    (0..n)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::from_millis(i * HOUR_MS, close, close + 1.0, close, close).unwrap()
        })
        .collect()
}

fn wavy_series(n: usize) -> OhlcSeries {
    let close: Vec<f64> = (0..n)
        .map(|i| 100.0 + 10.0 * (i as f64 / 5.0).sin() + i as f64 * 0.1)
        .collect();
    OhlcSeries {
        high: close.iter().map(|c| c + 1.5).collect(),
        low: close.iter().map(|c| c - 1.5).collect(),
        volume: vec![0.0; n],
        timestamp: (0..n as i64).map(|i| i * HOUR_MS).collect(),
        close,
    }
}

#[test]
fn test_empty_input_gives_neutral_snapshot() {
    for timeframe in Timeframe::all() {
        let series = build_series(&[], *timeframe);
        let snapshot = compute_indicators(&series).unwrap();

        assert!(snapshot.is_complete());
        let kinds: Vec<_> = snapshot.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, IndicatorKind::all());

        assert_eq!(snapshot.scalar(IndicatorKind::Sma), Some(0.0));
        assert_eq!(
            snapshot.get(IndicatorKind::Vwap),
            Some(&IndicatorValue::Line(Vec::new()))
        );
        assert_eq!(
            snapshot.get(IndicatorKind::Fibonacci),
            Some(&IndicatorValue::Levels(vec![0.0; 6]))
        );
        assert_eq!(
            snapshot.get(IndicatorKind::Supertrend),
            Some(&IndicatorValue::Trend {
                value: 0.0,
                direction: Direction::Down,
            })
        );
        assert_eq!(
            snapshot.get(IndicatorKind::PsarTrend),
            Some(&IndicatorValue::Direction(Direction::Down))
        );
        let macd = snapshot.get(IndicatorKind::Macd).unwrap();
        assert_eq!(macd.field("histogram"), Some(0.0));
    }
}

#[test]
fn test_every_key_holds_its_neutral_default() {
    let registry = IndicatorRegistry::standard(&IndicatorConfig::default());
    for timeframe in Timeframe::all() {
        let series = build_series(&[], *timeframe);
        let snapshot = compute_indicators(&series).unwrap();

        for indicator in registry.iter() {
            assert_eq!(
                snapshot.get(indicator.kind()),
                Some(&indicator.neutral(&series)),
                "{} on {timeframe}",
                indicator.kind()
            );
        }
    }
}

#[test]
fn test_every_value_is_finite() {
    for n in [1, 2, 5, 19, 20, 33, 34, 60, 200] {
        let snapshot = compute_indicators(&wavy_series(n)).unwrap();
        assert_eq!(snapshot.len(), 33);
        for (kind, value) in &snapshot {
            assert!(value.is_finite(), "{kind} not finite at n={n}");
        }
    }
}

#[test]
fn test_rising_rsi_and_momentum() {
    let series = build_series(&rising_candles(30), Timeframe::Hour1);
    let snapshot = compute_indicators(&series).unwrap();
    assert!(snapshot.scalar(IndicatorKind::Rsi).unwrap() > 99.0);

    let short = build_series(&rising_candles(11), Timeframe::Hour1);
    let snapshot = compute_indicators(&short).unwrap();
    assert!(snapshot.scalar(IndicatorKind::Momentum).unwrap() > 0.0);
}

#[test]
fn test_zero_volume_lines_match_close_length() {
    let series = wavy_series(40);
    let snapshot = compute_indicators(&series).unwrap();
    for kind in [IndicatorKind::Vwap, IndicatorKind::Mfi] {
        let line = snapshot.get(kind).and_then(IndicatorValue::as_line).unwrap();
        assert_eq!(line, vec![0.0; series.len()].as_slice());
    }
}

#[test]
fn test_bollinger_middle_equals_sma_at_twenty_points() {
    let snapshot = compute_indicators(&wavy_series(20)).unwrap();
    let sma = snapshot.scalar(IndicatorKind::Sma).unwrap();
    let middle = snapshot
        .get(IndicatorKind::Bollinger)
        .and_then(|value| value.field("middle"))
        .unwrap();
    assert_relative_eq!(middle, sma);
    assert!(sma != 0.0);
}

#[test]
fn test_deterministic() {
    let series = wavy_series(120);
    assert_eq!(
        compute_indicators(&series).unwrap(),
        compute_indicators(&series).unwrap()
    );
}

#[test]
fn test_daily_thirty_candle_ramp() {
    let series = build_series(&rising_candles(30), Timeframe::Day1);
    assert_eq!(series.close, vec![100.0, 124.0]);

    let snapshot = compute_indicators(&series).unwrap();
    assert_eq!(snapshot.scalar(IndicatorKind::Sma), Some(0.0));

    let levels = snapshot.get(IndicatorKind::SupportResistance).unwrap();
    assert_eq!(levels.field("support"), Some(100.0));
    assert_eq!(levels.field("resistance"), Some(125.0));
}

#[test]
fn test_alternate_windows() {
    let config = IndicatorConfig {
        sma_period: 2,
        ..IndicatorConfig::default()
    };
    let series = build_series(&rising_candles(30), Timeframe::Day1);
    let snapshot = IndicatorEngine::new(&config).unwrap().compute(&series).unwrap();
    assert_eq!(snapshot.scalar(IndicatorKind::Sma), Some(112.0));
}

#[test]
fn test_zero_window_is_a_config_error() {
    for config in [
        IndicatorConfig {
            mfi_period: 0,
            ..IndicatorConfig::default()
        },
        IndicatorConfig {
            trix_period: 0,
            ..IndicatorConfig::default()
        },
    ] {
        assert!(matches!(
            IndicatorEngine::new(&config),
            Err(ConfigError::ZeroWindow(_))
        ));
    }

    // The default engine still computes the same series.
    let snapshot = compute_indicators(&wavy_series(50)).unwrap();
    assert!(snapshot.is_complete());
}

#[test]
fn test_length_mismatch_is_an_error() {
    let mut series = wavy_series(10);
    series.timestamp.pop();
    assert!(compute_indicators(&series).is_err());
}
