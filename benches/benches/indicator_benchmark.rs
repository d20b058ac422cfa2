//! Indicator engine benchmarks on synthetic data.
//!
//! Run with: `cargo bench --package candela-bench`

use candela_bench::{synthetic_candles, synthetic_series};
use candela_lib::indicators::{directional::Ichimoku, volatility::Supertrend};
use candela_lib::{
    Indicator, IndicatorConfig, IndicatorEngine, SeriesBuilder, Timeframe, compute_indicators,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Series lengths to benchmark. 720 is the longest series the provider yields.
const SIZES: [usize; 3] = [120, 360, 720];

fn engine_benchmark(c: &mut Criterion) {
    let engine = IndicatorEngine::new(&IndicatorConfig::default()).expect("default config is valid");

    let mut group = c.benchmark_group("engine");
    for size in SIZES {
        let series = synthetic_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("compute", size), &series, |b, series| {
            b.iter(|| engine.compute(black_box(series)));
        });
    }
    group.finish();

    let series = synthetic_series(720);
    c.bench_function("compute_indicators/720", |b| {
        b.iter(|| compute_indicators(black_box(&series)));
    });
}

fn indicator_benchmark(c: &mut Criterion) {
    let config = IndicatorConfig::default();
    let series = synthetic_series(720);

    let mut group = c.benchmark_group("indicator");
    let supertrend = Supertrend::new(config.supertrend_period);
    group.bench_function("supertrend", |b| {
        b.iter(|| supertrend.compute(black_box(&series)));
    });
    let ichimoku = Ichimoku::new(config.ichimoku_tenkan, config.ichimoku_kijun);
    group.bench_function("ichimoku", |b| {
        b.iter(|| ichimoku.compute(black_box(&series)));
    });
    group.finish();
}

fn series_benchmark(c: &mut Criterion) {
    let candles = synthetic_candles(720);
    let builder = SeriesBuilder::default();

    let mut group = c.benchmark_group("build_series");
    group.throughput(Throughput::Elements(candles.len() as u64));
    for timeframe in Timeframe::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(timeframe),
            timeframe,
            |b, timeframe| {
                b.iter(|| builder.build(black_box(&candles), *timeframe));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    engine_benchmark,
    indicator_benchmark,
    series_benchmark
);
criterion_main!(benches);
