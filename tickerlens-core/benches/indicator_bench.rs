//! Criterion benchmarks for TickerLens hot paths.
//!
//! Benchmarks:
//! 1. Synthetic series generation
//! 2. Individual indicators (SMA, RSI, Bollinger) at several series lengths
//! 3. Full indicator engine + scoring

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::{Duration, NaiveDate};
use tickerlens_core::domain::{PricePoint, Weights};
use tickerlens_core::indicators::{compute_indicators, latest_pair, Bollinger, Indicator, Rsi, Sma};
use tickerlens_core::scoring::score;
use tickerlens_core::synthetic::build_synthetic_series;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> Vec<PricePoint> {
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let price = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            PricePoint::new(base_date + Duration::days(i as i64), price, 1_000_000)
        })
        .collect()
}

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_synthetic(c: &mut Criterion) {
    c.bench_function("synthetic_series_400", |b| {
        b.iter(|| build_synthetic_series(black_box("AAPL"), end_date()))
    });
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");
    for n in [400usize, 2_000, 10_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::new("sma_200", n), &series, |b, s| {
            b.iter(|| Sma::new(200).compute(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("rsi_14", n), &series, |b, s| {
            b.iter(|| Rsi::new(14).compute(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("bollinger_z_20", n), &series, |b, s| {
            b.iter(|| Bollinger::z_score(20).compute(black_box(s)))
        });
    }
    group.finish();
}

fn bench_engine_and_score(c: &mut Criterion) {
    let series = build_synthetic_series("MSFT", end_date());
    let weights = Weights::default();
    c.bench_function("compute_indicators_and_score", |b| {
        b.iter(|| {
            let points = compute_indicators(black_box(&series));
            latest_pair(&points).map(|(current, previous)| score(&current, &previous, None, &weights))
        })
    });
}

criterion_group!(benches, bench_synthetic, bench_indicators, bench_engine_and_score);
criterion_main!(benches);
