//! Statistics core benchmark
//!
//! Measures the per-group cost of the analysis pipeline: parsing raw CSV
//! cells, summarizing a sample, and the Mann-Whitney comparison in both its
//! exact and asymptotic regimes.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench stats_core
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dockbench::stats::summarize;
use dockbench::value::parse_value;

/// Deterministic latency-like sample (no RNG dependency)
fn latency_sample(n: usize, base: f64) -> Vec<f64> {
    (0..n)
        .map(|i| base + ((i * 7919) % 97) as f64 * 0.37)
        .collect()
}

fn bench_parse_value(c: &mut Criterion) {
    let cells = ["412.5", " 398 ms ", "N/A", "51.2%", "812.0 MB/s", "garbage"];

    c.bench_function("parse_value", |b| {
        b.iter(|| {
            for cell in &cells {
                black_box(parse_value(black_box(cell)));
            }
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for n in [10usize, 50, 1000] {
        let sample = latency_sample(n, 400.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sample, |b, sample| {
            b.iter(|| summarize(black_box(sample)))
        });
    }

    group.finish();
}

#[cfg(feature = "significance")]
fn bench_mann_whitney(c: &mut Criterion) {
    use dockbench::significance::mann_whitney_u;

    let mut group = c.benchmark_group("mann_whitney");

    // Distinct values keep the small case on the exact path
    let small_a: Vec<f64> = (0..8).map(|i| 400.0 + i as f64).collect();
    let small_b: Vec<f64> = (0..50).map(|i| 404.5 + i as f64).collect();
    group.bench_function("exact_8x50", |b| {
        b.iter(|| mann_whitney_u(black_box(&small_a), black_box(&small_b)))
    });

    let large_a = latency_sample(50, 400.0);
    let large_b = latency_sample(50, 410.0);
    group.bench_function("asymptotic_50x50", |b| {
        b.iter(|| mann_whitney_u(black_box(&large_a), black_box(&large_b)))
    });

    group.finish();
}

#[cfg(not(feature = "significance"))]
fn bench_mann_whitney(_c: &mut Criterion) {}

criterion_group!(benches, bench_parse_value, bench_summarize, bench_mann_whitney);
criterion_main!(benches);
