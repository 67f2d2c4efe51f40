//! Criterion micro-benchmarks for array append, search and delete.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use unsorted_bench::{boundary_churn, drain, fill};

/// Benchmark: 10K appends from capacity 1 (13 doublings).
fn bench_fill_10k(c: &mut Criterion) {
    c.bench_function("array_fill_10k", |b| {
        b.iter(|| {
            let array = fill(1, 10_000).unwrap();
            black_box(array.len());
        });
    });
}

/// Benchmark: linear search for the last value of a 10K array.
fn bench_search_worst_case(c: &mut Criterion) {
    let array = fill(16, 10_000).unwrap();
    c.bench_function("array_search_last_10k", |b| {
        b.iter(|| black_box(array.search(black_box(&9_999))));
    });
}

/// Benchmark: 1K add/delete pairs straddling the growth boundary.
fn bench_boundary_churn(c: &mut Criterion) {
    c.bench_function("array_boundary_churn_1k", |b| {
        b.iter(|| {
            let array = boundary_churn(64, 1_000).unwrap();
            black_box(array.capacity());
        });
    });
}

/// Benchmark: fill 1K then delete front to back (search dominated).
fn bench_drain_1k(c: &mut Criterion) {
    c.bench_function("array_drain_1k", |b| {
        b.iter(|| {
            let array = drain(1, 1_000).unwrap();
            black_box(array.capacity());
        });
    });
}

criterion_group!(
    benches,
    bench_fill_10k,
    bench_search_worst_case,
    bench_boundary_churn,
    bench_drain_1k
);
criterion_main!(benches);
