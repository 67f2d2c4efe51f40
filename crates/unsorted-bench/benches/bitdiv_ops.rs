//! Criterion micro-benchmarks for shift-and-subtract division.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use unsorted_bitdiv::divide;

fn bench_divide(c: &mut Criterion) {
    c.bench_function("bitdiv_972_by_5", |b| {
        b.iter(|| divide(black_box(972), black_box(5)).unwrap());
    });
    c.bench_function("bitdiv_max_by_3", |b| {
        b.iter(|| divide(black_box(u32::MAX), black_box(3)).unwrap());
    });
}

criterion_group!(benches, bench_divide);
criterion_main!(benches);
