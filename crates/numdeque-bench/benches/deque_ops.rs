//! Criterion micro-benchmarks for buffer growth and end operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use numdeque::{DequeConfig, NumericDeque};
use numdeque_bench::{alternating_ends_profile, push_back_profile, sparse_set_profile};

/// Append 10K values from the default capacity.
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let d = push_back_profile(10_000);
            black_box(d.size());
        });
    });
}

/// Prepend 10K values from the default capacity.
fn bench_push_front_10k(c: &mut Criterion) {
    c.bench_function("push_front_10k", |b| {
        b.iter(|| {
            let mut d = NumericDeque::new();
            for i in 0..10_000 {
                d.push_front(black_box(i as f64));
            }
            black_box(d.size());
        });
    });
}

/// Append 10K values with a pre-sized buffer and growth factor 4.
fn bench_push_back_presized(c: &mut Criterion) {
    let config = DequeConfig::new(20_000).with_growth_factor(4);
    c.bench_function("push_back_10k_presized", |b| {
        b.iter(|| {
            let mut d = NumericDeque::with_config(config).expect("valid config");
            for i in 0..10_000 {
                d.push_back(i as f64);
            }
            black_box(d.size());
        });
    });
}

/// Seeded mix of pushes and pops at both ends.
fn bench_alternating_ends(c: &mut Criterion) {
    c.bench_function("alternating_ends_10k", |b| {
        b.iter(|| {
            let d = alternating_ends_profile(42, 10_000);
            black_box(d.size());
        });
    });
}

/// Strided writes past the end, zero-filling the gaps.
fn bench_sparse_set(c: &mut Criterion) {
    c.bench_function("sparse_set_1k_stride_16", |b| {
        b.iter(|| {
            let d = sparse_set_profile(1_000, 16);
            black_box(d.size());
        });
    });
}

/// Random-access reads over a 10K array.
fn bench_get_10k(c: &mut Criterion) {
    let d = push_back_profile(10_000);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..d.size() {
                acc += d.get(black_box(i));
            }
            black_box(acc);
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_front_10k,
    bench_push_back_presized,
    bench_alternating_ends,
    bench_sparse_set,
    bench_get_10k,
);
criterion_main!(benches);
