//! Criterion micro-benchmarks for SimpleVector mutation and copy paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use simple_vector::SimpleVector;
use simple_vector_bench::{op_script, replay_simple_vector, replay_vec};
use smallvec::SmallVec;

const N: u64 = 10_000;

/// Benchmark: Append 10K u64 values from empty (growth policy path).
fn bench_push_back_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_10k");
    group.bench_function("simple_vector", |b| {
        b.iter(|| {
            let mut v = SimpleVector::new();
            for i in 0..N {
                v.push_back(black_box(i));
            }
            black_box(v.len());
        });
    });
    group.bench_function("std_vec", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..N {
                v.push(black_box(i));
            }
            black_box(v.len());
        });
    });
    group.bench_function("smallvec_16", |b| {
        b.iter(|| {
            let mut v: SmallVec<[u64; 16]> = SmallVec::new();
            for i in 0..N {
                v.push(black_box(i));
            }
            black_box(v.len());
        });
    });
    group.finish();
}

/// Benchmark: Append 10K values into a pre-reserved vector (no relocation).
fn bench_push_back_reserved_10k(c: &mut Criterion) {
    c.bench_function("push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut v = SimpleVector::with_capacity(N as usize);
            for i in 0..N {
                v.push_back(black_box(i));
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: Insert 1K values at the front (worst-case shifting).
fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut v = SimpleVector::new();
            for i in 0..1_000u64 {
                v.insert(0, black_box(i));
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: Replay a 10K-op mixed script on SimpleVector and Vec.
fn bench_script_replay(c: &mut Criterion) {
    let ops = op_script(42, 10_000);
    let mut group = c.benchmark_group("script_replay_10k");
    group.bench_function("simple_vector", |b| {
        b.iter(|| black_box(replay_simple_vector(black_box(&ops)).len()));
    });
    group.bench_function("std_vec", |b| {
        b.iter(|| black_box(replay_vec(black_box(&ops)).len()));
    });
    group.finish();
}

/// Benchmark: Deep copy of a 10K-element vector.
fn bench_clone_10k(c: &mut Criterion) {
    let source: SimpleVector<u64> = (0..N).collect();
    c.bench_function("clone_10k", |b| {
        b.iter(|| black_box(source.clone()));
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_back_reserved_10k,
    bench_insert_front_1k,
    bench_script_replay,
    bench_clone_10k,
);
criterion_main!(benches);
