//! Benchmarks for primality, the batch walk, and the aggregates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use primegap::{compute_distribution, compute_primes_sync, compute_stats, is_prime, Scan};

// ============================================================================
// Benchmark: single primality test
// ============================================================================

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    for n in [97u64, 7_919, 1_000_003, 4_294_967_291] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: batch walk vs chunked scan
// ============================================================================

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for max in [1_000u64, 50_000, 1_000_000] {
        group.throughput(Throughput::Elements(max));

        group.bench_with_input(BenchmarkId::new("sync", max), &max, |b, &max| {
            b.iter(|| black_box(compute_primes_sync(black_box(max))));
        });

        group.bench_with_input(BenchmarkId::new("chunked", max), &max, |b, &max| {
            b.iter(|| black_box(Scan::new(black_box(max)).run_to_end()));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: aggregation
// ============================================================================

fn bench_aggregate(c: &mut Criterion) {
    let seq = compute_primes_sync(1_000_000);
    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(seq.len() as u64));

    group.bench_function("stats", |b| {
        b.iter(|| black_box(compute_stats(black_box(&seq))));
    });

    group.bench_function("distribution", |b| {
        b.iter(|| black_box(compute_distribution(black_box(&seq))));
    });

    group.finish();
}

criterion_group!(benches, bench_is_prime, bench_walk, bench_aggregate);
criterion_main!(benches);
