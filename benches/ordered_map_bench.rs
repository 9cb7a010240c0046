//! Benchmark for OrderedMap vs standard BTreeMap.
//!
//! Compares the left-leaning red-black map against Rust's standard BTreeMap
//! for the operations scheduling code leans on.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use llrb_map::ordered::OrderedMap;
use std::collections::BTreeMap;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Multiplicative scatter so keys do not arrive in sorted order.
fn scattered(index: i32, size: i32) -> i32 {
    (index.wrapping_mul(7919)).rem_euclid(size)
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in SIZES {
        group.bench_with_input(
            BenchmarkId::new("OrderedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = OrderedMap::new();
                    for index in 0..size {
                        map.put(black_box(scattered(index, size)), black_box(index));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for index in 0..size {
                    map.insert(black_box(scattered(index, size)), black_box(index));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        let ordered_map: OrderedMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("OrderedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0i64;
                    for key in 0..size {
                        if let Some(&value) = ordered_map.get(&black_box(key)) {
                            sum += i64::from(value);
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0i64;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in SIZES {
        let ordered_map: OrderedMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(
            BenchmarkId::new("OrderedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || ordered_map.clone(),
                    |mut map| {
                        for index in 0..size {
                            black_box(map.delete(&scattered(index, size)));
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for index in 0..size {
                        black_box(map.remove(&scattered(index, size)));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// delete_min / delete_max Benchmark
// =============================================================================

fn benchmark_drain_extremes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("drain_extremes");

    for size in SIZES {
        let ordered_map: OrderedMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("OrderedMap", size), &size, |bencher, _| {
            bencher.iter_batched(
                || ordered_map.clone(),
                |mut map| {
                    while let Some(value) = map.delete_min() {
                        black_box(value);
                        black_box(map.delete_max());
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    while let Some(entry) = map.pop_first() {
                        black_box(entry);
                        black_box(map.pop_last());
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in SIZES {
        let ordered_map: OrderedMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("OrderedMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i64 = ordered_map.values().map(|&value| i64::from(value)).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i64 = standard_map.values().map(|&value| i64::from(value)).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_delete,
    benchmark_drain_extremes,
    benchmark_iteration
);

criterion_main!(benches);
