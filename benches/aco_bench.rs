//! Criterion benchmarks for the ant colony partitioner.
//!
//! Uses deterministic pseudo-random item sets so timings measure the
//! colony itself rather than instance generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_partition::aco::{half_sum, AcoConfig, AntColony, Construction};
use u_partition::random::create_rng;

fn random_items(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = create_rng(seed);
    (0..n).map(|_| rng.random_range(1..1000)).collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_target_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_target_bounded");
    group.sample_size(10);

    for &n in &[10usize, 50, 100] {
        let items = random_items(n, 42);
        let target = half_sum(&items);
        let colony = AntColony::new(AcoConfig::new(10, 2.0, 2.0, 0.5, 0.8, 50).with_seed(42))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let result = colony.run(black_box(items), black_box(target));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_exhaustive");
    group.sample_size(10);

    for &n in &[10usize, 50] {
        let items = random_items(n, 7);
        let target = half_sum(&items);
        let config = AcoConfig::new(10, 2.0, 2.0, 0.5, 0.8, 20)
            .with_construction(Construction::Exhaustive)
            .with_seed(42);
        let colony = AntColony::new(config).expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let result = colony.run(black_box(items), black_box(target));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_target_bounded, bench_exhaustive);
criterion_main!(benches);
