use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planner_intervals::{
    clopper_pearson, estimate_confidence_interval, langford_reverse, percentiles,
    resample_accuracies, reverse_ztest_pr, ttest_pr, wilson, Method, DEFAULT_RESAMPLES,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate per-example outcomes with the given accuracy
fn generate_outcomes(size: usize, accuracy: f64, seed: u64) -> Vec<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_bool(accuracy)).collect()
}

fn bench_holdout(c: &mut Criterion) {
    let mut group = c.benchmark_group("Holdout");
    let sizes = [50, 500, 5000, 50_000];

    for &size in &sizes {
        group.bench_with_input(BenchmarkId::new("wilson", size), &size, |b, &n| {
            b.iter(|| wilson(black_box(n), 0.8, 0.95))
        });
        group.bench_with_input(BenchmarkId::new("ttest_pr", size), &size, |b, &n| {
            b.iter(|| ttest_pr(black_box(n), 0.8, 0.95))
        });
        // Bisection on the incomplete beta function dominates here
        group.bench_with_input(BenchmarkId::new("clopper_pearson", size), &size, |b, &n| {
            b.iter(|| clopper_pearson(black_box(n), 0.8, 0.95))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatch");

    for method in Method::ALL.into_iter().filter(|m| !m.requires_resamples()) {
        group.bench_function(method.name(), |b| {
            b.iter(|| estimate_confidence_interval(black_box(1000), 0.8, 0.9, method, Some(10)))
        });
    }

    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bootstrap");
    let sizes = [100, 1000];

    for &size in &sizes {
        let outcomes = generate_outcomes(size, 0.8, 42);
        group.bench_with_input(BenchmarkId::new("resample", size), &outcomes, |b, outcomes| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                resample_accuracies(black_box(outcomes), DEFAULT_RESAMPLES, &mut rng)
            })
        });

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let accuracies = resample_accuracies(&outcomes, DEFAULT_RESAMPLES, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("percentiles", size), &accuracies, |b, acc| {
            b.iter(|| percentiles(black_box(acc), 0.95))
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    c.bench_function("reverse_ztest_pr", |b| {
        b.iter(|| reverse_ztest_pr(black_box(0.02), 0.95))
    });
    c.bench_function("langford_reverse", |b| {
        b.iter(|| langford_reverse(black_box(0.02), 0.95))
    });
}

criterion_group!(benches, bench_holdout, bench_dispatch, bench_bootstrap, bench_reverse);
criterion_main!(benches);
