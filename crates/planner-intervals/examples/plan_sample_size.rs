//! Compare every method on one measurement and plan the test-set size
//!
//! Run with `RUST_LOG=planner_intervals=debug` to see the solver events.

use anyhow::Result;
use planner_intervals::{
    estimate_confidence_interval, langford_conf, langford_reverse, resample_accuracies,
    reverse_ttest_pr_conf, reverse_ztest_pr, reverse_ztest_pr_conf, Method, DEFAULT_RESAMPLES,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sample_size = 400;
    let accuracy = 0.83;
    let levels = [0.8, 0.90, 0.95, 0.99];

    // Per-example outcomes for the bootstrap method
    let correct = (accuracy * sample_size as f64).round() as usize;
    let outcomes: Vec<bool> = (0..sample_size).map(|i| i < correct).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let resamples = resample_accuracies(&outcomes, DEFAULT_RESAMPLES, &mut rng)?;

    println!("Accuracy {accuracy} on {sample_size} examples");
    for method in Method::ALL {
        println!("\n{method}");
        for level in levels {
            let ci = if method.requires_resamples() {
                estimate_confidence_interval(sample_size, &resamples, level, method, None)?
            } else {
                estimate_confidence_interval(sample_size, accuracy, level, method, Some(10))?
            };
            println!("  {ci}");
        }
    }

    println!("\nExamples needed for ±3% at 95% confidence:");
    println!("  normal approximation: {}", reverse_ztest_pr(0.03, 0.95)?);
    println!("  Langford bound:       {}", langford_reverse(0.03, 0.95)?);

    println!("\nConfidence reached by ±5% on {sample_size} examples:");
    println!("  z-test:   {:.4}", reverse_ztest_pr_conf(0.05, sample_size)?);
    println!("  t-test:   {:.4}", reverse_ttest_pr_conf(0.05, sample_size)?);
    println!("  Langford: {:.4}", langford_conf(0.05, sample_size)?);

    Ok(())
}
