//! Percentile bootstrap interval for accuracies
//!
//! The interval is read directly off the empirical distribution of resampled
//! accuracies, with no parametric assumption. [`resample_accuracies`] builds
//! that distribution from per-example outcomes.

use crate::{ConfidenceInterval, ConfidenceLevel};
use planner_core::{
    utils::{quantile_sorted, sorted},
    validation::check_accuracies,
    Error, Result,
};
use rand::Rng;
use tracing::{debug, instrument};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Percentile interval of a sequence of resampled accuracies
///
/// Returns the linearly interpolated `alpha/2` and `1 - alpha/2` empirical
/// quantiles. The input order does not matter; the estimate is the median.
#[instrument(level = "trace", skip(accuracies), fields(n_resamples = accuracies.len()))]
pub fn percentiles(accuracies: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    check_accuracies(accuracies)?;
    let level = ConfidenceLevel::new(confidence_level)?;

    let sorted = sorted(accuracies);
    let tail = level.tail_probability();
    let lower = quantile_sorted(&sorted, tail).ok_or_else(Error::empty_input)?;
    let upper = quantile_sorted(&sorted, 1.0 - tail).ok_or_else(Error::empty_input)?;
    let median = quantile_sorted(&sorted, 0.5).ok_or_else(Error::empty_input)?;
    debug!(lower, upper, median, "percentile interval");

    Ok(ConfidenceInterval::new(lower, upper, median, confidence_level))
}

/// Bootstrap distribution of the accuracy of per-example outcomes
///
/// Each resample draws `outcomes.len()` outcomes with replacement and records
/// the fraction that are correct.
pub fn resample_accuracies<R: Rng>(
    outcomes: &[bool],
    n_resamples: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if outcomes.is_empty() {
        return Err(Error::empty_input());
    }
    if n_resamples == 0 {
        return Err(Error::InvalidInput(
            "Number of resamples must be positive".to_string(),
        ));
    }

    let n = outcomes.len();
    debug!("Drawing {} bootstrap resamples of {} outcomes", n_resamples, n);

    let accuracies = (0..n_resamples)
        .map(|_| {
            let correct = (0..n).filter(|_| outcomes[rng.gen_range(0..n)]).count();
            correct as f64 / n as f64
        })
        .collect();
    Ok(accuracies)
}
