//! Cross-validation interval
//!
//! With `k` folds each fold is tested on only `n / k` examples, so the
//! holdout bound is evaluated at that effective size: the half-width grows by
//! `sqrt(k)` compared with [`crate::langford`] on the full sample. Ignoring
//! the fold factor would treat the folds' test sets as one independent
//! holdout set and understate the width.

use crate::{holdout::hoeffding_half_width, ConfidenceInterval, ConfidenceLevel};
use planner_core::{
    validation::{check_accuracy, check_fold_count, check_sample_size},
    Result,
};
use tracing::{debug, instrument};

/// Interval for an accuracy averaged over `n_splits` cross-validation folds
///
/// `n_splits` must be between 2 and `sample_size`.
#[instrument(level = "trace")]
pub fn cv_interval(
    sample_size: usize,
    n_splits: usize,
    accuracy: f64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    check_sample_size(sample_size)?;
    check_fold_count(n_splits, sample_size)?;
    check_accuracy(accuracy)?;
    let level = ConfidenceLevel::new(confidence_level)?;

    let fold_size = sample_size as f64 / n_splits as f64;
    let half_width = hoeffding_half_width(fold_size, level);
    debug!(fold_size, half_width, "cross-validation interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}
