//! Input guards shared by every estimator
//!
//! Each guard returns `Ok(())` when its argument lies inside the documented
//! domain and a domain [`Error`] otherwise, so estimators can chain them with
//! `?` before doing any numeric work.

use crate::{Error, Result};

/// Sample size must be at least one observation
pub fn check_sample_size(sample_size: usize) -> Result<()> {
    if sample_size < 1 {
        return Err(Error::domain("sample_size", sample_size as f64, "at least 1"));
    }
    Ok(())
}

/// Sample size must leave at least one degree of freedom for Student's t
pub fn check_t_sample_size(sample_size: usize) -> Result<()> {
    check_sample_size(sample_size)?;
    if sample_size < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample_size,
        });
    }
    Ok(())
}

/// Accuracy must lie in `[0, 1]`
pub fn check_accuracy(accuracy: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&accuracy) {
        return Err(Error::domain("accuracy", accuracy, "in [0, 1]"));
    }
    Ok(())
}

/// Every resampled accuracy must lie in `[0, 1]` and the sequence must be non-empty
pub fn check_accuracies(accuracies: &[f64]) -> Result<()> {
    if accuracies.is_empty() {
        return Err(Error::empty_input());
    }
    accuracies.iter().try_for_each(|&a| check_accuracy(a))
}

/// Confidence level must lie strictly inside `(0, 1)`
pub fn check_confidence_level(confidence_level: f64) -> Result<()> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::domain(
            "confidence_level",
            confidence_level,
            "in (0, 1)",
        ));
    }
    Ok(())
}

/// Difference (half-width) must lie in `[0, 1]`
pub fn check_difference(difference: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&difference) {
        return Err(Error::domain("difference", difference, "in [0, 1]"));
    }
    Ok(())
}

/// Difference used as a divisor must be in `(0, 1]`
pub fn check_positive_difference(difference: f64) -> Result<()> {
    check_difference(difference)?;
    if difference == 0.0 {
        return Err(Error::domain("difference", difference, "in (0, 1]"));
    }
    Ok(())
}

/// Fold count must be in `[2, sample_size]`
pub fn check_fold_count(n_splits: usize, sample_size: usize) -> Result<()> {
    if n_splits < 2 {
        return Err(Error::domain("n_splits", n_splits as f64, "at least 2"));
    }
    if n_splits > sample_size {
        return Err(Error::domain(
            "n_splits",
            n_splits as f64,
            "at most sample_size",
        ));
    }
    Ok(())
}
