//! Reverse planning: solve the interval formulas for the missing quantity
//!
//! Given a target half-width `difference`, these functions answer either
//! "how many test examples do I need at this confidence level?" or "what
//! confidence does this many examples buy me?". They invert the worst-case
//! half-widths of [`crate::holdout`], so the answers hold for any accuracy.

use crate::{holdout::WORST_CASE_VARIANCE, ConfidenceLevel};
use planner_core::{
    math::distributions::{normal, students_t},
    validation::{check_difference, check_positive_difference, check_sample_size, check_t_sample_size},
    Error, Result,
};
use tracing::debug;

/// Round a required sample size up to a whole, non-zero count
///
/// Fails instead of saturating when the count does not fit in `usize`.
fn required_examples(exact: f64) -> Result<usize> {
    if !exact.is_finite() || exact.ceil() >= usize::MAX as f64 {
        return Err(Error::Computation(format!(
            "Required sample size {exact} is not representable"
        )));
    }
    Ok((exact.ceil() as usize).max(1))
}

/// Sample size for which the z-test half-width is at most `difference`
///
/// Solves `z * sqrt(0.25 / n) = difference` for `n`.
pub fn reverse_ztest_pr(difference: f64, confidence_level: f64) -> Result<usize> {
    check_positive_difference(difference)?;
    let level = ConfidenceLevel::new(confidence_level)?;

    let z = normal::critical_value(level.value())?;
    let exact = z * z * WORST_CASE_VARIANCE / (difference * difference);
    let n = required_examples(exact)?;
    debug!(difference, confidence_level, z, n, "reverse z-test sample size");
    Ok(n)
}

/// Confidence level reached by a z-test half-width of `difference` on `sample_size` examples
///
/// Returns `2 * Φ(difference / sqrt(0.25 / n)) - 1`.
pub fn reverse_ztest_pr_conf(difference: f64, sample_size: usize) -> Result<f64> {
    check_difference(difference)?;
    check_sample_size(sample_size)?;

    let z = difference / (WORST_CASE_VARIANCE / sample_size as f64).sqrt();
    let confidence = 2.0 * normal::cdf(z)? - 1.0;
    debug!(difference, sample_size, z, confidence, "reverse z-test confidence");
    Ok(confidence)
}

/// Confidence level reached by a t-test half-width of `difference` on `sample_size` examples
///
/// Same inversion as [`reverse_ztest_pr_conf`] with the Student's t CDF on
/// `n - 1` degrees of freedom, so it needs at least two examples.
pub fn reverse_ttest_pr_conf(difference: f64, sample_size: usize) -> Result<f64> {
    check_difference(difference)?;
    check_t_sample_size(sample_size)?;

    let t = difference / (WORST_CASE_VARIANCE / sample_size as f64).sqrt();
    let confidence = 2.0 * students_t::cdf(t, (sample_size - 1) as f64)? - 1.0;
    debug!(difference, sample_size, t, confidence, "reverse t-test confidence");
    Ok(confidence)
}

/// Confidence level guaranteed by Langford's bound for half-width `difference`
///
/// Inverts `difference = sqrt(ln(2 / alpha) / (2n))`, i.e.
/// `1 - 2 * exp(-2 n difference²)`, floored at zero when the bound is vacuous.
pub fn langford_conf(difference: f64, sample_size: usize) -> Result<f64> {
    check_difference(difference)?;
    check_sample_size(sample_size)?;

    let n = sample_size as f64;
    let confidence = (1.0 - 2.0 * (-2.0 * n * difference * difference).exp()).max(0.0);
    debug!(difference, sample_size, confidence, "Langford confidence");
    Ok(confidence)
}

/// Sample size for which Langford's half-width is at most `difference`
pub fn langford_reverse(difference: f64, confidence_level: f64) -> Result<usize> {
    check_positive_difference(difference)?;
    let level = ConfidenceLevel::new(confidence_level)?;

    let exact = (2.0 / level.alpha()).ln() / (2.0 * difference * difference);
    let n = required_examples(exact)?;
    debug!(difference, confidence_level, n, "Langford sample size");
    Ok(n)
}
