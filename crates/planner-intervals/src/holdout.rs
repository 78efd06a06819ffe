//! Holdout confidence intervals
//!
//! Intervals for an accuracy measured once on `n` held-out examples. The
//! normal, Student's t, Wilson and Clopper-Pearson variants size their
//! half-width for the worst case `p = 0.5`, where the binomial variance
//! `p(1 - p)` peaks, and centre it on the observed accuracy. That keeps the
//! width a function of `n` and the confidence level only, which is what the
//! reverse planners in [`crate::reverse`] invert.

use crate::{ConfidenceInterval, ConfidenceLevel};
use planner_core::{
    math::distributions::{beta, normal, students_t},
    validation::{check_accuracy, check_sample_size, check_t_sample_size},
    Result,
};
use tracing::{debug, instrument};

/// Binomial variance `p(1 - p)` at its maximum `p = 0.5`
pub(crate) const WORST_CASE_VARIANCE: f64 = 0.25;

/// Hoeffding half-width `sqrt(ln(2 / alpha) / (2 m))` for `m` test examples
pub(crate) fn hoeffding_half_width(effective_size: f64, level: ConfidenceLevel) -> f64 {
    ((2.0 / level.alpha()).ln() / (2.0 * effective_size)).sqrt()
}

fn check_holdout(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceLevel> {
    check_sample_size(sample_size)?;
    check_accuracy(accuracy)?;
    ConfidenceLevel::new(confidence_level)
}

/// Normal-approximation (z-test) interval
///
/// `accuracy ± z * sqrt(0.25 / n)` with `z` the two-sided normal critical value.
#[instrument(level = "trace")]
pub fn ztest_pr(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceInterval> {
    let level = check_holdout(sample_size, accuracy, confidence_level)?;

    let z = normal::critical_value(level.value())?;
    let half_width = z * (WORST_CASE_VARIANCE / sample_size as f64).sqrt();
    debug!(z, half_width, "z-test interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}

/// Student's t interval with `n - 1` degrees of freedom
///
/// Wider than [`ztest_pr`] for small samples. Needs at least two examples.
#[instrument(level = "trace")]
pub fn ttest_pr(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceInterval> {
    let level = check_holdout(sample_size, accuracy, confidence_level)?;
    check_t_sample_size(sample_size)?;

    let t = students_t::critical_value(level.value(), (sample_size - 1) as f64)?;
    let half_width = t * (WORST_CASE_VARIANCE / sample_size as f64).sqrt();
    debug!(t, half_width, "t-test interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}

/// Wilson score interval
///
/// The score half-width shrinks the normal one by `1 + z²/n`, which matters
/// for small `n`.
#[instrument(level = "trace")]
pub fn wilson(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceInterval> {
    let level = check_holdout(sample_size, accuracy, confidence_level)?;

    let n = sample_size as f64;
    let z = normal::critical_value(level.value())?;
    let z2 = z * z;
    let half_width =
        z / (1.0 + z2 / n) * (WORST_CASE_VARIANCE / n + z2 / (4.0 * n * n)).sqrt();
    debug!(z, half_width, "Wilson interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}

/// Clopper-Pearson (exact binomial) interval
///
/// The half-width is the distance from `0.5` to the `alpha/2` quantile of
/// `Beta(n/2, n/2 + 1)`, the exact lower bound for `n/2` successes. The shape
/// parameters never depend on the accuracy, so accuracies of exactly 0 or 1
/// only hit the `[0, 1]` clamp.
#[instrument(level = "trace")]
pub fn clopper_pearson(
    sample_size: usize,
    accuracy: f64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    let level = check_holdout(sample_size, accuracy, confidence_level)?;

    let successes = sample_size as f64 / 2.0;
    let lower = beta::quantile(level.tail_probability(), successes, successes + 1.0)?;
    let half_width = 0.5 - lower;
    debug!(lower, half_width, "Clopper-Pearson interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}

/// Langford's holdout bound
///
/// Closed-form Hoeffding bound `sqrt(ln(2 / alpha) / (2n))`, valid for any
/// accuracy without a normal approximation.
#[instrument(level = "trace")]
pub fn langford(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceInterval> {
    let level = check_holdout(sample_size, accuracy, confidence_level)?;

    let half_width = hoeffding_half_width(sample_size as f64, level);
    debug!(half_width, "Langford interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    type Estimator = fn(usize, f64, f64) -> Result<ConfidenceInterval>;

    const ESTIMATORS: [(&str, Estimator); 5] = [
        ("ztest_pr", ztest_pr),
        ("ttest_pr", ttest_pr),
        ("wilson", wilson),
        ("clopper_pearson", clopper_pearson),
        ("langford", langford),
    ];

    #[test]
    fn test_reference_values() {
        let ci = clopper_pearson(555, 0.80, 0.90).unwrap();
        assert_relative_eq!(ci.lower, 0.7642507155996638, epsilon = 1e-10);
        assert_relative_eq!(ci.upper, 0.8357492844003362, epsilon = 1e-10);

        let ci = wilson(132, 0.8, 0.8).unwrap();
        assert_relative_eq!(ci.lower, 0.7445713886626126, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 0.8554286113373875, epsilon = 1e-12);

        let ci = ztest_pr(321, 0.8, 0.9).unwrap();
        assert_relative_eq!(ci.lower, 0.754096611561152, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 0.845903388438848, epsilon = 1e-12);

        let ci = ttest_pr(100, 0.7, 0.88).unwrap();
        assert_relative_eq!(ci.lower, 0.6215845716640249, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 0.778415428335975, epsilon = 1e-12);

        let ci = langford(555, 0.80, 0.90).unwrap();
        assert_relative_eq!(ci.lower, 0.748049466758245, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 0.8519505332417551, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_inputs() {
        for (name, estimate) in ESTIMATORS {
            assert!(estimate(0, 0.78, 0.9).is_err(), "{name}: sample size 0");
            assert!(estimate(100, 1.0034, 0.9).is_err(), "{name}: accuracy > 1");
            assert!(estimate(57, -0.000432, 0.9).is_err(), "{name}: accuracy < 0");
            assert!(estimate(79, 0.88, 0.0).is_err(), "{name}: confidence 0");
            assert!(estimate(79, 0.88, 1.0).is_err(), "{name}: confidence 1");

            let err = estimate(79, 0.88, 1.0).unwrap_err();
            assert!(err.is_domain_error(), "{name}: {err}");
        }
    }

    #[test]
    fn test_extreme_accuracies_stay_in_unit_interval() {
        for (name, estimate) in ESTIMATORS {
            for acc in [0.02, 0.98] {
                let ci = estimate(100, acc, 0.9).unwrap();
                assert!(ci.lower >= 0.0 && ci.upper <= 1.0, "{name}: {ci}");
                assert!(ci.contains(acc), "{name}: {ci}");
            }
        }
    }

    #[test]
    fn test_clopper_pearson_degenerate_accuracies() {
        let ci = clopper_pearson(50, 0.0, 0.95).unwrap();
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper > 0.0);

        let ci = clopper_pearson(50, 1.0, 0.95).unwrap();
        assert_eq!(ci.upper, 1.0);
        assert!(ci.lower < 1.0);
    }

    #[test]
    fn test_t_wider_than_z_for_small_samples() {
        let z = ztest_pr(10, 0.7, 0.95).unwrap();
        let t = ttest_pr(10, 0.7, 0.95).unwrap();
        assert!(t.width() > z.width());
    }

    #[test]
    fn test_confidence_one_ulp_below_one() {
        let level = 1.0 - f64::EPSILON / 2.0;
        for (name, estimator) in ESTIMATORS {
            let ci = estimator(10, 0.5, level).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(ci.lower >= 0.0 && ci.upper <= 1.0, "{name}");
            assert!(ci.width() > 0.9, "{name}: {ci}");
        }
    }

    #[test]
    fn test_t_needs_two_examples() {
        assert!(ttest_pr(1, 0.5, 0.9).is_err());
        assert!(ttest_pr(2, 0.5, 0.9).is_ok());
    }

    #[test]
    fn test_wilson_narrower_than_z() {
        let z = ztest_pr(20, 0.5, 0.95).unwrap();
        let w = wilson(20, 0.5, 0.95).unwrap();
        assert!(w.width() < z.width());
    }

    #[test]
    fn test_clopper_pearson_is_conservative() {
        // The exact interval never undercuts the normal approximation
        for n in [10, 50, 200, 1000] {
            let z = ztest_pr(n, 0.5, 0.95).unwrap();
            let cp = clopper_pearson(n, 0.5, 0.95).unwrap();
            assert!(cp.width() >= z.width(), "n = {n}");
        }
    }

    #[test]
    fn test_higher_confidence_gives_wider_interval() {
        for (name, estimate) in ESTIMATORS {
            let ci_90 = estimate(200, 0.75, 0.90).unwrap();
            let ci_95 = estimate(200, 0.75, 0.95).unwrap();
            let ci_99 = estimate(200, 0.75, 0.99).unwrap();
            assert!(ci_90.width() < ci_95.width(), "{name}");
            assert!(ci_95.width() < ci_99.width(), "{name}");
        }
    }
}
