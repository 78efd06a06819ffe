//! High-level API for accuracy confidence intervals
//!
//! [`estimate_confidence_interval`] is the single entry point for callers that
//! pick the method at runtime; [`IntervalRequest`] bundles its parameters so
//! they can be loaded from configuration.

use crate::{
    bootstrap::percentiles,
    cross_validation::cv_interval,
    holdout::{clopper_pearson, langford, ttest_pr, wilson, ztest_pr},
    progressive::prog_val,
    ConfidenceInterval, Method,
};
use planner_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default confidence level for requests that do not set one
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Accuracy argument of the dispatcher
///
/// Every method takes a single observed accuracy except
/// [`Method::Bootstrap`], which takes the accuracies of the resamples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccuracyInput<'a> {
    /// Observed accuracy in `[0, 1]`
    Point(f64),
    /// Accuracies of bootstrap resamples, each in `[0, 1]`
    Resamples(&'a [f64]),
}

impl From<f64> for AccuracyInput<'_> {
    fn from(accuracy: f64) -> Self {
        Self::Point(accuracy)
    }
}

impl<'a> From<&'a [f64]> for AccuracyInput<'a> {
    fn from(accuracies: &'a [f64]) -> Self {
        Self::Resamples(accuracies)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for AccuracyInput<'a> {
    fn from(accuracies: &'a [f64; N]) -> Self {
        Self::Resamples(accuracies)
    }
}

impl<'a> From<&'a Vec<f64>> for AccuracyInput<'a> {
    fn from(accuracies: &'a Vec<f64>) -> Self {
        Self::Resamples(accuracies)
    }
}

fn point_accuracy(method: Method, accuracy: AccuracyInput<'_>) -> Result<f64> {
    match accuracy {
        AccuracyInput::Point(accuracy) => Ok(accuracy),
        AccuracyInput::Resamples(_) => Err(Error::InvalidInput(format!(
            "{method} takes a single accuracy, not resampled accuracies"
        ))),
    }
}

/// Estimate a confidence interval with the selected method
///
/// `n_splits` is forwarded to [`Method::Cv`] only, which requires it; the
/// other methods ignore it. [`Method::Bootstrap`] reads the interval off the
/// resampled accuracies and ignores `sample_size`.
///
/// # Example
/// ```rust
/// use planner_intervals::{estimate_confidence_interval, wilson, Method};
///
/// let ci = estimate_confidence_interval(300, 0.75, 0.90, Method::HoldoutWilson, None).unwrap();
/// assert_eq!(ci, wilson(300, 0.75, 0.90).unwrap());
///
/// let method: Method = "cv".parse().unwrap();
/// let ci = estimate_confidence_interval(300, 0.75, 0.90, method, Some(5)).unwrap();
/// assert!(ci.contains(0.75));
/// ```
#[instrument(level = "trace", skip(accuracy))]
pub fn estimate_confidence_interval<'a>(
    sample_size: usize,
    accuracy: impl Into<AccuracyInput<'a>>,
    confidence_level: f64,
    method: Method,
    n_splits: Option<usize>,
) -> Result<ConfidenceInterval> {
    let accuracy = accuracy.into();
    if n_splits.is_some() && !method.requires_folds() {
        debug!(%method, "ignoring n_splits for a method without folds");
    }

    match method {
        Method::HoldoutZTest => ztest_pr(sample_size, point_accuracy(method, accuracy)?, confidence_level),
        Method::HoldoutTTest => ttest_pr(sample_size, point_accuracy(method, accuracy)?, confidence_level),
        Method::HoldoutLangford => {
            langford(sample_size, point_accuracy(method, accuracy)?, confidence_level)
        }
        Method::HoldoutWilson => wilson(sample_size, point_accuracy(method, accuracy)?, confidence_level),
        Method::HoldoutClopperPearson => {
            clopper_pearson(sample_size, point_accuracy(method, accuracy)?, confidence_level)
        }
        Method::Bootstrap => match accuracy {
            AccuracyInput::Resamples(accuracies) => percentiles(accuracies, confidence_level),
            AccuracyInput::Point(_) => Err(Error::InvalidInput(
                "bootstrap needs the accuracies of the resamples".to_string(),
            )),
        },
        Method::Cv => {
            let n_splits = n_splits
                .ok_or_else(|| Error::InvalidInput("cv needs n_splits".to_string()))?;
            cv_interval(sample_size, n_splits, point_accuracy(method, accuracy)?, confidence_level)
        }
        Method::Progressive => prog_val(sample_size, point_accuracy(method, accuracy)?, confidence_level),
    }
}

/// Dispatcher parameters that do not depend on the measured data
///
/// # Example
/// ```rust
/// use planner_intervals::{IntervalRequest, Method};
///
/// let request = IntervalRequest::new(Method::Cv)
///     .with_confidence_level(0.9)
///     .with_folds(10);
/// let ci = request.estimate(1000, 0.82).unwrap();
/// assert!(ci.contains(0.82));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalRequest {
    /// Estimation method
    pub method: Method,
    /// Confidence level in `(0, 1)`
    pub confidence_level: f64,
    /// Fold count, used by [`Method::Cv`] only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_splits: Option<usize>,
}

impl Default for IntervalRequest {
    fn default() -> Self {
        Self {
            method: Method::default(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            n_splits: None,
        }
    }
}

impl IntervalRequest {
    /// Create a request for `method` at the default confidence level
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set the number of cross-validation folds
    pub fn with_folds(mut self, n_splits: usize) -> Self {
        self.n_splits = Some(n_splits);
        self
    }

    /// Run the dispatcher with this request's parameters
    pub fn estimate<'a>(
        &self,
        sample_size: usize,
        accuracy: impl Into<AccuracyInput<'a>>,
    ) -> Result<ConfidenceInterval> {
        estimate_confidence_interval(
            sample_size,
            accuracy,
            self.confidence_level,
            self.method,
            self.n_splits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_rejects_point_accuracy() {
        let err = estimate_confidence_interval(300, 0.75, 0.9, Method::Bootstrap, None).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_point_methods_reject_resamples() {
        let resamples = [0.8, 0.7];
        for method in Method::ALL.into_iter().filter(|m| !m.requires_resamples()) {
            let result = estimate_confidence_interval(300, &resamples, 0.9, method, Some(5));
            assert!(result.is_err(), "{method}");
        }
    }

    #[test]
    fn test_cv_requires_folds() {
        let err = estimate_confidence_interval(300, 0.75, 0.9, Method::Cv, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_folds_ignored_outside_cv() {
        let with = estimate_confidence_interval(300, 0.75, 0.9, Method::Progressive, Some(5)).unwrap();
        let without = estimate_confidence_interval(300, 0.75, 0.9, Method::Progressive, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_request_defaults() {
        let request = IntervalRequest::default();
        assert_eq!(request.method, Method::HoldoutWilson);
        assert_eq!(request.confidence_level, DEFAULT_CONFIDENCE_LEVEL);
        assert_eq!(request.n_splits, None);
    }

    #[test]
    fn test_request_from_partial_json() {
        let request: IntervalRequest =
            serde_json::from_str(r#"{"method": "cv", "n_splits": 7}"#).unwrap();
        assert_eq!(request, IntervalRequest::new(Method::Cv).with_folds(7));

        let json = serde_json::to_string(&IntervalRequest::new(Method::Progressive)).unwrap();
        assert!(!json.contains("n_splits"));
        assert!(json.contains("\"progressive\""));
    }

    #[test]
    fn test_request_rejects_unknown_method() {
        let result = serde_json::from_str::<IntervalRequest>(r#"{"method": "random_method"}"#);
        assert!(result.is_err());
    }
}
