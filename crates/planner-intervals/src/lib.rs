//! Confidence intervals for classifier accuracy
//!
//! This crate answers two planning questions about an accuracy measured on a
//! test sample:
//!
//! - **Forward**: given the sample size, the observed accuracy and a
//!   confidence level, which interval bounds the true accuracy?
//! - **Reverse**: given a target half-width, how many examples are needed, or
//!   which confidence level does a given sample size reach?
//!
//! # Methods
//!
//! - **Holdout**: z-test, t-test, Wilson, Clopper-Pearson and Langford
//!   intervals for a single test set
//! - **Cross-validation**: Langford's bound over the per-fold test size
//! - **Progressive validation**: Langford's bound over the whole sequence
//! - **Bootstrap**: empirical percentiles of resampled accuracies
//!
//! Every interval is clamped to `[0, 1]`; every function validates its input
//! and returns a [`planner_core::Error`] instead of panicking.
//!
//! # Examples
//!
//! ## Choosing the method at runtime
//!
//! ```rust
//! use planner_intervals::{estimate_confidence_interval, Method};
//!
//! let method: Method = "holdout_clopper_pearson".parse().unwrap();
//! let ci = estimate_confidence_interval(555, 0.80, 0.90, method, None).unwrap();
//! assert!(ci.contains(0.80));
//! println!("{ci}");
//! ```
//!
//! ## Planning a test set
//!
//! ```rust
//! use planner_intervals::{langford_reverse, reverse_ztest_pr};
//!
//! // Examples needed for ±5% at 95% confidence
//! let n_normal = reverse_ztest_pr(0.05, 0.95).unwrap();
//! let n_langford = langford_reverse(0.05, 0.95).unwrap();
//! assert!(n_langford > n_normal);
//! ```

pub mod api;
mod bootstrap;
mod cross_validation;
mod holdout;
mod method;
mod progressive;
mod reverse;
mod types;

// Re-exports
pub use api::{
    estimate_confidence_interval, AccuracyInput, IntervalRequest, DEFAULT_CONFIDENCE_LEVEL,
};
pub use bootstrap::{percentiles, resample_accuracies, DEFAULT_RESAMPLES};
pub use cross_validation::cv_interval;
pub use holdout::{clopper_pearson, langford, ttest_pr, wilson, ztest_pr};
pub use method::Method;
pub use planner_core::{Error, Result};
pub use progressive::prog_val;
pub use reverse::{
    langford_conf, langford_reverse, reverse_ttest_pr_conf, reverse_ztest_pr,
    reverse_ztest_pr_conf,
};
pub use types::{ConfidenceInterval, ConfidenceLevel};
