//! Confidence planning for classifier accuracy
//!
//! Facade over the workspace crates:
//!
//! - [`planner_core`]: errors, input guards and distribution helpers
//! - [`planner_intervals`]: interval estimators, reverse planners and the
//!   method dispatcher
//!
//! The most common items are re-exported at the top level.
//!
//! ```rust
//! use confidence_planner::{estimate_confidence_interval, Method};
//!
//! let ci = estimate_confidence_interval(1000, 0.91, 0.95, Method::HoldoutWilson, None).unwrap();
//! assert!(ci.lower < 0.91 && 0.91 < ci.upper);
//! ```

pub use planner_core;
pub use planner_intervals;

pub use planner_core::{Error, Result};
pub use planner_intervals::{
    clopper_pearson, cv_interval, estimate_confidence_interval, langford, langford_conf,
    langford_reverse, percentiles, prog_val, resample_accuracies, reverse_ttest_pr_conf,
    reverse_ztest_pr, reverse_ztest_pr_conf, ttest_pr, wilson, ztest_pr, AccuracyInput,
    ConfidenceInterval, ConfidenceLevel, IntervalRequest, Method,
};
