//! Progressive validation interval
//!
//! Each example is scored by a model trained on the examples before it and
//! then added to the training set. The resulting accuracy carries the same
//! Hoeffding guarantee as a holdout set of `n` examples even though every
//! example is also used for training.

use crate::{holdout::hoeffding_half_width, ConfidenceInterval, ConfidenceLevel};
use planner_core::{
    validation::{check_accuracy, check_sample_size},
    Result,
};
use tracing::{debug, instrument};

/// Interval for a progressive-validation accuracy over `sample_size` examples
#[instrument(level = "trace")]
pub fn prog_val(sample_size: usize, accuracy: f64, confidence_level: f64) -> Result<ConfidenceInterval> {
    check_sample_size(sample_size)?;
    check_accuracy(accuracy)?;
    let level = ConfidenceLevel::new(confidence_level)?;

    let half_width = hoeffding_half_width(sample_size as f64, level);
    debug!(half_width, "progressive validation interval");

    Ok(ConfidenceInterval::centered(accuracy, half_width, confidence_level))
}
