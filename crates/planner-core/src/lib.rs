//! Core types for accuracy confidence planning
//!
//! This crate holds the pieces every interval estimator shares:
//!
//! - [`Error`] and [`Result`], the single error taxonomy of the workspace
//! - [`validation`], guard functions that reject out-of-domain inputs
//! - [`math`], normal, Student's t and Beta helpers built on `statrs`
//! - [`utils`], sorting and interpolated quantiles for accuracy slices
//!
//! # Example
//!
//! ```rust
//! use planner_core::validation::{check_accuracy, check_confidence_level};
//!
//! assert!(check_accuracy(0.8).is_ok());
//! assert!(check_confidence_level(1.0).is_err());
//! ```

pub mod error;
pub mod math;
pub mod utils;
pub mod validation;

pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::validation::{
        check_accuracies, check_accuracy, check_confidence_level, check_difference,
        check_fold_count, check_sample_size,
    };
}
