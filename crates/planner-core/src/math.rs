//! Distribution helpers for interval estimation
//!
//! Thin wrappers over `statrs` that return the crate's [`Result`] instead of
//! panicking, plus the two-sided critical values every holdout interval needs.

use crate::{Error, Result};

/// Distribution-related mathematical functions
pub mod distributions {
    use super::{Error, Result};

    fn computation_error(what: &str, e: impl std::fmt::Display) -> Error {
        Error::Computation(format!("Failed to create {what}: {e}"))
    }

    /// Lower tail probability `(1 - confidence_level) / 2`
    ///
    /// Critical values are taken as the negated quantile of this tail, which
    /// stays below 1.0 even for levels within one ulp of 1.
    #[inline]
    pub fn lower_tail(confidence_level: f64) -> f64 {
        (1.0 - confidence_level) / 2.0
    }

    const MAX_BISECTIONS: usize = 200;

    /// Invert a monotone CDF on `[low, high]` by bisection
    ///
    /// Stops once the midpoint no longer splits the bracket, i.e. at full
    /// double precision.
    fn bisect_quantile(cdf: impl Fn(f64) -> f64, p: f64, mut low: f64, mut high: f64) -> f64 {
        for _ in 0..MAX_BISECTIONS {
            let mid = 0.5 * (low + high);
            if mid <= low || mid >= high {
                break;
            }
            if cdf(mid) < p {
                low = mid;
            } else {
                high = mid;
            }
        }
        0.5 * (low + high)
    }

    /// Standard normal distribution utilities
    pub mod normal {
        use super::{computation_error, lower_tail, Error, Result};
        use statrs::distribution::{Continuous, ContinuousCDF, Normal};

        const NEWTON_STEPS: usize = 2;

        fn standard() -> Result<Normal> {
            Normal::new(0.0, 1.0).map_err(|e| computation_error("normal distribution", e))
        }

        /// Cumulative distribution function of the standard normal
        pub fn cdf(x: f64) -> Result<f64> {
            Ok(standard()?.cdf(x))
        }

        /// Quantile function (inverse CDF) of the standard normal
        ///
        /// The `statrs` estimate is polished with Newton steps on the CDF.
        pub fn quantile(p: f64) -> Result<f64> {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Computation(format!(
                    "Normal quantile probability {p} outside [0, 1]"
                )));
            }
            let dist = standard()?;
            let mut x = dist.inverse_cdf(p);
            for _ in 0..NEWTON_STEPS {
                let density = dist.pdf(x);
                if !x.is_finite() || density <= 0.0 {
                    break;
                }
                x -= (dist.cdf(x) - p) / density;
            }
            Ok(x)
        }

        /// Two-sided critical value `z` with `P(|Z| <= z) = confidence_level`
        pub fn critical_value(confidence_level: f64) -> Result<f64> {
            Ok(-quantile(lower_tail(confidence_level))?)
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_relative_eq;

            #[test]
            fn test_normal_values() {
                assert_relative_eq!(cdf(0.0).unwrap(), 0.5, epsilon = 1e-15);
                assert_relative_eq!(quantile(0.975).unwrap(), 1.959963984540054, epsilon = 1e-12);
                assert_relative_eq!(critical_value(0.9).unwrap(), 1.6448536269514722, epsilon = 1e-12);
            }

            #[test]
            fn test_cdf_quantile_inverse() {
                for &p in &[0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
                    let x = quantile(p).unwrap();
                    assert_relative_eq!(cdf(x).unwrap(), p, epsilon = 1e-12);
                }
            }

            #[test]
            fn test_critical_value_near_one() {
                let z = critical_value(1.0 - f64::EPSILON / 2.0).unwrap();
                assert!(z.is_finite() && z > 8.0);
            }

            #[test]
            fn test_quantile_out_of_range() {
                assert!(quantile(1.5).is_err());
                assert!(quantile(f64::NAN).is_err());
            }
        }
    }

    /// Student's t distribution utilities
    pub mod students_t {
        use super::{bisect_quantile, computation_error, lower_tail, Error, Result};
        use statrs::distribution::{ContinuousCDF, StudentsT};

        fn standard(freedom: f64) -> Result<StudentsT> {
            StudentsT::new(0.0, 1.0, freedom)
                .map_err(|e| computation_error("t-distribution", e))
        }

        /// Cumulative distribution function with `freedom` degrees of freedom
        pub fn cdf(x: f64, freedom: f64) -> Result<f64> {
            Ok(standard(freedom)?.cdf(x))
        }

        /// Quantile function with `freedom` degrees of freedom
        ///
        /// Brackets the quantile by doubling and bisects the CDF, which is
        /// accurate to the last few ulps for any `freedom`.
        pub fn quantile(p: f64, freedom: f64) -> Result<f64> {
            if !(p > 0.0 && p < 1.0) {
                return Err(Error::Computation(format!(
                    "t quantile probability {p} outside (0, 1)"
                )));
            }
            let dist = standard(freedom)?;

            let (mut low, mut high) = (-1.0_f64, 1.0_f64);
            while dist.cdf(low) > p && low.is_finite() {
                low *= 2.0;
            }
            while dist.cdf(high) < p && high.is_finite() {
                high *= 2.0;
            }
            if !(low.is_finite() && high.is_finite()) {
                return Err(Error::Computation(format!(
                    "t quantile for p = {p} with {freedom} degrees of freedom is not finite"
                )));
            }

            Ok(bisect_quantile(|x| dist.cdf(x), p, low, high))
        }

        /// Two-sided critical value for `confidence_level`
        pub fn critical_value(confidence_level: f64, freedom: f64) -> Result<f64> {
            Ok(-quantile(lower_tail(confidence_level), freedom)?)
        }

    }

    /// Beta distribution utilities
    pub mod beta {
        use super::{bisect_quantile, Error, Result};
        use statrs::function::beta::beta_reg;

        /// Quantile function of `Beta(a, b)`
        ///
        /// Bisects the regularized incomplete beta function on `[0, 1]`.
        pub fn quantile(p: f64, a: f64, b: f64) -> Result<f64> {
            if !(a > 0.0 && b > 0.0) {
                return Err(Error::Computation(format!(
                    "Beta shape parameters must be positive, got ({a}, {b})"
                )));
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Computation(format!(
                    "Beta quantile probability {p} outside [0, 1]"
                )));
            }
            if p == 0.0 {
                return Ok(0.0);
            }
            if p == 1.0 {
                return Ok(1.0);
            }

            Ok(bisect_quantile(|x| beta_reg(a, b, x), p, 0.0, 1.0))
        }

    }
}
