//! Utility functions for working with accuracy slices

/// Sort data and return a new vector
///
/// Uses the IEEE total order, so NaN values end up after every number.
///
/// # Examples
///
/// ```rust
/// use planner_core::utils::sorted;
///
/// let data = vec![0.8, 0.77, 0.9, 0.87, 0.7];
/// assert_eq!(sorted(&data), vec![0.7, 0.77, 0.8, 0.87, 0.9]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linearly interpolated quantile of pre-sorted data
///
/// The rank of quantile `q` is `q * (n - 1)`; values between two order
/// statistics are interpolated linearly. Returns `None` for empty input.
///
/// # Examples
///
/// ```rust
/// use planner_core::utils::quantile_sorted;
///
/// let data = [0.7, 0.77, 0.8, 0.87, 0.9];
/// assert_eq!(quantile_sorted(&data, 0.5), Some(0.8));
/// ```
pub fn quantile_sorted(sorted_data: &[f64], q: f64) -> Option<f64> {
    let last = sorted_data.len().checked_sub(1)?;
    let rank = q.clamp(0.0, 1.0) * last as f64;
    let below = rank.floor() as usize;
    let above = (below + 1).min(last);
    let fraction = rank - below as f64;
    let low = sorted_data[below];
    let high = sorted_data[above];
    Some(low + (high - low) * fraction)
}

/// Median of unsorted data, `None` for empty input
pub fn median(data: &[f64]) -> Option<f64> {
    quantile_sorted(&sorted(data), 0.5)
}
