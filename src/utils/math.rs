//! Mathematical utility functions for statistical analysis
//!
//! This module provides standardised percentage and mean calculations
//! with proper zero-division handling for use across the analysis module.

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Arguments
/// * `part` - The numerator (portion of the total)
/// * `total` - The denominator (total count)
///
/// # Returns
/// Percentage as a float (0.0 to 100.0), or 0.0 if total is zero.
///
/// # Examples
/// ```
/// use tweet_analyser::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(0, 100), 0.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Arithmetic mean of unsigned values, `None` for an empty slice.
///
/// Sums in `u128` so large engagement counters cannot overflow.
///
/// # Examples
/// ```
/// use tweet_analyser::utils::math::mean_u64;
///
/// assert_eq!(mean_u64(&[1, 2, 3, 4]), Some(2.5));
/// assert_eq!(mean_u64(&[]), None);
/// ```
pub fn mean_u64(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u128 = values.iter().map(|&v| v as u128).sum();
    Some(sum as f64 / values.len() as f64)
}
