//! Utility functions for ta-lens.
//!
//! Tolerance-based float comparison and helpers for inspecting
//! [`IndicatorSeries`](crate::indicators::IndicatorSeries) outputs.
//!
//! # Example
//!
//! ```
//! use ta_lens::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use num_traits::NumCast;

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results that accumulate many operations (EMA chains, MACD).
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other.
/// NaN never compares equal.
///
/// ```
/// use ta_lens::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(!approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than [`approx_eq`] when comparing values of very
/// different magnitudes.
///
/// ```
/// use ta_lens::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    diff / max_abs < rel_tolerance
}

/// Count the undefined positions in an indicator series.
///
/// ```
/// use ta_lens::utils::count_undefined;
///
/// let series = vec![None, Some(1.0), None, Some(2.0)];
/// assert_eq!(count_undefined(&series), 2);
/// ```
#[inline]
#[must_use]
pub fn count_undefined<T>(series: &[Option<T>]) -> usize {
    series.iter().filter(|x| x.is_none()).count()
}

/// Count the undefined positions at the start of an indicator series.
///
/// For a windowed indicator this equals its lookback.
///
/// ```
/// use ta_lens::utils::count_undefined_prefix;
///
/// let series = vec![None, None, Some(1.0), Some(2.0)];
/// assert_eq!(count_undefined_prefix(&series), 2);
/// ```
#[inline]
#[must_use]
pub fn count_undefined_prefix<T>(series: &[Option<T>]) -> usize {
    series.iter().take_while(|x| x.is_none()).count()
}

/// Converts an `f64` literal to `T`, yielding NaN if it cannot be represented.
///
/// Used for fixed pattern thresholds inside predicates that return `bool`:
/// a NaN threshold makes every comparison false, so the predicate reports
/// no pattern instead of panicking.
#[inline]
pub(crate) fn lit<T: SeriesElement>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}
