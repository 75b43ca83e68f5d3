//! Single-bar pattern predicates.
//!
//! # Doji
//!
//! ```text
//! |open - close| < threshold × (open + close) / 2
//! ```
//!
//! # Hammer
//!
//! Both shadows are measured from the bottom of the body:
//!
//! ```text
//! body  = |close - open|
//! upper = high - min(open, close)
//! lower = min(open, close) - low
//!
//! hammer = body < 0.1 × upper  and  lower > 2 × body
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;
use crate::utils::lit;

use super::geometry::{body_bottom, real_body};

/// Default doji threshold: the body must be under 1% of the body midpoint.
pub const DOJI_THRESHOLD: f64 = 0.01;

/// A hammer's body must be smaller than this fraction of its upper span.
pub const HAMMER_BODY_RATIO: f64 = 0.1;

/// A hammer's lower shadow must exceed this multiple of its body.
pub const HAMMER_SHADOW_MULTIPLE: f64 = 2.0;

/// Returns true when open and close are nearly equal relative to their midpoint.
///
/// A bar whose `open + close` is exactly zero has no meaningful midpoint and
/// is never a doji.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `threshold` is not finite or lies
/// outside `(0, 1]`.
///
/// # Example
///
/// ```
/// use ta_lens::candlestick::{is_doji, DOJI_THRESHOLD};
///
/// assert!(is_doji(100.0_f64, 100.05, DOJI_THRESHOLD).unwrap());
/// assert!(!is_doji(100.0_f64, 105.0, DOJI_THRESHOLD).unwrap());
/// ```
pub fn is_doji<T: SeriesElement>(open: T, close: T, threshold: T) -> Result<bool> {
    if !threshold.is_finite() || threshold <= T::zero() || threshold > T::one() {
        return Err(Error::InvalidParameter {
            parameter: "threshold",
            reason: "doji threshold must be finite and in (0, 1]",
        });
    }

    let sum = open + close;
    if sum == T::zero() {
        return Ok(false);
    }

    Ok(real_body(open, close) < threshold * sum / T::two())
}

/// Returns true when the bar has a tiny body sitting on a long lower shadow.
///
/// Uses the fixed [`HAMMER_BODY_RATIO`] and [`HAMMER_SHADOW_MULTIPLE`].
/// A flat bar (`open == close == high == low`) is not a hammer because its
/// lower shadow is not strictly greater than zero.
///
/// # Example
///
/// ```
/// use ta_lens::candlestick::is_hammer;
///
/// // body 0.1, upper span 5.1, lower shadow 5.0
/// assert!(is_hammer(95.0_f64, 105.1, 100.0, 100.1));
/// assert!(!is_hammer(99.0_f64, 103.0, 100.0, 102.0));
/// ```
#[must_use]
pub fn is_hammer<T: SeriesElement>(low: T, high: T, open: T, close: T) -> bool {
    let body = real_body(open, close);
    let bottom = body_bottom(open, close);
    let upper = high - bottom;
    let lower = bottom - low;

    body < lit::<T>(HAMMER_BODY_RATIO) * upper && lower > lit::<T>(HAMMER_SHADOW_MULTIPLE) * body
}
