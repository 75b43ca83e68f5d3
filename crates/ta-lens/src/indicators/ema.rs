//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent prices more heavily than the SMA and responds
//! faster to price changes.
//!
//! # Algorithm
//!
//! The recursive, non-adjusted EMA: the first output equals the first price,
//! every later output blends the new price with the previous output. There is
//! no warm-up window, so every position is defined.
//!
//! # Formula
//!
//! ```text
//! α      = 2 / (period + 1)
//! EMA[0] = P[0]
//! EMA[i] = α × P[i] + (1 - α) × EMA[i-1]
//! ```
//!
//! Each value depends on the previous one, so the computation is a single
//! sequential fold and is not split across threads.
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = ema(&data, 3).unwrap(); // α = 0.5
//!
//! assert_eq!(result[0], 1.0);
//! assert!((result[1] - 1.5).abs() < 1e-10);
//! assert!((result[2] - 2.25).abs() < 1e-10);
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_period, validate_prices, SeriesElement};

/// Computes the Exponential Moving Average using standard smoothing.
///
/// Standard smoothing uses `α = 2 / (period + 1)`. The output has the same
/// length as the input and no undefined positions.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidParameter`)
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(prices: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = standard_alpha::<T>(period)?;
    validate_prices(prices)?;
    Ok(ema_fold(prices, alpha))
}

/// Computes the EMA with a caller-supplied smoothing factor.
///
/// # Errors
///
/// Returns an error if:
/// - `alpha` is not in `(0, 1]` (`Error::InvalidParameter`)
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
///
/// # Example
///
/// ```
/// use ta_lens::indicators::ema::ema_with_alpha;
///
/// let result = ema_with_alpha(&[10.0_f64, 20.0], 0.25).unwrap();
/// assert!((result[1] - 12.5).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema_with_alpha<T: SeriesElement>(prices: &[T], alpha: T) -> Result<Vec<T>> {
    if !(alpha > T::zero() && alpha <= T::one()) {
        return Err(Error::InvalidParameter {
            parameter: "alpha",
            reason: "smoothing factor must be in (0, 1]",
        });
    }
    validate_prices(prices)?;
    Ok(ema_fold(prices, alpha))
}

/// Computes the standard EMA smoothing factor: α = 2 / (period + 1).
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if the period is zero.
pub fn standard_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period)?;
    let period_plus_one = T::from_usize(period + 1)?;
    Ok(T::two() / period_plus_one)
}

/// Runs the EMA recurrence over already-validated input.
pub(crate) fn ema_fold<T: SeriesElement>(prices: &[T], alpha: T) -> Vec<T> {
    let one_minus_alpha = T::one() - alpha;

    prices
        .iter()
        .fold(Vec::with_capacity(prices.len()), |mut out, &price| {
            let next = match out.last() {
                Some(&prev) => alpha * price + one_minus_alpha * prev,
                None => price,
            };
            out.push(next);
            out
        })
}
