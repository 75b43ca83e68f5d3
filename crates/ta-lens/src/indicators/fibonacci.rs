//! Fibonacci retracement levels.
//!
//! Given a swing high and a swing low, the retracement ratios are applied
//! downward from the high (support) and upward from the low (resistance).
//!
//! # Formula
//!
//! ```text
//! range              = swing_high - swing_low
//! Support Level n    = swing_high - ratio[n] × range
//! Resistance Level n = swing_low  + ratio[n] × range
//! ratio              = [0.236, 0.382, 0.618]
//! ```
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::fibonacci::fibonacci_levels;
//! use ta_lens::indicators::levels::LevelName;
//!
//! let levels = fibonacci_levels(110.0_f64, 100.0).unwrap();
//! let r1 = levels.get(LevelName::resistance(1)).unwrap();
//! assert!((r1 - 102.36).abs() < 1e-9);
//! ```

use crate::error::{Error, Result};
use crate::indicators::levels::{LevelName, LevelSet};
use crate::traits::{validate_prices, SeriesElement};

/// Retracement ratios, in level-rank order.
pub const FIBONACCI_RATIOS: [f64; 3] = [0.236, 0.382, 0.618];

/// Computes the six Fibonacci retracement levels between two swing points.
///
/// The returned set holds "Support Level 1..3" followed by
/// "Resistance Level 1..3". Every level lies within `[swing_low, swing_high]`.
/// Equal swing points are accepted and collapse all levels onto that price.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if either swing point is not finite or
/// `swing_high < swing_low`.
pub fn fibonacci_levels<T: SeriesElement>(swing_high: T, swing_low: T) -> Result<LevelSet<T>> {
    if !swing_high.is_finite() {
        return Err(Error::InvalidParameter {
            parameter: "swing_high",
            reason: "swing high must be finite",
        });
    }
    if !swing_low.is_finite() {
        return Err(Error::InvalidParameter {
            parameter: "swing_low",
            reason: "swing low must be finite",
        });
    }
    if swing_high < swing_low {
        return Err(Error::InvalidParameter {
            parameter: "swing_high",
            reason: "swing high must not be below swing low",
        });
    }

    let range = swing_high - swing_low;
    // rounding can push a level an ulp outside the swing bounds
    let bounded = |value: T| value.max(swing_low).min(swing_high);

    let mut support = Vec::with_capacity(FIBONACCI_RATIOS.len());
    let mut resistance = Vec::with_capacity(FIBONACCI_RATIOS.len());
    for (rank, &ratio) in (1u8..).zip(FIBONACCI_RATIOS.iter()) {
        let offset = T::from_f64(ratio)? * range;
        support.push((LevelName::support(rank), bounded(swing_high - offset)));
        resistance.push((LevelName::resistance(rank), bounded(swing_low + offset)));
    }
    support.extend(resistance);

    Ok(LevelSet::from_levels(support))
}

/// Computes Fibonacci levels using the highest and lowest price of a series
/// as the swing points.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
pub fn fibonacci_levels_from_prices<T: SeriesElement>(prices: &[T]) -> Result<LevelSet<T>> {
    validate_prices(prices)?;

    let (low, high) = prices[1..]
        .iter()
        .fold((prices[0], prices[0]), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    fibonacci_levels(high, low)
}
