//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator built from two EMAs:
//!
//! - **MACD Line**: fast EMA minus slow EMA
//! - **Signal Line**: EMA of the MACD line
//! - **Histogram**: MACD line minus signal line
//!
//! # Formula
//!
//! ```text
//! MACD Line[i]   = EMA(P, 12)[i] - EMA(P, 26)[i]
//! Signal Line[i] = EMA(MACD Line, 9)[i]
//! Histogram[i]   = MACD Line[i] - Signal Line[i]
//! ```
//!
//! Because the underlying EMA seeds from the first price, every component is
//! defined from index 0 onward.
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::macd::macd;
//!
//! let prices = vec![26.0_f64, 27.0, 28.0, 27.5, 28.5, 29.0, 28.0, 27.0];
//! let result = macd(&prices).unwrap();
//!
//! assert_eq!(result.len(), prices.len());
//! assert_eq!(result.macd_line[0], 0.0);
//! ```

use crate::error::{Error, Result};
use crate::indicators::ema::{ema_fold, standard_alpha};
use crate::traits::{validate_period, validate_prices, SeriesElement};

/// Default fast EMA period.
pub const DEFAULT_FAST_PERIOD: usize = 12;

/// Default slow EMA period.
pub const DEFAULT_SLOW_PERIOD: usize = 26;

/// Default signal line EMA period.
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

/// The output of a MACD calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T: SeriesElement> {
    /// Fast EMA minus slow EMA.
    pub macd_line: Vec<T>,

    /// EMA of the MACD line.
    pub signal_line: Vec<T>,

    /// MACD line minus signal line.
    pub histogram: Vec<T>,
}

impl<T: SeriesElement> MacdOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }

    /// Splits the output into `(macd_line, signal_line)`, dropping the histogram.
    #[must_use]
    pub fn into_lines(self) -> (Vec<T>, Vec<T>) {
        (self.macd_line, self.signal_line)
    }
}

/// Computes MACD with the standard 12/26/9 periods.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(prices: &[T]) -> Result<MacdOutput<T>> {
    macd_with_periods(
        prices,
        DEFAULT_FAST_PERIOD,
        DEFAULT_SLOW_PERIOD,
        DEFAULT_SIGNAL_PERIOD,
    )
}

/// Computes MACD with caller-chosen periods.
///
/// # Errors
///
/// Returns an error if:
/// - Any period is zero (`Error::InvalidParameter`)
/// - `fast_period >= slow_period` (`Error::InvalidParameter`)
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd_with_periods<T: SeriesElement>(
    prices: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period)?;
    validate_period(slow_period)?;
    validate_period(signal_period)?;
    if fast_period >= slow_period {
        return Err(Error::InvalidParameter {
            parameter: "fast_period",
            reason: "fast period must be shorter than slow period",
        });
    }
    validate_prices(prices)?;

    let fast = ema_fold(prices, standard_alpha::<T>(fast_period)?);
    let slow = ema_fold(prices, standard_alpha::<T>(slow_period)?);

    let macd_line: Vec<T> = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();
    let signal_line = ema_fold(&macd_line, standard_alpha::<T>(signal_period)?);
    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(&m, &s)| m - s)
        .collect();

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ema::ema;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_macd_constant_series_is_flat() {
        let prices = vec![61.5_f64; 40];
        let result = macd(&prices).unwrap();

        assert_eq!(result.len(), 40);
        for i in 0..40 {
            assert!(result.macd_line[i].abs() < EPSILON);
            assert!(result.signal_line[i].abs() < EPSILON);
            assert!(result.histogram[i].abs() < EPSILON);
        }
    }

    #[test]
    fn test_macd_line_is_ema_difference() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + (f64::from(i) * 0.7).sin() * 5.0).collect();
        let result = macd(&prices).unwrap();
        let fast = ema(&prices, 12).unwrap();
        let slow = ema(&prices, 26).unwrap();
        let signal = ema(&result.macd_line, 9).unwrap();

        for i in 0..prices.len() {
            assert!((result.macd_line[i] - (fast[i] - slow[i])).abs() < EPSILON);
            assert!((result.signal_line[i] - signal[i]).abs() < EPSILON);
            assert!(
                (result.histogram[i] - (result.macd_line[i] - result.signal_line[i])).abs()
                    < EPSILON
            );
        }
    }

    #[test]
    fn test_macd_rising_series_is_positive() {
        let prices: Vec<f64> = (1..=60).map(f64::from).collect();
        let result = macd(&prices).unwrap();
        // fast EMA tracks a rising series more closely than the slow one
        for i in 1..prices.len() {
            assert!(result.macd_line[i] > 0.0);
        }
    }

    #[test]
    fn test_macd_with_periods_validation() {
        let prices = vec![1.0_f64, 2.0, 3.0];
        assert!(matches!(
            macd_with_periods(&prices, 26, 12, 9),
            Err(Error::InvalidParameter { parameter: "fast_period", .. })
        ));
        assert!(matches!(
            macd_with_periods(&prices, 12, 12, 9),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            macd_with_periods(&prices, 12, 26, 0),
            Err(Error::InvalidParameter { parameter: "period", .. })
        ));
        assert_eq!(macd::<f64>(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_into_lines() {
        let prices = vec![10.0_f64, 11.0, 12.0];
        let result = macd(&prices).unwrap();
        let expected_signal = result.signal_line.clone();
        let (line, signal) = result.into_lines();
        assert_eq!(line.len(), 3);
        assert_eq!(signal, expected_signal);
    }
}
