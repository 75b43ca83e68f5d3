//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the arithmetic mean of the `period` most recent prices.
//!
//! # Algorithm
//!
//! O(n) rolling sum:
//! 1. The sum of the first full window seeds position `period - 1`
//! 2. Each later position adds the newest price and drops the oldest
//!
//! The running sum is Neumaier-compensated, so a large price leaving the
//! window does not wipe out the small prices that remain.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i-period+1] + ... + P[i]) / period     for i >= period - 1
//! SMA[i] = undefined                                  for i <  period - 1
//! ```
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result[0], None);
//! assert_eq!(result[1], None);
//! assert_eq!(result[2], Some(2.0));
//! assert_eq!(result[4], Some(4.0));
//! ```

use crate::error::Result;
use crate::indicators::IndicatorSeries;
use crate::traits::{validate_period, validate_prices, SeriesElement};

/// Returns the number of undefined positions at the start of an SMA output.
///
/// ```
/// use ta_lens::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(5), 4);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for which SMA produces a defined value.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    period
}

/// Computes the Simple Moving Average of a price series.
///
/// The output has exactly `prices.len()` positions. The first
/// [`sma_lookback`] positions are `None`. A period longer than the series is
/// accepted and yields an output that is undefined everywhere.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidParameter`)
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    validate_period(period)?;
    validate_prices(prices)?;

    let period_t = T::from_usize(period)?;
    let mut result = vec![None; prices.len()];
    fill_sma_window(prices, period, period_t, 0, &mut result);
    Ok(result)
}

/// Fills `out` with SMA values for input positions `offset..offset + out.len()`.
///
/// The rolling sum is re-seeded from `prices` at the first defined position
/// inside the range, so disjoint ranges can be filled independently.
pub(crate) fn fill_sma_window<T: SeriesElement>(
    prices: &[T],
    period: usize,
    period_t: T,
    offset: usize,
    out: &mut [Option<T>],
) {
    let end = offset + out.len();
    let first = offset.max(period - 1);
    if first >= end || first >= prices.len() {
        out.fill(None);
        return;
    }

    out[..first - offset].fill(None);

    let mut sum = CompensatedSum::default();
    for &x in &prices[first + 1 - period..=first] {
        sum.add(x);
    }
    out[first - offset] = Some(sum.value() / period_t);

    for i in (first + 1)..end {
        sum.add(prices[i]);
        sum.add(-prices[i - period]);
        out[i - offset] = Some(sum.value() / period_t);
    }
}

/// Neumaier running sum: `total` plus the low-order bits lost from it.
#[derive(Debug, Clone, Copy)]
struct CompensatedSum<T> {
    total: T,
    lost: T,
}

impl<T: SeriesElement> Default for CompensatedSum<T> {
    fn default() -> Self {
        Self {
            total: T::zero(),
            lost: T::zero(),
        }
    }
}

impl<T: SeriesElement> CompensatedSum<T> {
    #[inline]
    fn add(&mut self, x: T) {
        let t = self.total + x;
        if self.total.abs() >= x.abs() {
            self.lost = self.lost + ((self.total - t) + x);
        } else {
            self.lost = self.lost + ((x - t) + self.total);
        }
        self.total = t;
    }

    #[inline]
    fn value(&self) -> T {
        self.total + self.lost
    }
}
