//! The OHLC bar type consumed by the pattern classifier.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

use super::geometry::{body_bottom, body_top, real_body};

/// One open/high/low/close observation.
///
/// `Ts` is any ordered timestamp type: a date string in ISO format, a Unix
/// epoch integer, or a `chrono` value all work. The classifier only compares
/// and clones timestamps.
///
/// Fields are public so bars can be built with struct literals; use
/// [`Bar::new`] or [`Bar::validate`] to enforce
/// `low <= open, close <= high`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar<T: SeriesElement, Ts> {
    /// When the bar was observed.
    pub timestamp: Ts,
    /// Opening price.
    pub open: T,
    /// Highest traded price.
    pub high: T,
    /// Lowest traded price.
    pub low: T,
    /// Closing price.
    pub close: T,
}

impl<T: SeriesElement, Ts> Bar<T, Ts> {
    /// Creates a bar, checking that its prices are finite and consistent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBar` (with index 0) if any price is non-finite,
    /// `high < low`, or open/close lies outside `[low, high]`.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_lens::candlestick::Bar;
    ///
    /// let bar = Bar::new("2023-01-01", 100.0_f64, 103.0, 99.0, 102.0).unwrap();
    /// assert!(bar.is_bullish());
    ///
    /// assert!(Bar::new("2023-01-02", 100.0_f64, 99.0, 101.0, 100.0).is_err());
    /// ```
    pub fn new(timestamp: Ts, open: T, high: T, low: T, close: T) -> Result<Self> {
        let bar = Self {
            timestamp,
            open,
            high,
            low,
            close,
        };
        bar.validate(0)?;
        Ok(bar)
    }

    /// Checks the bar invariants, reporting failures at position `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBar` naming the first violated invariant.
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason| Err(Error::InvalidBar { index, reason });

        if ![self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite())
        {
            return invalid("prices must be finite");
        }
        if self.high < self.low {
            return invalid("high is below low");
        }
        if self.open < self.low || self.open > self.high {
            return invalid("open is outside the low-high range");
        }
        if self.close < self.low || self.close > self.high {
            return invalid("close is outside the low-high range");
        }
        Ok(())
    }

    /// Absolute distance between open and close.
    #[inline]
    #[must_use]
    pub fn real_body(&self) -> T {
        real_body(self.open, self.close)
    }

    /// The higher of open and close.
    #[inline]
    #[must_use]
    pub fn body_top(&self) -> T {
        body_top(self.open, self.close)
    }

    /// The lower of open and close.
    #[inline]
    #[must_use]
    pub fn body_bottom(&self) -> T {
        body_bottom(self.open, self.close)
    }

    /// True if the bar closed above its open.
    #[inline]
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// True if the bar closed below its open.
    #[inline]
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}
