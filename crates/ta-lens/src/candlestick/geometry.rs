//! Candlestick geometry: bodies and shadows.
//!
//! These are the building blocks the pattern predicates are written in.
//! Shadows are measured from the body edge nearest to them, so both are
//! non-negative for a valid bar.

use crate::traits::SeriesElement;

/// Absolute difference between open and close.
#[inline]
pub fn real_body<T: SeriesElement>(open: T, close: T) -> T {
    (close - open).abs()
}

/// The higher of open and close.
#[inline]
pub fn body_top<T: SeriesElement>(open: T, close: T) -> T {
    open.max(close)
}

/// The lower of open and close.
#[inline]
pub fn body_bottom<T: SeriesElement>(open: T, close: T) -> T {
    open.min(close)
}

/// Wick above the body.
#[inline]
pub fn upper_shadow<T: SeriesElement>(open: T, high: T, close: T) -> T {
    high - body_top(open, close)
}

/// Wick below the body.
#[inline]
pub fn lower_shadow<T: SeriesElement>(open: T, low: T, close: T) -> T {
    body_bottom(open, close) - low
}

/// Check if a candle is bullish (close > open).
#[inline]
pub fn is_bullish<T: SeriesElement>(open: T, close: T) -> bool {
    close > open
}

/// Check if a candle is bearish (close < open).
#[inline]
pub fn is_bearish<T: SeriesElement>(open: T, close: T) -> bool {
    close < open
}
