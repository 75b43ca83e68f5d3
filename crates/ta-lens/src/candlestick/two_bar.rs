//! Two-bar pattern predicates.

use std::fmt;

use crate::traits::SeriesElement;

/// Direction of a reversal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Signals a move up.
    Bullish,
    /// Signals a move down.
    Bearish,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => f.write_str("Bullish"),
            Self::Bearish => f.write_str("Bearish"),
        }
    }
}

/// Detects an engulfing pattern between a bar and its predecessor.
///
/// ```text
/// Bullish: cur_open < prev_close  and  cur_close > prev_open
/// Bearish: cur_open > prev_close  and  cur_close < prev_open
/// ```
///
/// Only opens and closes take part; shadows are ignored.
///
/// # Example
///
/// ```
/// use ta_lens::candlestick::{is_engulfing, Direction};
///
/// assert_eq!(is_engulfing(100.0_f64, 102.0, 99.0, 103.0), Some(Direction::Bullish));
/// assert_eq!(is_engulfing(102.0_f64, 100.0, 103.0, 99.0), Some(Direction::Bearish));
/// assert_eq!(is_engulfing(100.0_f64, 102.0, 103.0, 104.0), None);
/// ```
#[must_use]
pub fn is_engulfing<T: SeriesElement>(
    prev_open: T,
    prev_close: T,
    cur_open: T,
    cur_close: T,
) -> Option<Direction> {
    if cur_open < prev_close && cur_close > prev_open {
        Some(Direction::Bullish)
    } else if cur_open > prev_close && cur_close < prev_open {
        Some(Direction::Bearish)
    } else {
        None
    }
}
