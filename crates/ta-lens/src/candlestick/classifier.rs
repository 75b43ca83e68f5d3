//! Sequence classification with an ordered rule table.
//!
//! Each bar from the second onward is tested against [`RULES`] in order, and
//! the first rule that matches decides the bar's pattern. A bar that is both
//! a doji and the second half of an engulfing pair is reported only as a
//! doji. Bars matching no rule produce no event.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

use super::bar::Bar;
use super::single::{is_doji, is_hammer, DOJI_THRESHOLD};
use super::two_bar::{is_engulfing, Direction};

/// The closed set of patterns the classifier reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternKind {
    /// Open and close nearly equal.
    Doji,
    /// Small body on a long lower shadow.
    Hammer,
    /// Current bar reverses the previous bar upward.
    BullishEngulfing,
    /// Current bar reverses the previous bar downward.
    BearishEngulfing,
}

impl PatternKind {
    /// Returns the reversal direction for engulfing patterns.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::BullishEngulfing => Some(Direction::Bullish),
            Self::BearishEngulfing => Some(Direction::Bearish),
            Self::Doji | Self::Hammer => None,
        }
    }
}

impl From<Direction> for PatternKind {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Bullish => Self::BullishEngulfing,
            Direction::Bearish => Self::BearishEngulfing,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Doji => "Doji",
            Self::Hammer => "Hammer",
            Self::BullishEngulfing => "Bullish Engulfing",
            Self::BearishEngulfing => "Bearish Engulfing",
        })
    }
}

/// A pattern detected at one bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternEvent<Ts> {
    /// Timestamp of the bar the pattern completes on.
    pub timestamp: Ts,
    /// Which pattern matched.
    pub kind: PatternKind,
}

/// One classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// [`is_doji`] on the current bar with [`DOJI_THRESHOLD`].
    Doji,
    /// [`is_hammer`] on the current bar.
    Hammer,
    /// [`is_engulfing`] against the preceding bar.
    Engulfing,
}

/// Rules in priority order; the first match wins.
pub const RULES: [Rule; 3] = [Rule::Doji, Rule::Hammer, Rule::Engulfing];

impl Rule {
    fn evaluate<T: SeriesElement, Ts>(
        self,
        prev: &Bar<T, Ts>,
        cur: &Bar<T, Ts>,
        doji_threshold: T,
    ) -> Result<Option<PatternKind>> {
        Ok(match self {
            Self::Doji => {
                is_doji(cur.open, cur.close, doji_threshold)?.then_some(PatternKind::Doji)
            }
            Self::Hammer => {
                is_hammer(cur.low, cur.high, cur.open, cur.close).then_some(PatternKind::Hammer)
            }
            Self::Engulfing => {
                is_engulfing(prev.open, prev.close, cur.open, cur.close).map(PatternKind::from)
            }
        })
    }
}

fn first_match<T: SeriesElement, Ts>(
    prev: &Bar<T, Ts>,
    cur: &Bar<T, Ts>,
    doji_threshold: T,
) -> Result<Option<PatternKind>> {
    for rule in RULES {
        if let Some(kind) = rule.evaluate(prev, cur, doji_threshold)? {
            return Ok(Some(kind));
        }
    }
    Ok(None)
}

/// Classifies a single bar given its predecessor.
///
/// Bars are not validated here; see [`classify_sequence`].
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the doji threshold cannot be
/// represented in `T`.
pub fn classify_pair<T: SeriesElement, Ts>(
    prev: &Bar<T, Ts>,
    cur: &Bar<T, Ts>,
) -> Result<Option<PatternKind>> {
    first_match(prev, cur, T::from_f64(DOJI_THRESHOLD)?)
}

/// Scans a bar series and reports the first matching pattern for each bar
/// from the second onward.
///
/// Events come out in bar order, at most one per bar.
///
/// # Errors
///
/// Returns an error if:
/// - The series is empty (`Error::EmptyInput`)
/// - The series has a single bar (`Error::InsufficientData`)
/// - A bar has non-finite prices or violates `low <= open, close <= high`
///   (`Error::InvalidBar`)
/// - Timestamps are not strictly increasing (`Error::UnorderedTimestamps`)
///
/// # Example
///
/// ```
/// use ta_lens::candlestick::{classify_sequence, Bar, PatternKind};
///
/// let bars = vec![
///     Bar::new("2023-01-01", 100.0_f64, 103.0, 99.0, 102.0).unwrap(),
///     Bar::new("2023-01-02", 102.0, 104.0, 100.0, 101.0).unwrap(),
/// ];
/// let events = classify_sequence(&bars).unwrap();
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].timestamp, "2023-01-02");
/// assert_eq!(events[0].kind, PatternKind::Doji);
/// ```
pub fn classify_sequence<T, Ts>(bars: &[Bar<T, Ts>]) -> Result<Vec<PatternEvent<Ts>>>
where
    T: SeriesElement,
    Ts: Ord + Clone,
{
    match bars.len() {
        0 => return Err(Error::EmptyInput),
        1 => {
            return Err(Error::InsufficientData {
                required: 2,
                actual: 1,
                operation: "classify_sequence",
            })
        }
        _ => {}
    }
    for (index, bar) in bars.iter().enumerate() {
        bar.validate(index)?;
    }
    if let Some(pos) = bars
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(Error::UnorderedTimestamps { index: pos + 1 });
    }

    let doji_threshold = T::from_f64(DOJI_THRESHOLD)?;
    let mut events = Vec::new();
    for (offset, pair) in bars.windows(2).enumerate() {
        if let Some(kind) = first_match(&pair[0], &pair[1], doji_threshold)? {
            trace!(index = offset + 1, pattern = %kind, "pattern matched");
            events.push(PatternEvent {
                timestamp: pair[1].timestamp.clone(),
                kind,
            });
        }
    }

    debug!(
        bars = bars.len(),
        events = events.len(),
        "classified bar sequence"
    );

    Ok(events)
}
