//! Price levels: named level sets and horizontal support/resistance.
//!
//! A [`LevelSet`] maps named levels such as "Support Level 1" to prices and is
//! what [`fibonacci_levels`](crate::indicators::fibonacci::fibonacci_levels)
//! returns. [`horizontal_support_resistance`] groups the distinct prices of a
//! series by how often they occur.
//!
//! # Horizontal levels
//!
//! ```text
//! resistance = distinct prices occurring more than once
//! support    = distinct prices occurring exactly once
//! ```
//!
//! Both sets are sorted ascending.
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::levels::horizontal_support_resistance;
//!
//! let prices = vec![100.0_f64, 102.0, 105.0, 102.0, 107.0, 105.0];
//! let levels = horizontal_support_resistance(&prices).unwrap();
//!
//! assert_eq!(levels.resistance, vec![102.0, 105.0]);
//! assert_eq!(levels.support, vec![100.0, 107.0]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::traits::{validate_prices, SeriesElement};

/// Whether a named level sits below price (support) or above it (resistance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelKind {
    /// A floor the price is expected to bounce from.
    Support,
    /// A ceiling the price is expected to stall at.
    Resistance,
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Support => f.write_str("Support"),
            Self::Resistance => f.write_str("Resistance"),
        }
    }
}

/// The name of one level in a [`LevelSet`], displayed as e.g. `"Support Level 1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelName {
    /// Support or resistance.
    pub kind: LevelKind,
    /// 1-based rank within its kind.
    pub rank: u8,
}

impl LevelName {
    /// Creates a support level name.
    #[must_use]
    pub const fn support(rank: u8) -> Self {
        Self {
            kind: LevelKind::Support,
            rank,
        }
    }

    /// Creates a resistance level name.
    #[must_use]
    pub const fn resistance(rank: u8) -> Self {
        Self {
            kind: LevelKind::Resistance,
            rank,
        }
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Level {}", self.kind, self.rank)
    }
}

/// An ordered mapping from level names to prices.
///
/// Built once per call and never updated. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet<T: SeriesElement> {
    levels: Vec<(LevelName, T)>,
}

impl<T: SeriesElement> LevelSet<T> {
    pub(crate) fn from_levels(levels: Vec<(LevelName, T)>) -> Self {
        Self { levels }
    }

    /// Returns the price of a level, if present.
    #[must_use]
    pub fn get(&self, name: LevelName) -> Option<T> {
        self.levels
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, value)| value)
    }

    /// Returns the price of a level looked up by its display name.
    ///
    /// ```
    /// use ta_lens::indicators::fibonacci::fibonacci_levels;
    ///
    /// let levels = fibonacci_levels(110.0_f64, 100.0).unwrap();
    /// let s1 = levels.get_by_name("Support Level 1").unwrap();
    /// assert!((s1 - 107.64).abs() < 1e-9);
    /// assert!(levels.get_by_name("Pivot").is_none());
    /// ```
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<T> {
        self.levels
            .iter()
            .find(|(n, _)| n.to_string() == name)
            .map(|&(_, value)| value)
    }

    /// Iterates over `(name, price)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LevelName, T)> + '_ {
        self.levels.iter().copied()
    }

    /// Iterates over the prices of one kind of level.
    pub fn of_kind(&self, kind: LevelKind) -> impl Iterator<Item = T> + '_ {
        self.levels
            .iter()
            .filter(move |(n, _)| n.kind == kind)
            .map(|&(_, value)| value)
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the set holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Support and resistance levels derived from price repetition.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalLevels<T: SeriesElement> {
    /// Distinct prices that occur exactly once, ascending.
    pub support: Vec<T>,
    /// Distinct prices that occur more than once, ascending.
    pub resistance: Vec<T>,
}

/// Identifies horizontal support and resistance levels by occurrence count.
///
/// Prices are compared for exact equality; `-0.0` and `0.0` count as the
/// same level.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty (`Error::EmptyInput`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
pub fn horizontal_support_resistance<T: SeriesElement>(
    prices: &[T],
) -> Result<HorizontalLevels<T>> {
    validate_prices(prices)?;

    let mut sorted = prices.to_vec();
    // finite input, so partial_cmp never fails
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut support = Vec::new();
    let mut resistance = Vec::new();
    for group in sorted.chunk_by(|a, b| a == b) {
        if group.len() > 1 {
            resistance.push(group[0]);
        } else {
            support.push(group[0]);
        }
    }

    debug!(
        observations = prices.len(),
        support = support.len(),
        resistance = resistance.len(),
        "computed horizontal support/resistance"
    );

    Ok(HorizontalLevels {
        support,
        resistance,
    })
}
