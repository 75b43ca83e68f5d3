//! Technical analysis indicators.
//!
//! Every function here takes an ordered price series (oldest first) and is a
//! pure function of its input.
//!
//! # Overview
//!
//! - **Generic**: Work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Aligned**: Series outputs have the same length as their input
//! - **Explicitly undefined**: Warm-up positions are `None`, never NaN
//! - **Error-safe**: Return typed errors for empty, non-finite or too-short input
//!
//! # Indicator Categories
//!
//! ## Trend
//!
//! - [`sma`] - Simple Moving Average over a rolling window
//! - [`ema`] - Exponential Moving Average seeded with the first price
//! - [`macd`] - MACD line, signal line and histogram
//!
//! ## Levels
//!
//! - [`horizontal_support_resistance`] - levels from price repetition
//! - [`fibonacci_levels`] - retracement levels between two swing points
//! - [`peak_trough`] - strict local maxima and minima
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::{ema, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! assert_eq!(sma_result.iter().filter(|v| v.is_none()).count(), 4);
//!
//! let ema_result = ema(&prices, 5).unwrap();
//! assert_eq!(ema_result[0], 44.0);
//! ```

pub mod ema;
pub mod extrema;
pub mod fibonacci;
pub mod levels;
pub mod macd;
pub mod sma;

/// An indicator output aligned index-for-index with its input.
///
/// `None` marks a position where the indicator is not yet defined.
pub type IndicatorSeries<T> = Vec<Option<T>>;

pub use ema::{ema, ema_with_alpha, standard_alpha};
pub use extrema::{peak_trough, Extremum, PeakTrough};
pub use fibonacci::{fibonacci_levels, fibonacci_levels_from_prices, FIBONACCI_RATIOS};
pub use levels::{horizontal_support_resistance, HorizontalLevels, LevelKind, LevelName, LevelSet};
pub use macd::{
    macd, macd_with_periods, MacdOutput, DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD,
    DEFAULT_SLOW_PERIOD,
};
pub use sma::{sma, sma_lookback, sma_min_len};

/// Alias for [`sma`].
pub use sma::sma as simple_moving_average;

/// Alias for [`ema`].
pub use ema::ema as exponential_moving_average;
