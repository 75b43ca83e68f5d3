//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_lens::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 2.0, 5.0, 4.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let extrema = peak_trough(&prices).unwrap();
//! assert_eq!(extrema.peak_values(), vec![3.0, 5.0]);
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`], [`Result`]
//!
//! ## Traits
//! - [`SeriesElement`], [`ValidatedInput`]
//!
//! ## Indicator Functions
//! - `sma`, `ema`, `macd`, `horizontal_support_resistance`,
//!   `fibonacci_levels`, `peak_trough`
//!
//! ## Pattern Functions
//! - `is_doji`, `is_hammer`, `is_engulfing`, `classify_sequence`

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indicator functions
pub use crate::indicators::{
    ema, ema_with_alpha, fibonacci_levels, fibonacci_levels_from_prices,
    horizontal_support_resistance, macd, macd_with_periods, peak_trough, sma, sma_lookback,
    sma_min_len,
};

// Indicator output types
pub use crate::indicators::{
    Extremum, HorizontalLevels, IndicatorSeries, LevelKind, LevelName, LevelSet, MacdOutput,
    PeakTrough,
};

// Candlestick patterns
pub use crate::candlestick::{
    classify_sequence, is_doji, is_engulfing, is_hammer, Bar, Direction, PatternEvent,
    PatternKind, DOJI_THRESHOLD,
};
