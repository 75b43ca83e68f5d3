//! ta-lens: technical analysis indicators and candlestick patterns
//!
//! This crate derives trend, momentum and level signals from historical price
//! series, and classifies candlestick patterns across OHLC bars. Every
//! operation is a pure function of its input.
//!
//! # Features
//!
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Explicit warm-up**: Undefined positions are `None`, not NaN
//! - **Safety**: Typed errors for empty, non-finite and inconsistent input
//! - **Parallel**: Optional Rayon-backed batch helpers (`parallel` feature)
//!
//! # Quick Start
//!
//! ```
//! use ta_lens::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // The first 2 positions are undefined
//! assert_eq!(result[0], None);
//! assert_eq!(result[1], None);
//! assert!((result[2].unwrap() - 2.0).abs() < 1e-10);
//! ```
//!
//! # Modules
//!
//! ## Indicators
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//! - [`indicators::macd()`]: Moving Average Convergence Divergence
//! - [`indicators::horizontal_support_resistance()`]: Repetition-based levels
//! - [`indicators::fibonacci_levels()`]: Fibonacci retracements
//! - [`indicators::peak_trough()`]: Local extrema
//!
//! ## Candlestick patterns
//! - [`candlestick::is_doji()`], [`candlestick::is_hammer()`],
//!   [`candlestick::is_engulfing()`]
//! - [`candlestick::classify_sequence()`]: one event per matching bar
//!
//! # Error Handling
//!
//! All fallible functions return [`Result<T, Error>`]:
//!
//! ```
//! use ta_lens::prelude::*;
//!
//! let empty: Vec<f64> = vec![];
//! assert_eq!(sma(&empty, 5), Err(Error::EmptyInput));
//!
//! assert!(matches!(
//!     fibonacci_levels(100.0_f64, 110.0),
//!     Err(Error::InvalidParameter { .. })
//! ));
//! ```
//!
//! # Logging
//!
//! Scanners emit `tracing` events at `debug` and `trace` level. The library
//! never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod candlestick;
pub mod error;
pub mod indicators;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::IndicatorSeries;
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{
    approx_eq, approx_eq_relative, count_undefined, count_undefined_prefix, EPSILON,
    LOOSE_EPSILON,
};
