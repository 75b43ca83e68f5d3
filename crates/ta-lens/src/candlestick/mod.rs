//! Candlestick pattern recognition.
//!
//! Predicates work on raw prices and return `bool` or an
//! `Option<Direction>`; [`classify_sequence`] applies them across a series
//! of [`Bar`]s and reports one [`PatternEvent`] per matching bar.
//!
//! # Patterns
//!
//! ## Single-bar
//! - [`is_doji`] - open and close nearly equal
//! - [`is_hammer`] - small body on a long lower shadow
//!
//! ## Two-bar
//! - [`is_engulfing`] - the current body reverses the previous one
//!
//! # Example
//!
//! ```
//! use ta_lens::candlestick::{classify_sequence, Bar, PatternKind};
//!
//! let bars = vec![
//!     Bar::new("2023-01-01", 100.0_f64, 103.0, 99.0, 102.0).unwrap(),
//!     Bar::new("2023-01-02", 102.0, 104.0, 100.0, 101.0).unwrap(),
//!     Bar::new("2023-01-03", 101.0, 105.0, 100.0, 104.0).unwrap(),
//! ];
//!
//! let events = classify_sequence(&bars).unwrap();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].kind, PatternKind::Doji);
//! ```

pub mod bar;
pub mod classifier;
pub mod geometry;
pub mod single;
pub mod two_bar;

pub use bar::Bar;
pub use classifier::{classify_pair, classify_sequence, PatternEvent, PatternKind, Rule, RULES};
pub use geometry::{
    body_bottom, body_top, is_bearish, is_bullish, lower_shadow, real_body, upper_shadow,
};
pub use single::{is_doji, is_hammer, DOJI_THRESHOLD, HAMMER_BODY_RATIO, HAMMER_SHADOW_MULTIPLE};
pub use two_bar::{is_engulfing, Direction};
