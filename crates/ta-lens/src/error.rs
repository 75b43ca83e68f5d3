//! Error types for ta-lens.
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias over
//! the single [`Error`] enum defined here. Errors are local to the call that
//! produced them: operations are pure, so the same input always fails the
//! same way.

use thiserror::Error;

/// The main error type for ta-lens operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside its admissible range.
    ///
    /// Returned for a zero period, a MACD override whose fast period is not
    /// shorter than its slow period, `swing_high < swing_low`, or a doji
    /// threshold outside `(0, 1]`. Values are never clamped.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Description of the admissible range.
        reason: &'static str,
    },

    /// The input is shorter than the operation needs to produce any result.
    #[error("insufficient data for {operation}: required {required} elements, got {actual}")]
    InsufficientData {
        /// Minimum number of elements the operation needs.
        required: usize,
        /// Number of elements provided.
        actual: usize,
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },

    /// The input series is empty.
    ///
    /// This is the zero-length case of insufficient data.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// A price series contains NaN or an infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteInput {
        /// Position of the first non-finite value.
        index: usize,
    },

    /// A bar violates `low <= open, close <= high`.
    #[error("invalid bar at index {index}: {reason}")]
    InvalidBar {
        /// Position of the bar in its series.
        index: usize,
        /// Which invariant was violated.
        reason: &'static str,
    },

    /// Bar timestamps are not strictly increasing.
    #[error("timestamps are not strictly increasing at index {index}")]
    UnorderedTimestamps {
        /// Position of the first bar whose timestamp does not exceed its predecessor's.
        index: usize,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the ta-lens Error type.
pub type Result<T> = std::result::Result<T, Error>;
