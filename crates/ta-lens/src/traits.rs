//! Core traits for ta-lens numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and `f64`
//! so every indicator and pattern predicate can be written once. The module
//! also provides input validation through [`ValidatedInput`] and the
//! standalone [`validate_period`] helper.
//!
//! # Example
//!
//! ```
//! use ta_lens::traits::{SeriesElement, ValidatedInput, validate_period};
//!
//! fn mean_of_first<T: SeriesElement>(data: &[T], period: usize) -> ta_lens::Result<T> {
//!     validate_period(period)?;
//!     data.validate_min_length(period, "mean_of_first")?;
//!
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / T::from_usize(period)?)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((mean_of_first(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price series.
///
/// Extends `num_traits::Float` with conversions used by the indicators.
/// Blanket-implemented for every type meeting the bounds, which in practice
/// means `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is how periods are turned into divisors.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before an operation runs.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the elements as a slice.
    fn as_elements(&self) -> &[Self::Element];

    /// Returns the length of the series.
    #[inline]
    fn series_len(&self) -> usize {
        self.as_elements().len()
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.series_len() == 0 {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, operation: &'static str) -> Result<()> {
        if self.series_len() < min_length {
            Err(Error::InsufficientData {
                required: min_length,
                actual: self.series_len(),
                operation,
            })
        } else {
            Ok(())
        }
    }

    /// Validates that every element is finite.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFiniteInput` with the index of the first NaN or infinity.
    #[inline]
    fn validate_finite(&self) -> Result<()> {
        match self.as_elements().iter().position(|x| !x.is_finite()) {
            Some(index) => Err(Error::NonFiniteInput { index }),
            None => Ok(()),
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self
    }
}

/// Validates that a period is usable as a window length.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidParameter {
            parameter: "period",
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates a price series that must hold at least one finite observation.
///
/// # Errors
///
/// Returns `Error::EmptyInput` or `Error::NonFiniteInput`.
#[inline]
pub fn validate_prices<T: SeriesElement>(prices: &[T]) -> Result<()> {
    prices.validate_not_empty()?;
    prices.validate_finite()
}
