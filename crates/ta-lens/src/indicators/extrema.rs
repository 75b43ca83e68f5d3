//! Local peak and trough detection.
//!
//! A peak is a price strictly greater than both of its neighbours; a trough
//! is strictly smaller than both. The first and last prices have only one
//! neighbour and are never reported.
//!
//! Plateaus such as `[1, 3, 3, 1]` produce no extremum, because neither `3`
//! is strictly greater than the other.
//!
//! # Example
//!
//! ```
//! use ta_lens::indicators::extrema::peak_trough;
//!
//! let result = peak_trough(&[1.0_f64, 3.0, 2.0, 5.0, 1.0]).unwrap();
//!
//! assert_eq!(result.peak_values(), vec![3.0, 5.0]);
//! assert_eq!(result.trough_values(), vec![2.0]);
//! assert_eq!(result.peaks[1].index, 3);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::traits::{validate_prices, SeriesElement, ValidatedInput};

/// A local extremum: its position in the input and its price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<T: SeriesElement> {
    /// Index into the input series.
    pub index: usize,
    /// Price at that index.
    pub value: T,
}

/// Local peaks and troughs, each in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakTrough<T: SeriesElement> {
    /// Strict local maxima.
    pub peaks: Vec<Extremum<T>>,
    /// Strict local minima.
    pub troughs: Vec<Extremum<T>>,
}

impl<T: SeriesElement> PeakTrough<T> {
    /// Returns the peak prices without their indices.
    #[must_use]
    pub fn peak_values(&self) -> Vec<T> {
        self.peaks.iter().map(|e| e.value).collect()
    }

    /// Returns the trough prices without their indices.
    #[must_use]
    pub fn trough_values(&self) -> Vec<T> {
        self.troughs.iter().map(|e| e.value).collect()
    }
}

/// Finds the strict local peaks and troughs of a price series.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty (`Error::EmptyInput`)
/// - The input has fewer than 3 prices (`Error::InsufficientData`)
/// - The input contains NaN or infinity (`Error::NonFiniteInput`)
pub fn peak_trough<T: SeriesElement>(prices: &[T]) -> Result<PeakTrough<T>> {
    prices.validate_not_empty()?;
    prices.validate_min_length(3, "peak_trough")?;
    validate_prices(prices)?;

    let mut peaks = Vec::new();
    let mut troughs = Vec::new();

    for (offset, window) in prices.windows(3).enumerate() {
        let (prev, cur, next) = (window[0], window[1], window[2]);
        let index = offset + 1;
        if cur > prev && cur > next {
            peaks.push(Extremum { index, value: cur });
        } else if cur < prev && cur < next {
            troughs.push(Extremum { index, value: cur });
        }
    }

    debug!(
        observations = prices.len(),
        peaks = peaks.len(),
        troughs = troughs.len(),
        "detected local extrema"
    );

    Ok(PeakTrough { peaks, troughs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn indices<T: SeriesElement>(extrema: &[Extremum<T>]) -> Vec<usize> {
        extrema.iter().map(|e| e.index).collect()
    }

    #[test]
    fn test_basic_peaks_and_troughs() {
        let result = peak_trough(&[1.0_f64, 3.0, 2.0, 5.0, 1.0]).unwrap();
        assert_eq!(indices(&result.peaks), vec![1, 3]);
        assert_eq!(indices(&result.troughs), vec![2]);
    }

    #[test]
    fn test_historical_prices() {
        let prices = vec![
            100.0_f64, 102.0, 105.0, 102.0, 107.0, 103.0, 101.0, 106.0, 109.0, 107.0, 110.0,
            105.0,
        ];
        let result = peak_trough(&prices).unwrap();

        assert_eq!(result.peak_values(), vec![105.0, 107.0, 109.0, 110.0]);
        assert_eq!(indices(&result.peaks), vec![2, 4, 8, 10]);
        assert_eq!(result.trough_values(), vec![102.0, 101.0, 107.0]);
        assert_eq!(indices(&result.troughs), vec![3, 6, 9]);
    }

    #[test]
    fn test_plateau_is_not_an_extremum() {
        let result = peak_trough(&[1.0_f64, 3.0, 3.0, 1.0]).unwrap();
        assert!(result.peaks.is_empty());
        assert!(result.troughs.is_empty());
    }

    #[test]
    fn test_monotonic_series_has_no_extrema() {
        let prices: Vec<f64> = (0..10).map(f64::from).collect();
        let result = peak_trough(&prices).unwrap();
        assert!(result.peaks.is_empty());
        assert!(result.troughs.is_empty());
    }

    #[test]
    fn test_endpoints_never_reported() {
        // index 0 is the maximum and index 4 the minimum
        let result = peak_trough(&[9.0_f64, 2.0, 4.0, 3.0, 0.0]).unwrap();
        assert_eq!(indices(&result.peaks), vec![2]);
        assert_eq!(indices(&result.troughs), vec![1]);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(peak_trough::<f64>(&[]), Err(Error::EmptyInput));
        assert_eq!(
            peak_trough(&[1.0_f64, 2.0]),
            Err(Error::InsufficientData {
                required: 3,
                actual: 2,
                operation: "peak_trough",
            })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            peak_trough(&[1.0_f64, f64::NAN, 1.0]),
            Err(Error::NonFiniteInput { index: 1 })
        );
    }
}
