//! Batch processing across many independent series.
//!
//! [`BatchProcessor`] applies one operation to many price series, and
//! [`sma_parallel`] splits a single long SMA into chunks. With the `parallel`
//! feature enabled both fan out over Rayon's thread pool; without it they run
//! sequentially and return identical results.
//!
//! ```toml
//! [dependencies]
//! ta-lens = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! EMA and MACD are recursive and have no chunked form; run them per series
//! through [`BatchProcessor`] instead.
//!
//! # Example
//!
//! ```
//! use ta_lens::batch::BatchProcessor;
//! use ta_lens::indicators::sma;
//!
//! let series = vec![
//!     vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//!
//! let results = BatchProcessor::new()
//!     .process(&series, |s| sma(s, 3))
//!     .unwrap();
//! assert_eq!(results[1][4], Some(2.0));
//! ```

use crate::error::Result;
use crate::indicators::sma::fill_sma_window;
use crate::indicators::IndicatorSeries;
use crate::traits::{validate_period, validate_prices, SeriesElement};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of output positions each worker fills in [`sma_parallel`].
pub const SMA_CHUNK_LEN: usize = 4096;

/// Runs one operation over many series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Batches with fewer series than this run sequentially.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor that goes parallel from 64 series upward.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the batch size from which work fans out across threads.
    #[must_use]
    pub const fn parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `op` to every series, returning results in input order.
    ///
    /// # Errors
    ///
    /// Returns the first error any series produced.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], op: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            return series.iter().map(|s| op(s)).collect();
        }
        series.par_iter().map(|s| op(s)).collect()
    }

    /// Applies `op` to every series, returning results in input order.
    ///
    /// # Errors
    ///
    /// Returns the first error any series produced.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], op: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| op(s)).collect()
    }

    /// Like [`process`](Self::process) but over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error any series produced.
    #[cfg(feature = "parallel")]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], op: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            return series.iter().map(|s| op(s)).collect();
        }
        series.par_iter().map(|s| op(s)).collect()
    }

    /// Like [`process`](Self::process) but over borrowed slices.
    ///
    /// # Errors
    ///
    /// Returns the first error any series produced.
    #[cfg(not(feature = "parallel"))]
    pub fn process_refs<T, F, R>(&self, series: &[&[T]], op: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        series.iter().map(|s| op(s)).collect()
    }
}

/// Shorthand for `BatchProcessor::new().process(series, op)`.
///
/// # Errors
///
/// Returns the first error any series produced.
#[cfg(feature = "parallel")]
pub fn process_batch<T, F, R>(series: &[Vec<T>], op: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, op)
}

/// Shorthand for `BatchProcessor::new().process(series, op)`.
///
/// # Errors
///
/// Returns the first error any series produced.
#[cfg(not(feature = "parallel"))]
pub fn process_batch<T, F, R>(series: &[Vec<T>], op: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&[T]) -> Result<R>,
{
    BatchProcessor::new().process(series, op)
}

/// Computes the SMA of one long series in independent chunks.
///
/// Each chunk of [`SMA_CHUNK_LEN`] output positions re-seeds its rolling sum
/// from the input, so chunks share no state. Values agree with
/// [`sma`](crate::indicators::sma::sma) up to floating-point rounding.
///
/// # Errors
///
/// Same as [`sma`](crate::indicators::sma::sma).
pub fn sma_parallel<T: SeriesElement>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    validate_period(period)?;
    validate_prices(prices)?;

    let period_t = T::from_usize(period)?;
    let mut out = vec![None; prices.len()];
    fill_chunks(prices, period, period_t, &mut out);
    Ok(out)
}

#[cfg(feature = "parallel")]
fn fill_chunks<T: SeriesElement>(prices: &[T], period: usize, period_t: T, out: &mut [Option<T>]) {
    out.par_chunks_mut(SMA_CHUNK_LEN)
        .enumerate()
        .for_each(|(i, chunk)| fill_sma_window(prices, period, period_t, i * SMA_CHUNK_LEN, chunk));
}

#[cfg(not(feature = "parallel"))]
fn fill_chunks<T: SeriesElement>(prices: &[T], period: usize, period_t: T, out: &mut [Option<T>]) {
    for (i, chunk) in out.chunks_mut(SMA_CHUNK_LEN).enumerate() {
        fill_sma_window(prices, period, period_t, i * SMA_CHUNK_LEN, chunk);
    }
}
