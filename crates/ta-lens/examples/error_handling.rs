//! Error Handling Examples
//!
//! This example demonstrates how ta-lens reports bad input.
//!
//! Run with: `cargo run --example error_handling`

#![allow(clippy::items_after_statements)]

use ta_lens::candlestick::{classify_sequence, Bar};
use ta_lens::indicators::{fibonacci_levels, peak_trough, sma, sma_lookback, sma_min_len};
use ta_lens::Error;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Empty input
    println!("1. Empty Input:");
    let empty: Vec<f64> = vec![];
    match sma(&empty, 5) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::EmptyInput) => {
            println!("   Caught EmptyInput error (expected)");
            println!("   Fix: Provide at least one data point");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Insufficient data
    println!("2. Insufficient Data:");
    match peak_trough(&[1.0_f64, 2.0]) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InsufficientData {
            required,
            actual,
            operation,
        }) => {
            println!("   Caught InsufficientData error (expected)");
            println!("   Details: {operation} requires {required} elements, got {actual}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Invalid parameters
    println!("3. Invalid Parameters:");
    let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
    for result in [
        sma(&data, 0).map(|_| ()),
        fibonacci_levels(100.0_f64, 110.0).map(|_| ()),
    ] {
        match result {
            Err(Error::InvalidParameter { parameter, reason }) => {
                println!("   Caught InvalidParameter: {parameter} ({reason})");
            }
            other => println!("   Unexpected result: {other:?}"),
        }
    }
    println!();

    // Example 4: Non-finite prices
    println!("4. Non-finite Prices:");
    match sma(&[1.0_f64, f64::NAN, 3.0], 2) {
        Err(Error::NonFiniteInput { index }) => {
            println!("   Caught NonFiniteInput at index {index}");
            println!("   Fix: Drop or fill missing observations before calling");
        }
        other => println!("   Unexpected result: {other:?}"),
    }
    println!();

    // Example 5: Inconsistent bars
    println!("5. Inconsistent Bars:");
    let bars = vec![
        Bar {
            timestamp: 2,
            open: 100.0_f64,
            high: 103.0,
            low: 99.0,
            close: 102.0,
        },
        Bar {
            timestamp: 1,
            open: 102.0,
            high: 104.0,
            low: 100.0,
            close: 101.0,
        },
    ];
    match classify_sequence(&bars) {
        Err(e @ Error::UnorderedTimestamps { .. }) => println!("   Caught: {e}"),
        other => println!("   Unexpected result: {other:?}"),
    }
    println!();

    // Example 6: Lookback instead of an error
    println!("6. Periods Longer Than The Data:");
    let period = 20;
    println!("   SMA({period}) needs {} prices", sma_min_len(period));
    match sma(&data, period) {
        Ok(values) => println!(
            "   Got {} undefined positions (lookback {})",
            values.iter().filter(|v| v.is_none()).count(),
            sma_lookback(period)
        ),
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // Example 7: Converting to standard error types
    println!("7. Converting to Box<dyn Error>:");

    fn last_sma(data: &[f64]) -> Result<Option<f64>, Box<dyn std::error::Error>> {
        let values = sma(data, 3)?;
        Ok(values.last().copied().flatten())
    }

    match last_sma(&data) {
        Ok(value) => println!("   Success: {value:?}"),
        Err(e) => println!("   Error: {e}"),
    }

    println!();
    println!("=== All error examples completed ===");
}
