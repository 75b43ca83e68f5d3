//! Market Walkthrough
//!
//! Runs every indicator and the pattern classifier over small sample data
//! and prints the results.
//!
//! Run with: `cargo run --example market_walkthrough`
//! Add `RUST_LOG=debug` to see the library's tracing output.

use ta_lens::candlestick::{classify_sequence, Bar};
use ta_lens::indicators::{
    ema, fibonacci_levels, horizontal_support_resistance, macd, peak_trough, sma,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Daily closing prices
    let prices: Vec<f64> = vec![
        61.50, 62.30, 61.80, 62.50, 62.90, 63.00, 63.30, 63.70, 64.50, 65.20, 64.80, 65.00, 66.50,
        67.00, 67.80, 68.00, 67.50, 67.20, 68.50, 68.80,
    ];

    let sma_5 = sma(&prices, 5)?;
    let sma_10 = sma(&prices, 10)?;
    let ema_5 = ema(&prices, 5)?;
    let ema_10 = ema(&prices, 10)?;
    let macd_out = macd(&prices)?;

    let cell = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));

    println!("Moving averages and MACD:");
    println!(
        "  {:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Index", "Price", "SMA(5)", "SMA(10)", "EMA(5)", "EMA(10)", "MACD", "Signal"
    );
    for (i, price) in prices.iter().enumerate() {
        println!(
            "  {:>5} {:>8.2} {:>8} {:>8} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
            i,
            price,
            cell(sma_5[i]),
            cell(sma_10[i]),
            ema_5[i],
            ema_10[i],
            macd_out.macd_line[i],
            macd_out.signal_line[i]
        );
    }
    println!();

    let historical_prices = [
        100.0_f64, 102.0, 105.0, 102.0, 107.0, 103.0, 101.0, 106.0, 109.0, 107.0, 110.0, 105.0,
    ];

    let levels = horizontal_support_resistance(&historical_prices)?;
    println!("Horizontal levels:");
    println!("  Support:    {:?}", levels.support);
    println!("  Resistance: {:?}", levels.resistance);
    println!();

    println!("Fibonacci retracement (110 -> 100):");
    for (name, value) in fibonacci_levels(110.0_f64, 100.0)?.iter() {
        println!("  {name}: {value:.2}");
    }
    println!();

    let extrema = peak_trough(&historical_prices)?;
    println!("Peaks:   {:?}", extrema.peak_values());
    println!("Troughs: {:?}", extrema.trough_values());
    println!();

    let bars = vec![
        Bar::new("2023-01-01", 100.0_f64, 103.0, 99.0, 102.0)?,
        Bar::new("2023-01-02", 102.0, 104.0, 100.0, 101.0)?,
        Bar::new("2023-01-03", 101.0, 105.0, 100.0, 104.0)?,
        Bar::new("2023-01-04", 103.0, 104.0, 95.0, 99.0)?,
        Bar::new("2023-01-05", 99.0, 100.0, 97.0, 98.0)?,
        Bar::new("2023-01-06", 98.0, 99.0, 96.0, 97.0)?,
    ];

    println!("Candlestick patterns:");
    for event in classify_sequence(&bars)? {
        println!("  {}: {}", event.timestamp, event.kind);
    }

    Ok(())
}
