//! Shared test utilities for ta-lens integration tests.

use ta_lens::candlestick::Bar;

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Twenty daily closing prices used throughout the walkthrough example.
#[allow(dead_code)]
pub const CLOSING_PRICES: [f64; 20] = [
    61.50, 62.30, 61.80, 62.50, 62.90, 63.00, 63.30, 63.70, 64.50, 65.20, 64.80, 65.00, 66.50,
    67.00, 67.80, 68.00, 67.50, 67.20, 68.50, 68.80,
];

/// A short price history with repeated levels and clear swings.
#[allow(dead_code)]
pub const HISTORICAL_PRICES: [f64; 12] = [
    100.0, 102.0, 105.0, 102.0, 107.0, 103.0, 101.0, 106.0, 109.0, 107.0, 110.0, 105.0,
];

/// Approximate equality check for floating-point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Compares an indicator series with expected values, treating `None` as undefined.
#[allow(dead_code)]
pub fn assert_series_close(
    actual: &[Option<f64>],
    expected: &[Option<f64>],
    eps: f64,
    label: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{label}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (None, None) => {}
            (Some(a), Some(e)) => assert!(
                approx_eq(*a, *e, eps),
                "{label}[{i}] expected {e}, got {a}"
            ),
            _ => panic!("{label}[{i}] expected {e:?}, got {a:?}"),
        }
    }
}

/// Six daily bars whose only pattern is a doji on the second day.
#[allow(dead_code)]
pub fn demo_bars() -> Vec<Bar<f64, String>> {
    let rows = [
        ("2023-01-01", 100.0, 103.0, 99.0, 102.0),
        ("2023-01-02", 102.0, 104.0, 100.0, 101.0),
        ("2023-01-03", 101.0, 105.0, 100.0, 104.0),
        ("2023-01-04", 103.0, 104.0, 95.0, 99.0),
        ("2023-01-05", 99.0, 100.0, 97.0, 98.0),
        ("2023-01-06", 98.0, 99.0, 96.0, 97.0),
    ];
    rows.iter()
        .map(|&(ts, open, high, low, close)| Bar {
            timestamp: ts.to_string(),
            open,
            high,
            low,
            close,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0, 1.1, EPSILON));
        assert!(!approx_eq(f64::NAN, f64::NAN, EPSILON));
    }

    #[test]
    fn test_demo_bars_are_valid() {
        for (i, bar) in demo_bars().iter().enumerate() {
            assert!(bar.validate(i).is_ok());
        }
    }
}
