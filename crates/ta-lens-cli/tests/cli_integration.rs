//! Integration tests for the ta-lens CLI.
//!
//! These tests run the compiled binary end to end: CSV input through the
//! library to CSV output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ta-lens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI, assert success, and return stdout.
fn run_cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "CLI failed for {args:?}: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_sma_keeps_one_row_per_input_row() {
    let stdout = run_cli_stdout(&["sma", &fixture("simple_close.csv"), "5"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "date,sma_5");
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[1], "2024-01-01,");
    assert_eq!(lines[4], "2024-01-04,");

    let (date, value) = lines[5].split_once(',').unwrap();
    assert_eq!(date, "2024-01-05");
    let value: f64 = value.parse().unwrap();
    assert!((value - 62.2).abs() < 1e-9);
}

#[test]
fn test_ema_is_defined_everywhere() {
    let stdout = run_cli_stdout(&["ema", &fixture("simple_close.csv"), "5"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "date,ema_5");
    assert_eq!(lines[1], "2024-01-01,61.5");
    assert!(lines[1..].iter().all(|l| !l.ends_with(',')));
}

#[test]
fn test_macd_default_params() {
    let stdout = run_cli_stdout(&["macd", &fixture("simple_close.csv")]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "date,macd,signal,histogram");
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[1], "2024-01-01,0,0,0");
}

#[test]
fn test_macd_rejects_bad_params() {
    let output = run_cli(&["macd", &fixture("simple_close.csv"), "26,12,9"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fast period must be less"), "stderr: {stderr}");
}

#[test]
fn test_levels_from_price_column() {
    let stdout = run_cli_stdout(&["levels", &fixture("historical.csv")]);
    assert_eq!(
        stdout,
        "kind,price\n\
         support,100\nsupport,101\nsupport,103\nsupport,106\nsupport,109\nsupport,110\n\
         resistance,102\nresistance,105\nresistance,107\n"
    );
}

#[test]
fn test_fib_from_series_matches_explicit_swing() {
    let from_series = run_cli_stdout(&["fib", &fixture("historical.csv")]);
    let explicit = run_cli_stdout(&["fib", "--swing", "110,100"]);
    assert_eq!(from_series, explicit);

    let lines: Vec<&str> = explicit.lines().collect();
    assert_eq!(lines[0], "level,price");
    assert_eq!(lines.len(), 7);
    let (name, value) = lines[1].split_once(',').unwrap();
    assert_eq!(name, "Support Level 1");
    let value: f64 = value.parse().unwrap();
    assert!((value - 107.64).abs() < 1e-9);
}

#[test]
fn test_fib_rejects_swing_with_input_file() {
    let output = run_cli(&["fib", &fixture("historical.csv"), "--swing", "110,100"]);
    assert!(!output.status.success());

    let output = run_cli(&["fib"]);
    assert!(!output.status.success());
}

#[test]
fn test_peaks_in_index_order() {
    let stdout = run_cli_stdout(&["peaks", &fixture("historical.csv")]);
    assert_eq!(
        stdout,
        "index,kind,price\n\
         2,peak,105\n3,trough,102\n4,peak,107\n6,trough,101\n\
         8,peak,109\n9,trough,107\n10,peak,110\n"
    );
}

#[test]
fn test_patterns_demo_bars() {
    let stdout = run_cli_stdout(&["patterns", &fixture("demo_bars.csv")]);
    assert_eq!(stdout, "date,pattern\n2023-01-02,Doji\n");
}

#[test]
fn test_patterns_unpadded_dates() {
    let stdout = run_cli_stdout(&["patterns", &fixture("unpadded_bars.csv")]);
    assert_eq!(stdout, "date,pattern\n2023-1-10,Doji\n");
}

#[test]
fn test_patterns_unordered_timestamps_fail() {
    let output = run_cli(&["patterns", &fixture("unordered_bars.csv")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("strictly increasing"), "stderr: {stderr}");
}

#[test]
fn test_patterns_require_ohlc_columns() {
    let output = run_cli(&["patterns", &fixture("simple_close.csv")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'open'"), "stderr: {stderr}");
}

#[test]
fn test_column_override() {
    let stdout = run_cli_stdout(&["sma", &fixture("demo_bars.csv"), "2", "-c", "open"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,sma_2");
    assert_eq!(lines[2], "2023-01-02,101");
}

#[test]
fn test_output_to_file() {
    let output = std::env::temp_dir().join("ta_lens_cli_integration_out.csv");
    let output_str = output.display().to_string();

    let result = run_cli(&["sma", &fixture("simple_close.csv"), "3", "-o", &output_str]);
    assert!(result.status.success());
    assert!(result.stdout.is_empty(), "file output should leave stdout empty");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("date,sma_3\n"));
    assert_eq!(content.lines().count(), 21);

    fs::remove_file(&output).ok();
}

#[test]
fn test_missing_file_exit_code() {
    let output = run_cli(&["sma", "/nonexistent/file.csv"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/file.csv"), "stderr: {stderr}");
}

#[test]
fn test_zero_period_is_reported() {
    let output = run_cli(&["sma", &fixture("simple_close.csv"), "0"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("period"), "stderr: {stderr}");
}

#[test]
fn test_help_flag() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["sma", "ema", "macd", "levels", "fib", "peaks", "patterns"] {
        assert!(stdout.contains(command), "help should list {command}");
    }
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ta-lens"));
}

#[test]
fn test_unknown_command_fails() {
    let output = run_cli(&["rsi", &fixture("simple_close.csv")]);
    assert!(!output.status.success());
}
