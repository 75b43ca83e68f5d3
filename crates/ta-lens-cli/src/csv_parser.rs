//! CSV parsing module for reading price data from CSV files.
//!
//! # Column Detection
//!
//! Headers are matched case-insensitively after trimming:
//! - `close`, `price`, `adj close`, `adjusted close` → prices (in that order)
//! - `open`, `high`, `low` → the remaining bar fields
//! - `date`, `time`, `datetime`, `timestamp`, `dt` → the date column
//!
//! The date column is kept as text for series output. Bars parse it into a
//! [`BarTime`] so that ordering follows the calendar rather than the text.
//! Empty numeric cells become NaN, which the library reports as a non-finite
//! value at that row.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use ta_lens::candlestick::Bar;
use tracing::debug;

use crate::error::{CliError, Result};

const PRICE_COLUMNS: [&str; 4] = ["close", "price", "adj close", "adjusted close"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Timestamp of one bar read from a CSV row.
///
/// Compares by the parsed instant only; `text` is what the file said and is
/// what gets written back out.
#[derive(Debug, Clone)]
pub struct BarTime {
    /// The parsed instant.
    pub at: NaiveDateTime,
    /// The cell as written in the input.
    pub text: String,
}

impl BarTime {
    /// Parses a date cell.
    ///
    /// Accepts ISO-like dates and date-times (with or without zero padding),
    /// slash-separated dates, and integer Unix seconds.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Csv` if no known format matches.
    pub fn parse(text: &str) -> Result<Self> {
        parse_instant(text)
            .map(|at| Self {
                at,
                text: text.to_string(),
            })
            .ok_or_else(|| {
                CliError::csv(format!(
                    "unrecognized date '{text}' (expected e.g. 2024-01-31 or 2024-01-31 09:30:00)"
                ))
            })
    }
}

fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    if let Ok(secs) = text.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl PartialEq for BarTime {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for BarTime {}

impl PartialOrd for BarTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BarTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

impl fmt::Display for BarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parsed CSV data with column mapping.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers as they appear in the file.
    pub headers: Vec<String>,
    /// Date column values, if the file has one.
    pub dates: Option<Vec<String>>,
    /// Numeric columns keyed by normalized header.
    pub columns: HashMap<String, Vec<f64>>,
    /// Number of data rows parsed.
    pub row_count: usize,
}

impl ParsedCsv {
    /// Get a column by header name, matched case-insensitively.
    pub fn get_column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .get(&normalize_header(name))
            .map(Vec::as_slice)
    }

    /// Get the price series, trying the common close-price headers in order.
    pub fn get_prices(&self) -> Option<&[f64]> {
        PRICE_COLUMNS.iter().find_map(|name| self.get_column(name))
    }

    /// Get the price series from `column`, or auto-detect it when `None`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Csv` if the requested column (or any close-price
    /// column, when auto-detecting) is missing.
    pub fn select_prices(&self, column: Option<&str>) -> Result<&[f64]> {
        match column {
            Some(name) => self.get_column(name).ok_or_else(|| {
                CliError::csv(format!(
                    "no '{name}' column found (available: {})",
                    self.headers.join(", ")
                ))
            }),
            None => self.get_prices().ok_or_else(|| {
                CliError::csv(
                    "no price column found (expected 'close', 'price', or 'adj close')",
                )
            }),
        }
    }

    fn require(&self, name: &str) -> Result<&[f64]> {
        self.get_column(name)
            .ok_or_else(|| CliError::csv(format!("no '{name}' column found")))
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn is_date_column(normalized: &str) -> bool {
    matches!(
        normalized,
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

fn parse_value(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| CliError::csv(format!("cannot parse '{trimmed}' as number")))
    }
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read, or `CliError::Csv`
/// if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::Io {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    let parsed = parse_csv_from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        rows = parsed.row_count,
        columns = parsed.columns.len(),
        "parsed CSV input"
    );
    Ok(parsed)
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::Csv` if the CSV is malformed or a numeric cell does
/// not parse; the error carries the 1-based line number.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::csv(e.to_string()).at_line(1))?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::csv("CSV file has no headers").at_line(1));
    }

    let mut date_idx = None;
    let mut numeric: Vec<(usize, String)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        let normalized = normalize_header(header);
        if is_date_column(&normalized) {
            date_idx.get_or_insert(idx);
        } else if !normalized.is_empty() {
            numeric.push((idx, normalized));
        }
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); numeric.len()];
    let mut dates = Vec::new();
    let mut row_count = 0;

    for (row, record) in csv_reader.records().enumerate() {
        // header is line 1
        let line = row + 2;
        let record = record.map_err(|e| CliError::csv(e.to_string()).at_line(line))?;

        if let Some(idx) = date_idx {
            dates.push(record.get(idx).unwrap_or("").trim().to_string());
        }
        for ((idx, _), column) in numeric.iter().zip(values.iter_mut()) {
            let value = parse_value(record.get(*idx).unwrap_or(""));
            column.push(value.map_err(|e| e.at_line(line))?);
        }
        row_count += 1;
    }

    Ok(ParsedCsv {
        headers,
        dates: date_idx.map(|_| dates),
        columns: numeric
            .into_iter()
            .map(|(_, name)| name)
            .zip(values)
            .collect(),
        row_count,
    })
}

/// Parse a CSV file into a price series.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the column is missing.
pub fn parse_prices<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Vec<f64>> {
    let parsed = parse_csv(path)?;
    parsed.select_prices(column).map(<[f64]>::to_vec)
}

/// Build OHLC bars from parsed CSV data, timestamped by the date column.
///
/// Bars are not validated here; the classifier checks them and reports the
/// offending row index.
///
/// # Errors
///
/// Returns `CliError::Csv` if the date, open, high, low or close column is
/// missing, or if a date cell cannot be parsed (with its line number).
pub fn bars_from_csv(parsed: &ParsedCsv) -> Result<Vec<Bar<f64, BarTime>>> {
    let dates = parsed.dates.as_ref().ok_or_else(|| {
        CliError::csv("no date column found (expected 'date', 'time', 'datetime' or 'timestamp')")
    })?;
    let open = parsed.require("open")?;
    let high = parsed.require("high")?;
    let low = parsed.require("low")?;
    let close = parsed.require("close")?;

    dates
        .iter()
        .zip(open)
        .zip(high)
        .zip(low)
        .zip(close)
        .enumerate()
        .map(|(row, ((((date, &open), &high), &low), &close))| {
            // header is line 1
            let timestamp = BarTime::parse(date).map_err(|e| e.at_line(row + 2))?;
            Ok(Bar {
                timestamp,
                open,
                high,
                low,
                close,
            })
        })
        .collect()
}

/// Parse a CSV file into OHLC bars.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a required column is
/// missing, or a date cannot be parsed.
pub fn parse_bars<P: AsRef<Path>>(path: P) -> Result<Vec<Bar<f64, BarTime>>> {
    bars_from_csv(&parse_csv(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_lens::candlestick::{classify_sequence, PatternKind};
    use std::io::Cursor;

    fn parse_str(data: &str) -> Result<ParsedCsv> {
        parse_csv_from_reader(Cursor::new(data))
    }

    #[test]
    fn test_parse_simple_close_prices() {
        let parsed = parse_str("close\n44.0\n44.5\n43.5\n44.5\n44.0\n").unwrap();
        let close = parsed.get_prices().unwrap();
        assert_eq!(close.len(), 5);
        assert!((close[0] - 44.0).abs() < 1e-10);
        assert!((close[2] - 43.5).abs() < 1e-10);
        assert_eq!(parsed.row_count, 5);
        assert!(parsed.dates.is_none());
    }

    #[test]
    fn test_parse_ohlc_with_dates() {
        let parsed = parse_str(
            "date,open,high,low,close\n\
             2023-01-01,100,103,99,102\n\
             2023-01-02,102,104,100,101\n",
        )
        .unwrap();

        let dates = parsed.dates.as_ref().unwrap();
        assert_eq!(dates, &["2023-01-01", "2023-01-02"]);
        assert!((parsed.get_column("high").unwrap()[1] - 104.0).abs() < 1e-10);
        assert!((parsed.get_prices().unwrap()[0] - 102.0).abs() < 1e-10);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let parsed = parse_str(" Close ,HIGH,low,OPEN\n44.0,45.0,43.0,44.5\n").unwrap();
        assert!(parsed.get_prices().is_some());
        assert!(parsed.get_column("High").is_some());
        assert!(parsed.get_column("low").is_some());
        assert!(parsed.get_column("open").is_some());
    }

    #[test]
    fn test_alternative_price_column_names() {
        for header in ["price", "Adj Close", "adjusted close"] {
            let parsed = parse_str(&format!("{header}\n44.0\n44.5\n")).unwrap();
            assert_eq!(parsed.get_prices().map(<[f64]>::len), Some(2), "{header}");
        }
    }

    #[test]
    fn test_close_preferred_over_adj_close() {
        let parsed = parse_str("adj close,close\n1.0,2.0\n").unwrap();
        assert!((parsed.get_prices().unwrap()[0] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_select_prices_with_override() {
        let parsed = parse_str("close,adj close\n1.0,2.0\n").unwrap();
        let prices = parsed.select_prices(Some("ADJ CLOSE")).unwrap();
        assert!((prices[0] - 2.0).abs() < 1e-10);

        match parsed.select_prices(Some("volume")) {
            Err(CliError::Csv { message, .. }) => {
                assert!(message.contains("volume"));
                assert!(message.contains("adj close"));
            }
            other => panic!("Expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_values_become_nan() {
        let parsed =
            parse_str("date,close\n2024-01-01,44.0\n2024-01-02,\n2024-01-03,45.0\n").unwrap();
        let close = parsed.get_prices().unwrap();
        assert_eq!(close.len(), 3);
        assert!(close[1].is_nan());
    }

    #[test]
    fn test_whitespace_in_values() {
        let parsed = parse_str("close\n  44.0  \n 44.5\n43.5 \n").unwrap();
        let close = parsed.get_prices().unwrap();
        assert!((close[0] - 44.0).abs() < 1e-10);
        assert!((close[2] - 43.5).abs() < 1e-10);
    }

    #[test]
    fn test_malformed_value_reports_line() {
        match parse_str("date,close\n2024-01-01,44.0\n2024-01-02,not_a_number\n") {
            Err(CliError::Csv { message, line }) => {
                assert!(message.contains("not_a_number"));
                assert_eq!(line, Some(3));
            }
            other => panic!("Expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_price_column() {
        let parsed = parse_str("open,high,low\n44.0,45.0,43.5\n").unwrap();
        assert!(matches!(parsed.select_prices(None), Err(CliError::Csv { .. })));
    }

    #[test]
    fn test_header_only_file() {
        let parsed = parse_str("close\n").unwrap();
        assert_eq!(parsed.row_count, 0);
        assert!(parsed.get_prices().unwrap().is_empty());
    }

    #[test]
    fn test_various_date_column_names() {
        for name in ["date", "Date", "DATE", "time", "datetime", "timestamp", "dt"] {
            let parsed = parse_str(&format!("{name},close\n2024-01-01,44.0\n")).unwrap();
            assert!(parsed.dates.is_some(), "Failed to detect date column: {name}");
            assert!(parsed.get_column(name).is_none());
        }
    }

    #[test]
    fn test_file_not_found() {
        match parse_csv("/nonexistent/path/to/prices.csv") {
            Err(CliError::Io { path, .. }) => {
                assert!(path.unwrap().contains("nonexistent"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_bars_from_csv() {
        let parsed = parse_str(
            "Date,Open,High,Low,Close,Volume\n\
             2023-01-01,100,103,99,102,1000\n\
             2023-01-02,102,104,100,101,1100\n",
        )
        .unwrap();
        let bars = bars_from_csv(&parsed).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].timestamp.to_string(), "2023-01-02");
        assert!(bars[0].timestamp < bars[1].timestamp);
        assert!((bars[1].open - 102.0).abs() < 1e-10);
        assert!((bars[1].high - 104.0).abs() < 1e-10);
        assert!((bars[1].low - 100.0).abs() < 1e-10);
        assert!((bars[1].close - 101.0).abs() < 1e-10);
    }

    #[test]
    fn test_bars_require_every_column() {
        let parsed = parse_str("open,high,low,close\n1,2,0.5,1.5\n").unwrap();
        match bars_from_csv(&parsed) {
            Err(CliError::Csv { message, .. }) => assert!(message.contains("date")),
            other => panic!("Expected Csv error, got {other:?}"),
        }

        let parsed = parse_str("date,open,high,close\n2023-01-01,1,2,1.5\n").unwrap();
        match bars_from_csv(&parsed) {
            Err(CliError::Csv { message, .. }) => assert!(message.contains("'low'")),
            other => panic!("Expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_unpadded_dates_order_by_calendar() {
        let parsed = parse_str(
            "date,open,high,low,close\n\
             2023-1-9,100,103,99,102\n\
             2023-1-10,102,104,100,101\n\
             2023-1-11,101,105,100,104\n",
        )
        .unwrap();
        let bars = bars_from_csv(&parsed).unwrap();
        assert!(bars[0].timestamp < bars[1].timestamp);

        let events = classify_sequence(&bars).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp.to_string(), "2023-1-10");
        assert_eq!(events[0].kind, PatternKind::Doji);
    }

    #[test]
    fn test_bar_time_formats() {
        let date = BarTime::parse("2024-03-05").unwrap();
        let slashed = BarTime::parse("2024/03/05").unwrap();
        let us = BarTime::parse("03/05/2024").unwrap();
        assert_eq!(date, slashed);
        assert_eq!(date, us);

        let morning = BarTime::parse("2024-03-05 09:30:00").unwrap();
        let iso = BarTime::parse("2024-03-05T09:30:00").unwrap();
        assert_eq!(morning, iso);
        assert!(date < morning);

        let epoch = BarTime::parse("86400").unwrap();
        assert_eq!(epoch, BarTime::parse("1970-01-02").unwrap());
        assert_eq!(epoch.to_string(), "86400");
    }

    #[test]
    fn test_unparseable_bar_date_reports_line() {
        let parsed = parse_str(
            "date,open,high,low,close\n\
             2023-01-01,100,103,99,102\n\
             yesterday,102,104,100,101\n",
        )
        .unwrap();
        match bars_from_csv(&parsed) {
            Err(CliError::Csv { message, line }) => {
                assert!(message.contains("yesterday"));
                assert_eq!(line, Some(3));
            }
            other => panic!("Expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_prices_from_file() {
        let path = std::env::temp_dir().join("ta_lens_cli_parse_prices.csv");
        std::fs::write(&path, "date,close\n2024-01-01,44.0\n2024-01-02,44.5\n").unwrap();

        let prices = parse_prices(&path, None).unwrap();
        assert_eq!(prices.len(), 2);
        assert!((prices[1] - 44.5).abs() < 1e-10);

        std::fs::remove_file(&path).ok();
    }
}
