//! Command dispatch: read the input, call the library, write CSV.

use ta_lens::candlestick::classify_sequence;
use ta_lens::indicators::{
    ema, fibonacci_levels, fibonacci_levels_from_prices, horizontal_support_resistance,
    macd_with_periods, peak_trough, sma, LevelSet,
};
use tracing::info;

use crate::args::{parse_macd_params, parse_swing, Command};
use crate::csv_parser::{parse_bars, parse_csv, parse_prices, ParsedCsv};
use crate::csv_writer::{format_value, write_records, write_series, OutputDest};
use crate::error::{CliError, Result};

/// Runs one command to completion.
///
/// # Errors
///
/// Returns any argument, I/O, CSV or library error met along the way.
pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Sma {
            input,
            period,
            output,
            column,
        } => {
            let parsed = parse_csv(input)?;
            let prices = parsed.select_prices(column.as_deref())?;
            let values = sma(prices, *period)?;
            info!(period, rows = values.len(), "computed SMA");
            let header = format!("sma_{period}");
            emit_series(&parsed, &[(header.as_str(), &values)], output.as_deref())
        }
        Command::Ema {
            input,
            period,
            output,
            column,
        } => {
            let parsed = parse_csv(input)?;
            let prices = parsed.select_prices(column.as_deref())?;
            let values: Vec<Option<f64>> = ema(prices, *period)?.into_iter().map(Some).collect();
            info!(period, rows = values.len(), "computed EMA");
            let header = format!("ema_{period}");
            emit_series(&parsed, &[(header.as_str(), &values)], output.as_deref())
        }
        Command::Macd {
            input,
            params,
            output,
            column,
        } => {
            let (fast, slow, signal) = parse_macd_params(params)?;
            let parsed = parse_csv(input)?;
            let prices = parsed.select_prices(column.as_deref())?;
            let result = macd_with_periods(prices, fast, slow, signal)?;
            info!(fast, slow, signal, rows = result.len(), "computed MACD");

            let wrap = |v: Vec<f64>| -> Vec<Option<f64>> { v.into_iter().map(Some).collect() };
            let macd_line = wrap(result.macd_line);
            let signal_line = wrap(result.signal_line);
            let histogram = wrap(result.histogram);
            emit_series(
                &parsed,
                &[
                    ("macd", &macd_line),
                    ("signal", &signal_line),
                    ("histogram", &histogram),
                ],
                output.as_deref(),
            )
        }
        Command::Levels {
            input,
            output,
            column,
        } => {
            let parsed = parse_csv(input)?;
            let levels = horizontal_support_resistance(parsed.select_prices(column.as_deref())?)?;
            info!(
                support = levels.support.len(),
                resistance = levels.resistance.len(),
                "computed horizontal levels"
            );

            let records: Vec<Vec<String>> = levels
                .support
                .iter()
                .map(|&p| ("support", p))
                .chain(levels.resistance.iter().map(|&p| ("resistance", p)))
                .map(|(kind, price)| vec![kind.to_string(), format_value(Some(price))])
                .collect();
            emit_records(&["kind", "price"], &records, output.as_deref())
        }
        Command::Fib {
            input,
            swing,
            output,
            column,
        } => {
            let levels = match (swing, input) {
                (Some(swing), _) => {
                    let (high, low) = parse_swing(swing)?;
                    fibonacci_levels(high, low)?
                }
                (None, Some(input)) => {
                    fibonacci_levels_from_prices(&parse_prices(input, column.as_deref())?)?
                }
                (None, None) => {
                    return Err(CliError::InvalidArgument {
                        argument: "input".to_string(),
                        reason: "no price source given".to_string(),
                        suggestion: Some("Pass an input file or --swing high,low".to_string()),
                    });
                }
            };
            info!(levels = levels.len(), "computed Fibonacci levels");
            emit_records(&["level", "price"], &level_records(&levels), output.as_deref())
        }
        Command::Peaks {
            input,
            output,
            column,
        } => {
            let parsed = parse_csv(input)?;
            let extrema = peak_trough(parsed.select_prices(column.as_deref())?)?;
            info!(
                peaks = extrema.peaks.len(),
                troughs = extrema.troughs.len(),
                "computed peaks and troughs"
            );

            let mut rows: Vec<(usize, &str, f64)> = extrema
                .peaks
                .iter()
                .map(|e| (e.index, "peak", e.value))
                .chain(extrema.troughs.iter().map(|e| (e.index, "trough", e.value)))
                .collect();
            rows.sort_by_key(|&(index, _, _)| index);

            let dates = parsed.dates.as_deref();
            let header: &[&str] = if dates.is_some() {
                &["date", "index", "kind", "price"]
            } else {
                &["index", "kind", "price"]
            };
            let records: Vec<Vec<String>> = rows
                .into_iter()
                .map(|(index, kind, value)| {
                    let mut record = Vec::with_capacity(header.len());
                    if let Some(dates) = dates {
                        record.push(dates.get(index).cloned().unwrap_or_default());
                    }
                    record.push(index.to_string());
                    record.push(kind.to_string());
                    record.push(format_value(Some(value)));
                    record
                })
                .collect();
            emit_records(header, &records, output.as_deref())
        }
        Command::Patterns { input, output } => {
            let bars = parse_bars(input)?;
            let events = classify_sequence(&bars)?;
            info!(bars = bars.len(), events = events.len(), "classified patterns");

            let records: Vec<Vec<String>> = events
                .into_iter()
                .map(|event| vec![event.timestamp.text, event.kind.to_string()])
                .collect();
            emit_records(&["date", "pattern"], &records, output.as_deref())
        }
    }
}

fn level_records(levels: &LevelSet<f64>) -> Vec<Vec<String>> {
    levels
        .iter()
        .map(|(name, price)| vec![name.to_string(), format_value(Some(price))])
        .collect()
}

fn emit_series(
    parsed: &ParsedCsv,
    columns: &[(&str, &Vec<Option<f64>>)],
    output: Option<&str>,
) -> Result<()> {
    let columns: Vec<(&str, &[Option<f64>])> = columns
        .iter()
        .map(|(name, values)| (*name, values.as_slice()))
        .collect();
    let mut writer = OutputDest::from_path(output).writer()?;
    write_series(&mut writer, &columns, parsed.dates.as_deref())
}

fn emit_records(header: &[&str], records: &[Vec<String>], output: Option<&str>) -> Result<()> {
    let mut writer = OutputDest::from_path(output).writer()?;
    write_records(&mut writer, header, records)
}
