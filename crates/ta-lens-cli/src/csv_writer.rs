//! CSV output module for writing results.
//!
//! Series output keeps one row per input row so that it lines up with the
//! input file; undefined positions (an SMA warm-up, for example) are written
//! as empty cells. When the input had a date column it leads every row.
//!
//! Level, extremum and pattern output is a plain table of records.
//!
//! Both go through [`csv::Writer`], so text cells holding commas or quotes
//! come out quoted. A row made of one empty cell is written as `""`.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use csv::WriterBuilder;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Picks a file destination when a path is given, stdout otherwise.
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or(OutputDest::Stdout, |p| OutputDest::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::Io {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Formats one cell; `None` and NaN become an empty cell.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => v.to_string(),
        _ => String::new(),
    }
}

/// Write aligned series columns.
///
/// Every column must be as long as the first; shorter columns are padded
/// with empty cells.
pub fn write_series<W: Write>(
    writer: &mut W,
    columns: &[(&str, &[Option<f64>])],
    dates: Option<&[String]>,
) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if dates.is_some() {
        header.push("date");
    }
    header.extend(columns.iter().map(|(name, _)| *name));
    csv_writer.write_record(&header)?;

    let len = columns.first().map_or(0, |(_, values)| values.len());
    for i in 0..len {
        let mut cells: Vec<String> = Vec::with_capacity(header.len());
        if let Some(dates) = dates {
            cells.push(dates.get(i).cloned().unwrap_or_default());
        }
        cells.extend(
            columns
                .iter()
                .map(|(_, values)| format_value(values.get(i).copied().flatten())),
        );
        csv_writer.write_record(&cells)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a header followed by pre-formatted records.
pub fn write_records<W: Write>(
    writer: &mut W,
    header: &[&str],
    records: &[Vec<String>],
) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(header)?;
    for record in records {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
