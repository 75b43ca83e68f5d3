//! CLI error types for handling file I/O, parsing, and library errors.
//!
//! Messages are meant to be read by a person at a terminal: each one says
//! what went wrong and, where there is an obvious fix, how to fix it.

use std::io;

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    #[error("{}", io_message(.source, .path.as_deref()))]
    Io {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },

    /// The CSV input could not be read.
    #[error(
        "CSV parse error{}: {message}. Ensure the file has a header row and numeric price columns.",
        line_suffix(.line.as_ref())
    )]
    Csv {
        /// Description of the parse error.
        message: String,
        /// 1-based line number where the error occurred, if known.
        line: Option<usize>,
    },

    /// An invalid argument was provided.
    #[error("invalid argument '{argument}': {reason}{}", suggestion_suffix(.suggestion.as_deref()))]
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },

    /// The library rejected the input.
    #[error("computation failed: {0}")]
    Library(#[from] ta_lens::Error),
}

fn io_message(source: &io::Error, path: Option<&str>) -> String {
    match path {
        Some(p) => format!(
            "I/O error with file '{p}': {source}. Check that the file exists and is accessible."
        ),
        None => format!("I/O error: {source}"),
    }
}

fn line_suffix(line: Option<&usize>) -> String {
    line.map(|l| format!(" on line {l}")).unwrap_or_default()
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map(|s| format!(". {s}")).unwrap_or_default()
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io {
            source: err,
            path: None,
        }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize);
        CliError::Csv {
            message: err.to_string(),
            line,
        }
    }
}

impl CliError {
    /// Shorthand for a CSV error without a line number.
    pub fn csv(message: impl Into<String>) -> Self {
        CliError::Csv {
            message: message.into(),
            line: None,
        }
    }

    /// Returns the same error with its line number set, if it is a CSV error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            CliError::Csv { message, .. } => CliError::Csv {
                message,
                line: Some(line),
            },
            other => other,
        }
    }
}
