//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `ta-lens <command> <input.csv> [params] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Simple Moving Average with default period (20)
//! ta-lens sma prices.csv
//!
//! # EMA over the "adj close" column, written to a file
//! ta-lens ema prices.csv 10 -c "adj close" -o ema.csv
//!
//! # MACD with custom parameters
//! ta-lens macd prices.csv 12,26,9
//!
//! # Fibonacci retracement from an explicit swing
//! ta-lens fib --swing 110,100
//!
//! # Candlestick patterns from an OHLC file
//! ta-lens patterns bars.csv
//! ```

use clap::{Parser, Subcommand};

use crate::error::{CliError, Result};

/// ta-lens: technical indicators and candlestick patterns from CSV data
#[derive(Parser, Debug)]
#[command(name = "ta-lens")]
#[command(author, version, about = "Technical indicators and candlestick patterns")]
#[command(long_about = "ta-lens computes moving averages, MACD, price levels and \
    candlestick patterns from CSV price data. Results are written as CSV to a file \
    or stdout. Set RUST_LOG=debug for diagnostics on stderr.")]
pub struct Args {
    /// The operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simple Moving Average
    #[command(about = "Simple Moving Average (SMA)")]
    Sma {
        /// Input CSV file
        input: String,

        /// Period for the moving average
        #[arg(default_value = "20")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices (auto-detected if not specified)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Exponential Moving Average
    #[command(about = "Exponential Moving Average (EMA)")]
    Ema {
        /// Input CSV file
        input: String,

        /// Period for the moving average
        #[arg(default_value = "20")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Moving Average Convergence Divergence
    #[command(about = "MACD (Moving Average Convergence Divergence)")]
    Macd {
        /// Input CSV file
        input: String,

        /// Parameters: fast_period,slow_period,signal_period (e.g., 12,26,9)
        #[arg(default_value = "12,26,9")]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Horizontal support and resistance
    #[command(about = "Horizontal support and resistance levels")]
    Levels {
        /// Input CSV file
        input: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Fibonacci retracement levels
    #[command(about = "Fibonacci retracement levels")]
    Fib {
        /// Input CSV file; the swing is taken from its max and min
        #[arg(required_unless_present = "swing")]
        input: Option<String>,

        /// Explicit swing as swing_high,swing_low instead of an input file
        #[arg(short, long, conflicts_with_all = ["input", "column"])]
        swing: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Local peaks and troughs
    #[command(about = "Local peaks and troughs")]
    Peaks {
        /// Input CSV file
        input: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Candlestick patterns
    #[command(about = "Candlestick patterns (doji, hammer, engulfing)")]
    Patterns {
        /// Input CSV file with date, open, high, low and close columns
        input: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Get the input file path from the command.
    ///
    /// `None` only for `fib` given an explicit swing.
    pub fn input_path(&self) -> Option<&str> {
        match &self.command {
            Command::Sma { input, .. }
            | Command::Ema { input, .. }
            | Command::Macd { input, .. }
            | Command::Levels { input, .. }
            | Command::Peaks { input, .. }
            | Command::Patterns { input, .. } => Some(input),
            Command::Fib { input, .. } => input.as_deref(),
        }
    }

    /// Get the output file path from the command, if specified.
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Sma { output, .. }
            | Command::Ema { output, .. }
            | Command::Macd { output, .. }
            | Command::Levels { output, .. }
            | Command::Fib { output, .. }
            | Command::Peaks { output, .. }
            | Command::Patterns { output, .. } => output.as_deref(),
        }
    }

    /// Get the price column override, if the command takes one.
    pub fn column(&self) -> Option<&str> {
        match &self.command {
            Command::Sma { column, .. }
            | Command::Ema { column, .. }
            | Command::Macd { column, .. }
            | Command::Levels { column, .. }
            | Command::Fib { column, .. }
            | Command::Peaks { column, .. } => column.as_deref(),
            Command::Patterns { .. } => None,
        }
    }
}

/// Parse MACD parameters from string "fast,slow,signal".
pub fn parse_macd_params(params: &str) -> Result<(usize, usize, usize)> {
    let parts: Vec<&str> = params.split(',').collect();
    let [fast, slow, signal] = parts.as_slice() else {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: format!("MACD requires 3 parameters, got {}", parts.len()),
            suggestion: Some("Use format: fast,slow,signal (e.g., 12,26,9)".to_string()),
        });
    };

    let fast = parse_period(fast, "fast_period", 12)?;
    let slow = parse_period(slow, "slow_period", 26)?;
    let signal = parse_period(signal, "signal_period", 9)?;

    if fast >= slow {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: "fast period must be less than slow period".to_string(),
            suggestion: Some("Use fast < slow (e.g., 12,26,9)".to_string()),
        });
    }

    Ok((fast, slow, signal))
}

/// Parse a swing from string "swing_high,swing_low".
pub fn parse_swing(swing: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = swing.split(',').collect();
    let [high, low] = parts.as_slice() else {
        return Err(CliError::InvalidArgument {
            argument: "swing".to_string(),
            reason: format!("a swing requires 2 values, got {}", parts.len()),
            suggestion: Some("Use format: swing_high,swing_low (e.g., 110,100)".to_string()),
        });
    };

    let parse = |value: &str, argument: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| CliError::InvalidArgument {
                argument: argument.to_string(),
                reason: format!("cannot parse '{value}' as number"),
                suggestion: None,
            })
    };
    let high = parse(*high, "swing_high")?;
    let low = parse(*low, "swing_low")?;

    if high < low {
        return Err(CliError::InvalidArgument {
            argument: "swing".to_string(),
            reason: "swing high must not be below swing low".to_string(),
            suggestion: Some("Put the high first (e.g., 110,100)".to_string()),
        });
    }

    Ok((high, low))
}

fn parse_period(value: &str, argument: &str, example: usize) -> Result<usize> {
    let period = value
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidArgument {
            argument: argument.to_string(),
            reason: format!("cannot parse '{value}' as integer"),
            suggestion: Some(format!("Use a positive integer like {example}")),
        })?;
    if period == 0 {
        return Err(CliError::InvalidArgument {
            argument: argument.to_string(),
            reason: "all periods must be positive".to_string(),
            suggestion: Some(format!("Use a positive integer like {example}")),
        });
    }
    Ok(period)
}
