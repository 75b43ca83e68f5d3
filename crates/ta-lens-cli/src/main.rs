//! ta-lens command-line interface
//!
//! Reads price data from CSV, runs one indicator or the pattern classifier,
//! and writes CSV to a file or stdout. Diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use ta_lens_cli::args::Args;
use ta_lens_cli::commands;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_args();
    match commands::run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(input = args.input_path().unwrap_or("-"), error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
