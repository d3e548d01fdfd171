//! Command-line argument definition and processing.

use clap::Parser;

/// Mercado - A fast, friendly TUI for browsing Albion Online items and market prices
#[derive(Parser, Debug)]
#[command(name = "mercado")]
#[command(version)]
#[command(
    about = "A fast, friendly TUI for browsing Albion Online tradeable items and market price history",
    long_about = None
)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Ignore the cache envelope and fetch a fresh catalog
    #[arg(short = 'y', long)]
    pub refresh: bool,

    /// Display language for this session (en, es); overrides the saved setting
    #[arg(long)]
    pub lang: Option<String>,
}

/// What: Resolve the effective log level from the parsed arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set, otherwise the `--log-level` value.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
