//! Command-line interface argument parsing.

use clap::Parser;
use convtrend_common::ViewMode;
use std::path::PathBuf;

/// convtrend - conversion-rate trend series for A/B experiments
///
/// Reads an experiment document, aggregates per-variation conversion rates
/// by day or week and prints chart-ready JSON.
///
/// Examples:
///   convtrend --data data/experiment.json
///   convtrend --mode week --select 0 --select 10001 --pretty
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (YAML or TOML)
    ///
    /// If not specified, uses CONVTREND_CONFIG_PATH or looks for
    /// convtrend.yaml, convtrend.yml or convtrend.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Experiment document, overriding the configured data path
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Bucketing for the rows: day or week
    #[arg(short, long, value_name = "MODE", value_parser = parse_view_mode)]
    pub mode: Option<ViewMode>,

    /// Variation id to plot; repeat for several. Defaults to all variations
    #[arg(short, long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_view_mode(value: &str) -> Result<ViewMode, String> {
    value.parse().map_err(|e: convtrend_common::ConvTrendError| e.to_string())
}
