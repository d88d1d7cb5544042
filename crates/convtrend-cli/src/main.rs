//! Main entry point for convtrend.

use anyhow::Context;
use clap::Parser;
use convtrend_cli::{logging_config, render, resolve_config, Args};
use convtrend_common::init_logging;
use convtrend_graphs::load_dataset;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = resolve_config(&args).context("Failed to load configuration")?;
    init_logging(logging_config(&config, args.verbose)).context("Failed to initialize logging")?;

    info!(data = %config.data.path, "Starting convtrend");

    let experiment = load_dataset(&config.data.path)
        .with_context(|| format!("Failed to load experiment from {}", config.data.path))?;

    let output = render(experiment, &config, &args)?;
    println!("{output}");

    Ok(())
}
