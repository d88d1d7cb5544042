//! Wiring between configuration, the dataset and the chart pipeline.

use crate::cli::Args;
use crate::error::{CliError, CliResult};
use convtrend_common::{series_key, LoggingConfig, ViewMode};
use convtrend_config::{Config, ConfigLoader};
use convtrend_graphs::{ChartPipeline, ChartSnapshot, RawExperiment, VariationSelection};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// JSON document printed by the command.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    snapshot: ChartSnapshot<'a>,
    /// Series key to display name.
    legend: BTreeMap<String, String>,
}

/// Loads configuration from `--config`, the environment or defaults, then
/// applies the command-line data path.
pub fn resolve_config(args: &Args) -> CliResult<Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(data) = &args.data {
        config.data.path = data.display().to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Logging setup from configuration. `--verbose` raises the level to debug
/// and logs span events.
pub fn logging_config(config: &Config, verbose: bool) -> LoggingConfig {
    let settings = &config.logging;
    LoggingConfig {
        level: if verbose {
            "debug".to_string()
        } else {
            settings.level.clone()
        },
        json_format: settings.json_format,
        pretty_format: settings.pretty_format,
        file_path: settings.file_path.clone(),
        include_spans: verbose || settings.include_spans,
        ..LoggingConfig::default()
    }
}

/// Builds the selection from `--select`, or every variation when none are
/// given. Ids unknown to the experiment are dropped with a warning.
pub fn build_selection(
    pipeline: &ChartPipeline,
    requested: &[String],
) -> CliResult<VariationSelection> {
    if requested.is_empty() {
        return Ok(pipeline.default_selection());
    }

    let known = pipeline.variation_ids();
    let is_known = |id: &&String| {
        let found = known.iter().any(|k| k.as_str() == id.as_str());
        if !found {
            warn!(variation = %id, "Ignoring unknown variation");
        }
        found
    };
    let selection = VariationSelection::from_ids(requested.iter().filter(is_known).cloned());

    if selection.is_empty() {
        return Err(CliError::EmptySelection(requested.join(", ")));
    }
    Ok(selection)
}

/// Renders the chart report for `experiment` as JSON.
pub fn render(experiment: &RawExperiment, config: &Config, args: &Args) -> CliResult<String> {
    let mode: ViewMode = args.mode.unwrap_or(config.chart.default_view_mode);
    let pipeline = ChartPipeline::new(experiment, config.chart.range);
    let selection = build_selection(&pipeline, &args.select)?;

    let legend = pipeline
        .variation_ids()
        .iter()
        .map(|id| {
            let key = series_key(id.as_str());
            let label = experiment.legend_label(&key);
            (key, label)
        })
        .collect();

    let report = Report {
        snapshot: pipeline.snapshot(mode, &selection),
        legend,
    };
    info!(
        mode = %mode,
        rows = report.snapshot.rows.len(),
        selected = selection.len(),
        "Rendered chart report"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}
