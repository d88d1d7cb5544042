//! Configuration schema definitions using serde.

use convtrend_common::ViewMode;
use serde::{Deserialize, Serialize};

/// Main configuration structure for convtrend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset location.
    pub data: DataConfig,
    /// Chart defaults consumed by the pipeline.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LogSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the experiment JSON document.
    pub path: String,
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// View mode used when none is requested explicitly.
    pub default_view_mode: ViewMode,
    /// Axis range padding.
    pub range: RangeConfig,
}

/// Axis range padding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Fraction of the value spread added above and below the data.
    pub padding_ratio: f64,
    /// Padding used when the spread is zero.
    pub fallback_padding: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level or `tracing` filter directive.
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json_format: bool,
    /// Multi-line human readable output. Ignored when `json_format` is set.
    pub pretty_format: bool,
    /// Append logs to this file instead of stderr.
    pub file_path: Option<String>,
    /// Log span open and close events.
    pub include_spans: bool,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> convtrend_common::Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
