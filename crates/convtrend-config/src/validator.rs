//! Runtime validation of loaded configuration.

use crate::schema::{Config, RangeConfig};
use convtrend_common::{ConvTrendError, Result};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.data.path.trim().is_empty() {
            return Err(ConvTrendError::validation_field(
                "dataset path cannot be empty",
                "data.path",
            ));
        }

        Self::validate_range(&config.chart.range)?;
        Self::validate_log_level(&config.logging.level)?;

        if config.logging.file_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConvTrendError::validation_field(
                "log file path cannot be empty",
                "logging.file_path",
            ));
        }

        Ok(())
    }

    /// Validates axis padding parameters.
    pub fn validate_range(range: &RangeConfig) -> Result<()> {
        if !range.padding_ratio.is_finite() || range.padding_ratio < 0.0 {
            return Err(ConvTrendError::validation_field(
                format!(
                    "padding ratio must be a non-negative number, got {}",
                    range.padding_ratio
                ),
                "chart.range.padding_ratio",
            ));
        }

        if !range.fallback_padding.is_finite() || range.fallback_padding <= 0.0 {
            return Err(ConvTrendError::validation_field(
                format!("fallback padding must be positive, got {}", range.fallback_padding),
                "chart.range.fallback_padding",
            ));
        }

        Ok(())
    }

    /// Accepts a bare level name or a `target=level` filter directive list.
    pub fn validate_log_level(level: &str) -> Result<()> {
        let level = level.trim();
        if level.is_empty() {
            return Err(ConvTrendError::validation_field(
                "log level cannot be empty",
                "logging.level",
            ));
        }

        if level.contains('=') || level.contains(',') {
            return Ok(());
        }

        if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConvTrendError::validation_field(
                format!("unknown log level '{level}'"),
                "logging.level",
            ))
        }
    }
}
