//! Default values for every configuration section.

use crate::schema::*;
use convtrend_common::ViewMode;

/// Default dataset path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/experiment.json";

/// Default fraction of the value spread used as axis padding.
pub const DEFAULT_PADDING_RATIO: f64 = 0.12;

/// Default padding when all sampled values are equal.
pub const DEFAULT_FALLBACK_PADDING: f64 = 1.0;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            chart: ChartConfig::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_view_mode: ViewMode::Day,
            range: RangeConfig::default(),
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            padding_ratio: DEFAULT_PADDING_RATIO,
            fallback_padding: DEFAULT_FALLBACK_PADDING,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
        }
    }
}
