//! Configuration loading utilities

use crate::Config;
use convtrend_common::{ConvTrendError, Result as ConvTrendResult, ViewMode};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable selecting the configuration file.
pub const CONFIG_PATH_VAR: &str = "CONVTREND_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["convtrend.yaml", "convtrend.yml", "convtrend.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Unknown configuration file extension
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[source] ConvTrendError),
}

impl From<ConfigError> for ConvTrendError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::parse_file(path)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from `CONVTREND_CONFIG_PATH`, a file discovered in
    /// the working directory, or defaults
    pub fn load() -> ConvTrendResult<Config> {
        let explicit = env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new("."))
    }

    /// Load `explicit` if given, else the first default file in `search_dir`,
    /// else defaults
    pub fn load_from(explicit: Option<&Path>, search_dir: &Path) -> ConvTrendResult<Config> {
        if let Some(path) = explicit {
            return Ok(Self::load_config(path)?);
        }

        if let Some(found) = Self::discover(search_dir) {
            return Ok(Self::load_config(found)?);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// First of `DEFAULT_CONFIG_FILES` present in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConvTrendResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse a file without applying overrides or validation
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::parse_yaml(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a YAML document
    pub fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a TOML document
    pub fn parse_toml(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply process environment overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CONVTREND_DATA_PATH") {
            config.data.path = path;
        }

        if let Some(mode) = lookup("CONVTREND_VIEW_MODE") {
            config.chart.default_view_mode = mode
                .parse::<ViewMode>()
                .map_err(|e| ConfigError::EnvParseError {
                    var: "CONVTREND_VIEW_MODE".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("CONVTREND_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(ratio) = lookup("CONVTREND_PADDING_RATIO") {
            config.chart.range.padding_ratio = ratio
                .trim()
                .parse()
                .map_err(|e| ConfigError::EnvParseError {
                    var: "CONVTREND_PADDING_RATIO".to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}
