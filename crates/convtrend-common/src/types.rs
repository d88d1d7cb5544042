//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field prefix for per-variation conversion rates in aggregated rows.
pub const SERIES_PREFIX: &str = "conversionRate_";

/// String identity key of an experiment variation.
///
/// Numeric ids are rendered in decimal; a falsy id (zero, null, missing,
/// empty) is always the literal `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationId(pub String);

impl VariationId {
    /// Creates an id from any string-like key, mapping an empty key to `"0"`.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            Self::default()
        } else {
            Self(key)
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the row field name carrying this variation's rate.
    pub fn series_key(&self) -> String {
        series_key(&self.0)
    }
}

impl Default for VariationId {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl fmt::Display for VariationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariationId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u64> for VariationId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for VariationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds the `conversionRate_<id>` field name for a variation key.
pub fn series_key(id: &str) -> String {
    format!("{SERIES_PREFIX}{id}")
}

/// Time bucketing applied to the normalized points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One row per calendar date.
    #[default]
    Day,
    /// One row per week bucket, dated by its Monday.
    Week,
}

impl ViewMode {
    /// Returns the lowercase name used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = crate::ConvTrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            other => Err(crate::ConvTrendError::validation_field(
                format!("unknown view mode '{other}', expected 'day' or 'week'"),
                "view_mode",
            )),
        }
    }
}
