//! Experiment document model and the process-wide dataset.
//!
//! The document is validated structurally when it is parsed: a missing
//! `variations` list, a missing `days` (or `data`) list, or a day without a
//! `date` is rejected here. Everything below that level is lenient. Counter
//! values are coerced to non-negative numbers, and anything that cannot be
//! read as one counts as zero.

use convtrend_common::{ConvTrendError, Result, VariationId, SERIES_PREFIX};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Sparse per-variation counters for one day, keyed by variation id.
pub type CounterMap = BTreeMap<String, f64>;

/// One arm of the experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Identity key; falsy source ids become `"0"`.
    #[serde(default, deserialize_with = "deserialize_variation_id")]
    pub id: VariationId,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Visits and conversions recorded on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Visit counters.
    #[serde(default, deserialize_with = "deserialize_counters")]
    pub visits: CounterMap,
    /// Conversion counters.
    #[serde(default, deserialize_with = "deserialize_counters")]
    pub conversions: CounterMap,
}

/// The raw experiment document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExperiment {
    /// Variations in display order.
    pub variations: Vec<Variation>,
    /// Daily records, in source order.
    #[serde(alias = "data")]
    pub days: Vec<DayRecord>,
}

impl RawExperiment {
    /// Parses an experiment document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let experiment: Self = serde_json::from_str(json).map_err(|e| {
            ConvTrendError::dataset_with_source(format!("invalid experiment document: {e}"), e)
        })?;
        debug!(
            variations = experiment.variations.len(),
            days = experiment.days.len(),
            "Parsed experiment document"
        );
        Ok(experiment)
    }

    /// Reads and parses an experiment document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConvTrendError::dataset_with_source(format!("cannot read {}", path.display()), e)
        })?;
        Self::from_json_str(&json)
    }

    /// Variation ids in source order.
    pub fn variation_ids(&self) -> Vec<VariationId> {
        self.variations.iter().map(|v| v.id.clone()).collect()
    }

    /// Display names keyed by variation id.
    ///
    /// When several variations share an id, the first non-empty name wins.
    pub fn variation_names(&self) -> BTreeMap<VariationId, String> {
        self.variations
            .iter()
            .map(|v| {
                let name = self.display_name(v.id.as_str()).unwrap_or_default();
                (v.id.clone(), name.to_string())
            })
            .collect()
    }

    /// Legend text for a row field such as `conversionRate_10001`.
    ///
    /// Falls back to the field name itself when no variation has a name.
    pub fn legend_label(&self, series: &str) -> String {
        let id = series.strip_prefix(SERIES_PREFIX).unwrap_or(series);
        self.display_name(id).map_or_else(|| series.to_string(), str::to_string)
    }

    fn display_name(&self, id: &str) -> Option<&str> {
        self.variations
            .iter()
            .find(|v| v.id.as_str() == id && !v.name.is_empty())
            .map(|v| v.name.as_str())
    }
}

static DATASET: OnceCell<RawExperiment> = OnceCell::new();

/// Installs the process-wide dataset. Fails if one is already installed.
pub fn install_dataset(experiment: RawExperiment) -> Result<&'static RawExperiment> {
    DATASET
        .set(experiment)
        .map_err(|_| ConvTrendError::dataset("dataset already initialized"))?;
    DATASET
        .get()
        .ok_or_else(|| ConvTrendError::dataset("dataset initialization lost"))
}

/// Loads the process-wide dataset from `path` on first use.
///
/// Later calls return the already loaded dataset and ignore `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<&'static RawExperiment> {
    DATASET.get_or_try_init(|| {
        let path = path.as_ref();
        let experiment = RawExperiment::from_path(path)?;
        info!(path = %path.display(), days = experiment.days.len(), "Loaded experiment dataset");
        Ok(experiment)
    })
}

/// The process-wide dataset, if one has been loaded.
pub fn dataset() -> Option<&'static RawExperiment> {
    DATASET.get()
}

/// Coerces a JSON counter to a non-negative finite number, or zero.
pub fn coerce_counter(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };

    if number.is_finite() && number >= 0.0 {
        number
    } else {
        0.0
    }
}

fn variation_id_from_value(value: &Value) -> VariationId {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                VariationId(i.to_string())
            } else if let Some(u) = n.as_u64() {
                VariationId(u.to_string())
            } else {
                match n.as_f64() {
                    Some(f) if f != 0.0 => VariationId(f.to_string()),
                    _ => VariationId::default(),
                }
            }
        }
        Value::String(s) => VariationId::new(s.as_str()),
        Value::Bool(true) => VariationId("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => {
            VariationId::default()
        }
    }
}

fn deserialize_variation_id<'de, D>(deserializer: D) -> std::result::Result<VariationId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(variation_id_from_value(&value))
}

fn deserialize_counters<'de, D>(deserializer: D) -> std::result::Result<CounterMap, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(entries) => entries
            .iter()
            .map(|(key, raw)| (key.clone(), coerce_counter(raw)))
            .collect(),
        _ => CounterMap::new(),
    })
}
