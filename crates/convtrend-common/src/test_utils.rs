//! Test utilities and shared test helpers for convtrend.
//!
//! Fixtures, logging setup and assertion helpers used by unit and integration
//! tests across the workspace.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` \
         (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Experiment documents for dataset and pipeline tests.
pub mod experiment_fixtures {
    /// Two variations (one with the falsy id 0) across three days with gaps.
    pub fn sparse_experiment_json() -> &'static str {
        r#"{
  "variations": [
    { "id": 0, "name": "Original" },
    { "id": 10001, "name": "Variation A" }
  ],
  "data": [
    {
      "date": "2024-01-03",
      "visits": { "0": 200, "10001": 100 },
      "conversions": { "0": 20, "10001": 25 }
    },
    {
      "date": "2024-01-01",
      "visits": { "0": 100 },
      "conversions": { "0": 10, "10001": 3 }
    },
    {
      "date": "2024-01-08",
      "visits": { "10001": 50 },
      "conversions": {}
    }
  ]
}"#
    }

    /// Document with no days at all.
    pub fn empty_experiment_json() -> &'static str {
        r#"{ "variations": [ { "id": 1, "name": "Only" } ], "days": [] }"#
    }

    /// Document missing the required `variations` list.
    pub fn missing_variations_json() -> &'static str {
        r#"{ "days": [] }"#
    }
}

/// Configuration documents for loader tests.
pub mod config_fixtures {
    /// A complete configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "data:\n",
            "  path: \"fixtures/experiment.json\"\n",
            "\n",
            "chart:\n",
            "  default_view_mode: week\n",
            "  range:\n",
            "    padding_ratio: 0.2\n",
            "    fallback_padding: 2.0\n",
            "\n",
            "logging:\n",
            "  level: debug\n",
            "  json_format: true\n"
        )
    }

    /// A partial configuration as TOML; omitted sections take defaults.
    pub fn partial_config_toml() -> &'static str {
        r#"
[data]
path = "exp.json"

[chart]
default_view_mode = "day"
"#
    }
}

/// Property-based testing strategies.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for calendar date strings between 2019 and 2026.
    pub fn date_string_strategy() -> impl Strategy<Value = String> {
        (2019i32..=2026, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
    }

    /// Strategy for variation keys drawn from a small pool.
    pub fn variation_key_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["0", "1", "2", "10001", "10002"]).prop_map(str::to_string)
    }

    /// Strategy for whole-number counters.
    pub fn counter_strategy() -> impl Strategy<Value = u32> {
        0u32..5_000
    }
}
