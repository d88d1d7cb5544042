//! Integration tests for the convtrend command.
//!
//! These drive argument parsing, configuration loading and rendering against
//! files in a temporary directory.

use clap::Parser;
use convtrend_cli::{render, resolve_config, Args, CliError};
use convtrend_common::test_utils::{create_temp_dir, experiment_fixtures, init_test_logging};
use convtrend_common::ViewMode;
use convtrend_graphs::RawExperiment;

#[test]
fn test_config_file_and_data_override() {
    init_test_logging();
    let dir = create_temp_dir();

    let config_path = dir.path().join("convtrend.yaml");
    std::fs::write(
        &config_path,
        "data:\n  path: \"elsewhere.json\"\nchart:\n  default_view_mode: week\n",
    )
    .unwrap();
    let data_path = dir.path().join("experiment.json");
    std::fs::write(&data_path, experiment_fixtures::sparse_experiment_json()).unwrap();

    let args = Args::parse_from([
        "convtrend",
        "--config",
        config_path.to_str().unwrap(),
        "--data",
        data_path.to_str().unwrap(),
    ]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.data.path, data_path.display().to_string());
    assert_eq!(config.chart.default_view_mode, ViewMode::Week);

    let experiment = RawExperiment::from_path(&config.data.path).unwrap();
    let json = render(&experiment, &config, &args).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mode"], "week");
    assert_eq!(value["variationIds"], serde_json::json!(["0", "10001"]));
    assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    assert_eq!(value["range"], serde_json::json!([0.0, 32.0]));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = create_temp_dir();
    let missing = dir.path().join("absent.toml");
    let args = Args::parse_from(["convtrend", "--config", missing.to_str().unwrap()]);

    assert!(matches!(resolve_config(&args), Err(CliError::Core(_))));
}

#[test]
fn test_pretty_output_is_multiline() {
    let experiment =
        RawExperiment::from_json_str(experiment_fixtures::empty_experiment_json()).unwrap();
    let config = convtrend_config::Config::default();
    let args = Args::parse_from(["convtrend", "--pretty"]);

    let json = render(&experiment, &config, &args).unwrap();
    assert!(json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"], serde_json::json!([]));
    assert_eq!(value["range"], serde_json::json!([0.0, 1.0]));
    assert_eq!(value["legend"]["conversionRate_1"], "Only");
}
