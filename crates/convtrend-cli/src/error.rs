//! Application-wide error types using thiserror.

use convtrend_common::ConvTrendError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration, dataset or validation failure from the library crates.
    #[error(transparent)]
    Core(#[from] ConvTrendError),

    /// None of the requested variations exist in the experiment.
    #[error("No known variation in selection: {0}")]
    EmptySelection(String),

    /// Output could not be encoded.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for the command-line application.
pub type CliResult<T> = Result<T, CliError>;
