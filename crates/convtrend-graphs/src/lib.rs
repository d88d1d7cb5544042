//! # convtrend graphs
//!
//! Turns a raw experiment document into chart-ready conversion-rate series.
//!
//! The pipeline runs in three steps: [`normalize_experiment`] flattens the
//! sparse per-day counters into points, a [`RowAggregator`] folds those points
//! into daily or weekly rows, and [`RangeCalculator`] picks value-axis bounds
//! for the selected variations. [`ChartPipeline`] ties them together and
//! memoizes rows per view mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod dataset;
pub mod normalize;
pub mod pipeline;
pub mod range;
pub mod selection;
pub mod types;
pub mod week;

pub use aggregator::{aggregate, Accumulator, DailyAggregator, RowAggregator, WeeklyAggregator};
pub use dataset::{dataset, install_dataset, load_dataset, DayRecord, RawExperiment, Variation};
pub use normalize::normalize_experiment;
pub use pipeline::{ChartPipeline, ChartSnapshot};
pub use range::RangeCalculator;
pub use selection::VariationSelection;
pub use types::*;
pub use week::WeekKey;
