//! Memoizing front end over normalization, aggregation and range calculation.

use crate::aggregator::{DailyAggregator, RowAggregator, WeeklyAggregator};
use crate::dataset::RawExperiment;
use crate::normalize::normalize_experiment;
use crate::range::RangeCalculator;
use crate::selection::VariationSelection;
use crate::types::{AggregatedRow, AxisRange, NormalizedData};
use convtrend_common::{VariationId, ViewMode};
use convtrend_config::RangeConfig;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, info};

/// Everything a chart needs for one view mode and selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot<'a> {
    /// Bucketing used for `rows`.
    pub mode: ViewMode,
    /// All variation ids, for building selection controls.
    pub variation_ids: &'a [VariationId],
    /// Currently plotted ids.
    pub selected: &'a [VariationId],
    /// Aggregated rows.
    pub rows: &'a [AggregatedRow],
    /// Value-axis bounds for the selection.
    pub range: AxisRange,
}

/// Normalizes an experiment once and computes each view's rows on first use.
///
/// The experiment snapshot never changes after construction, so cached rows
/// stay valid for the pipeline's lifetime.
#[derive(Debug)]
pub struct ChartPipeline {
    normalized: NormalizedData,
    calculator: RangeCalculator,
    daily: OnceCell<Vec<AggregatedRow>>,
    weekly: OnceCell<Vec<AggregatedRow>>,
}

impl ChartPipeline {
    /// Builds a pipeline for `experiment` with the given axis padding.
    pub fn new(experiment: &RawExperiment, range: RangeConfig) -> Self {
        let pipeline = Self::from_normalized(normalize_experiment(experiment), range);
        info!(
            variations = pipeline.normalized.variation_ids.len(),
            points = pipeline.normalized.points.len(),
            "Chart pipeline ready"
        );
        pipeline
    }

    /// Builds a pipeline over already normalized data.
    pub fn from_normalized(normalized: NormalizedData, range: RangeConfig) -> Self {
        Self {
            normalized,
            calculator: RangeCalculator::new(range),
            daily: OnceCell::new(),
            weekly: OnceCell::new(),
        }
    }

    /// The normalized point stream.
    pub const fn normalized(&self) -> &NormalizedData {
        &self.normalized
    }

    /// Variation ids in source order.
    pub fn variation_ids(&self) -> &[VariationId] {
        &self.normalized.variation_ids
    }

    /// A selection with every variation.
    pub fn default_selection(&self) -> VariationSelection {
        VariationSelection::all(self.variation_ids())
    }

    /// Rows for `mode`, aggregated on first request.
    pub fn rows(&self, mode: ViewMode) -> &[AggregatedRow] {
        match mode {
            ViewMode::Day => self.daily.get_or_init(|| self.aggregate_with(&DailyAggregator)),
            ViewMode::Week => self.weekly.get_or_init(|| self.aggregate_with(&WeeklyAggregator)),
        }
    }

    fn aggregate_with(&self, aggregator: &dyn RowAggregator) -> Vec<AggregatedRow> {
        debug!(aggregator = aggregator.name(), "Aggregating rows");
        aggregator.aggregate(&self.normalized)
    }

    /// Axis range for `mode` over the selected variations.
    pub fn axis_range(&self, mode: ViewMode, selection: &VariationSelection) -> AxisRange {
        self.calculator.calculate(self.rows(mode), selection)
    }

    /// Rows, range and ids for one view.
    pub fn snapshot<'a>(
        &'a self,
        mode: ViewMode,
        selection: &'a VariationSelection,
    ) -> ChartSnapshot<'a> {
        ChartSnapshot {
            mode,
            variation_ids: self.variation_ids(),
            selected: selection.ids(),
            rows: self.rows(mode),
            range: self.axis_range(mode, selection),
        }
    }
}
