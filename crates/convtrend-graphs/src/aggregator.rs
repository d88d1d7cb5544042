//! Folding normalized points into daily and weekly chart rows.

use crate::types::{AggregatedRow, NormalizedData, NormalizedPoint};
use crate::week::WeekKey;
use convtrend_common::{conversion_rate, VariationId, ViewMode};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Running visit and conversion totals for one bucket and variation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    /// Summed visits.
    pub visits: f64,
    /// Summed conversions.
    pub conversions: f64,
}

impl Accumulator {
    /// Adds a point's counters.
    pub fn add(mut self, point: &NormalizedPoint) -> Self {
        self.visits += point.visits;
        self.conversions += point.conversions;
        self
    }

    /// Two-decimal conversion percentage, zero without visits.
    pub fn rate(&self) -> f64 {
        conversion_rate(self.conversions, self.visits)
    }
}

/// Bucket → variation → totals.
pub type BucketMap<'a, K> = BTreeMap<K, BTreeMap<&'a str, Accumulator>>;

/// Groups points by the bucket `key_of` assigns, then by variation.
///
/// Points for which `key_of` returns `None` are left out.
pub fn fold_points<'a, K, F>(points: &'a [NormalizedPoint], key_of: F) -> BucketMap<'a, K>
where
    K: Ord,
    F: Fn(&'a NormalizedPoint) -> Option<K>,
{
    points.iter().fold(BucketMap::new(), |mut buckets, point| {
        if let Some(key) = key_of(point) {
            let totals = buckets
                .entry(key)
                .or_default()
                .entry(point.variation_id.as_str())
                .or_default();
            *totals = totals.add(point);
        }
        buckets
    })
}

/// Builds a row from one bucket's totals, emitting only the listed variations
/// that have data, in list order. An id listed twice yields one field.
pub fn build_row(
    date: impl Into<String>,
    variation_ids: &[VariationId],
    totals: &BTreeMap<&str, Accumulator>,
) -> AggregatedRow {
    let mut row = AggregatedRow::new(date);
    for id in variation_ids {
        if let Some(acc) = totals.get(id.as_str()) {
            row.set_rate(id.clone(), acc.rate());
        }
    }
    row
}

/// Trait for reshaping normalized data into chart rows
pub trait RowAggregator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produces rows sorted ascending by date.
    fn aggregate(&self, data: &NormalizedData) -> Vec<AggregatedRow>;
}

/// One row per distinct date
#[derive(Debug, Default, Clone, Copy)]
pub struct DailyAggregator;

impl DailyAggregator {
    /// Creates the aggregator.
    pub const fn new() -> Self {
        Self
    }
}

impl RowAggregator for DailyAggregator {
    fn name(&self) -> &'static str {
        "daily"
    }

    #[instrument(skip_all, fields(points = data.points.len()))]
    fn aggregate(&self, data: &NormalizedData) -> Vec<AggregatedRow> {
        let buckets = fold_points(&data.points, |p| Some(p.date.as_str()));

        let rows: Vec<AggregatedRow> = buckets
            .iter()
            .map(|(date, totals)| build_row(*date, &data.variation_ids, totals))
            .collect();

        debug!("Aggregated {} daily rows", rows.len());
        rows
    }
}

/// One row per week bucket, dated by the bucket's Monday
#[derive(Debug, Default, Clone, Copy)]
pub struct WeeklyAggregator;

impl WeeklyAggregator {
    /// Creates the aggregator.
    pub const fn new() -> Self {
        Self
    }
}

impl RowAggregator for WeeklyAggregator {
    fn name(&self) -> &'static str {
        "weekly"
    }

    #[instrument(skip_all, fields(points = data.points.len()))]
    fn aggregate(&self, data: &NormalizedData) -> Vec<AggregatedRow> {
        let buckets = fold_points(&data.points, |p| {
            let key = WeekKey::for_date_str(&p.date);
            if key.is_none() {
                warn!(
                    date = %p.date,
                    variation = %p.variation_id,
                    "Skipping point with unparseable date"
                );
            }
            key
        });

        let mut rows: Vec<AggregatedRow> = buckets
            .iter()
            .filter_map(|(key, totals)| match key.start_date_string() {
                Some(date) => Some(build_row(date, &data.variation_ids, totals)),
                None => {
                    warn!(week = %key, "Week bucket has no start date");
                    None
                }
            })
            .collect();

        // Stable, so buckets resolving to the same Monday stay in key order.
        rows.sort_by(|a, b| a.date.cmp(&b.date));

        debug!("Aggregated {} weekly rows", rows.len());
        rows
    }
}

/// Aggregates with the aggregator matching `mode`.
pub fn aggregate(data: &NormalizedData, mode: ViewMode) -> Vec<AggregatedRow> {
    match mode {
        ViewMode::Day => DailyAggregator::new().aggregate(data),
        ViewMode::Week => WeeklyAggregator::new().aggregate(data),
    }
}
