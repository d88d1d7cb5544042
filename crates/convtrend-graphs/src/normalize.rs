//! Sparse per-day counters to a flat point stream.

use crate::dataset::RawExperiment;
use crate::types::{NormalizedData, NormalizedPoint};
use convtrend_common::VariationId;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Flattens the experiment into one point per `(date, variation)` pair seen
/// in either counter map of a day.
///
/// The side missing from a day's maps counts as zero. Points keep day order,
/// and within a day follow ascending variation key order.
#[instrument(skip_all, fields(days = experiment.days.len()))]
pub fn normalize_experiment(experiment: &RawExperiment) -> NormalizedData {
    let variation_ids = experiment.variation_ids();

    let points: Vec<NormalizedPoint> = experiment
        .days
        .iter()
        .flat_map(|day| {
            let keys: BTreeSet<&String> = day.visits.keys().chain(day.conversions.keys()).collect();

            keys.into_iter().map(move |key| NormalizedPoint {
                date: day.date.clone(),
                variation_id: VariationId(key.clone()),
                visits: day.visits.get(key).copied().unwrap_or(0.0),
                conversions: day.conversions.get(key).copied().unwrap_or(0.0),
            })
        })
        .collect();

    debug!(
        variations = variation_ids.len(),
        points = points.len(),
        "Normalized experiment"
    );

    NormalizedData {
        variation_ids,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experiment(doc: &str) -> RawExperiment {
        RawExperiment::from_json_str(doc).unwrap()
    }

    #[test]
    fn test_union_of_keys_with_zero_defaults() {
        let data = normalize_experiment(&experiment(
            r#"{ "variations": [ { "id": 1, "name": "A" }, { "id": 2, "name": "B" } ],
                 "days": [ { "date": "2024-02-01",
                             "visits": { "1": 100 },
                             "conversions": { "1": 25, "2": 3 } } ] }"#,
        ));

        assert_eq!(data.points.len(), 2);
        assert_eq!(data.points[0].variation_id.as_str(), "1");
        assert_eq!(data.points[0].visits, 100.0);
        assert_eq!(data.points[0].conversions, 25.0);
        assert_eq!(data.points[1].variation_id.as_str(), "2");
        assert_eq!(data.points[1].visits, 0.0);
        assert_eq!(data.points[1].conversions, 3.0);
    }

    #[test]
    fn test_variation_absent_from_both_maps_has_no_point() {
        let data = normalize_experiment(&experiment(
            r#"{ "variations": [ { "id": 1 }, { "id": 2 } ],
                 "days": [ { "date": "2024-02-01", "visits": { "1": 4 }, "conversions": {} } ] }"#,
        ));

        assert_eq!(data.points.len(), 1);
        assert!(data.points.iter().all(|p| p.variation_id.as_str() == "1"));
    }

    #[test]
    fn test_variation_order_preserved() {
        let data = normalize_experiment(&experiment(
            r#"{ "variations": [ { "id": 10002 }, { "id": 0 }, { "id": 10001 } ], "days": [] }"#,
        ));

        let ids: Vec<&str> = data.variation_ids.iter().map(VariationId::as_str).collect();
        assert_eq!(ids, vec!["10002", "0", "10001"]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_points_follow_day_order() {
        let data = normalize_experiment(&experiment(
            r#"{ "variations": [ { "id": 1 } ],
                 "days": [ { "date": "2024-03-02", "visits": { "1": 1 } },
                           { "date": "2024-03-01", "visits": { "1": 2 } } ] }"#,
        ));

        let dates: Vec<&str> = data.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-02", "2024-03-01"]);
    }
}
