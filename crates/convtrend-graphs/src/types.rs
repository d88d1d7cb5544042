//! Pipeline data structures: normalized points, aggregated rows, axis ranges.

use convtrend_common::{series_key, VariationId};
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

/// A single `(date, variation)` observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPoint {
    /// Calendar date string as found in the source.
    pub date: String,
    /// Variation identity key.
    pub variation_id: VariationId,
    /// Visits, never negative.
    pub visits: f64,
    /// Conversions, never negative.
    pub conversions: f64,
}

/// Flat point stream plus the variation order used to lay out rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedData {
    /// Variation ids in source order.
    pub variation_ids: Vec<VariationId>,
    /// Every observed point.
    pub points: Vec<NormalizedPoint>,
}

impl NormalizedData {
    /// True when no points were produced.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One chart row: a bucket date plus the rates of the variations seen in it.
///
/// Serializes as a flat object, `{"date": ..., "conversionRate_<id>": ...}`,
/// with rate fields in variation order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    /// Bucket date, `YYYY-MM-DD`.
    pub date: String,
    rates: Vec<(VariationId, f64)>,
}

impl AggregatedRow {
    /// Creates a row with no rate fields.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            rates: Vec::new(),
        }
    }

    /// Sets the rate field for `id`, appending it if the row has none yet.
    ///
    /// A repeated id overwrites the earlier value in place, so every
    /// `conversionRate_<id>` key appears at most once.
    pub fn set_rate(&mut self, id: VariationId, rate: f64) {
        match self.rates.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, value)) => *value = rate,
            None => self.rates.push((id, rate)),
        }
    }

    /// Rate for a variation id, if the row carries one.
    pub fn rate(&self, id: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|(vid, _)| vid.as_str() == id)
            .map(|(_, rate)| *rate)
    }

    /// Value of a `conversionRate_<id>` field.
    pub fn field(&self, name: &str) -> Option<f64> {
        name.strip_prefix(convtrend_common::SERIES_PREFIX)
            .and_then(|id| self.rate(id))
    }

    /// Rate fields in emission order.
    pub fn rates(&self) -> impl Iterator<Item = (&VariationId, f64)> {
        self.rates.iter().map(|(id, rate)| (id, *rate))
    }

    /// Number of rate fields.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the row carries no rate fields.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Serialize for AggregatedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rates.len() + 1))?;
        map.serialize_entry("date", &self.date)?;
        for (id, rate) in &self.rates {
            map.serialize_entry(&series_key(id.as_str()), rate)?;
        }
        map.end()
    }
}

/// Value-axis bounds, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound, never negative.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Range used when nothing is plotted.
    pub const FALLBACK: Self = Self { min: 0.0, max: 1.0 };

    /// Bounds as a two-element array.
    pub const fn as_array(self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Serialize for AxisRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_flat_in_insertion_order() {
        let mut row = AggregatedRow::new("2024-01-01");
        row.set_rate(VariationId::from("10001"), 12.5);
        row.set_rate(VariationId::from("0"), 25.0);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-01","conversionRate_10001":12.5,"conversionRate_0":25.0}"#
        );
    }

    #[test]
    fn test_repeated_id_overwrites_in_place() {
        let mut row = AggregatedRow::new("2024-01-01");
        row.set_rate(VariationId::from("0"), 10.0);
        row.set_rate(VariationId::from("1"), 20.0);
        row.set_rate(VariationId::from("0"), 50.0);

        assert_eq!(row.len(), 2);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"date":"2024-01-01","conversionRate_0":50.0,"conversionRate_1":20.0}"#
        );
    }

    #[test]
    fn test_row_lookup() {
        let mut row = AggregatedRow::new("2024-01-01");
        row.set_rate(VariationId::from("1"), 40.0);

        assert_eq!(row.rate("1"), Some(40.0));
        assert_eq!(row.field("conversionRate_1"), Some(40.0));
        assert_eq!(row.field("conversionRate_2"), None);
        assert_eq!(row.field("1"), None);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_axis_range_serializes_as_pair() {
        assert_eq!(serde_json::to_string(&AxisRange::FALLBACK).unwrap(), "[0.0,1.0]");
        assert_eq!(AxisRange::default().as_array(), [0.0, 1.0]);
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let point = NormalizedPoint {
            date: "2024-01-01".to_string(),
            variation_id: VariationId::from("2"),
            visits: 0.0,
            conversions: 3.0,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["variationId"], "2");
        assert_eq!(value["visits"], 0.0);
    }
}
