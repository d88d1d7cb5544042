//! Tests for the core type definitions in convtrend-common.
//!
//! This test suite covers:
//! - Variation id normalization and serialization
//! - Series key naming
//! - View mode parsing and display

use std::collections::HashMap;
use std::str::FromStr;
use convtrend_common::types::*;

#[cfg(test)]
mod variation_id_tests {
    use super::*;

    #[test]
    fn test_variation_id_implements_expected_traits() {
        let id = VariationId::from("10001");

        assert_eq!(format!("{:?}", id), "VariationId(\"10001\")");
        assert_eq!(format!("{}", id), "10001");

        let cloned = id.clone();
        assert_eq!(id, cloned);

        let mut map = HashMap::new();
        map.insert(id.clone(), "Variation A");
        assert_eq!(map.get(&id), Some(&"Variation A"));
    }

    #[test]
    fn test_empty_key_becomes_zero() {
        assert_eq!(VariationId::new("").as_str(), "0");
        assert_eq!(VariationId::default().as_str(), "0");
        assert_eq!(VariationId::from(0u64).as_str(), "0");
    }

    #[test]
    fn test_variation_id_serializes_as_plain_string() {
        let id = VariationId::from(10002u64);
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"10002\"");

        let deserialized: VariationId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_series_key() {
        assert_eq!(series_key("1"), "conversionRate_1");
        assert_eq!(VariationId::default().series_key(), "conversionRate_0");
    }
}

#[cfg(test)]
mod view_mode_tests {
    use super::*;

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!(ViewMode::from_str("day").unwrap(), ViewMode::Day);
        assert_eq!(ViewMode::from_str("WEEK").unwrap(), ViewMode::Week);
        assert_eq!(ViewMode::from_str(" weekly ").unwrap(), ViewMode::Week);

        let err = ViewMode::from_str("month").unwrap_err();
        assert_eq!(err.field(), Some("view_mode"));
    }

    #[test]
    fn test_view_mode_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Week).unwrap(), "\"week\"");
        let mode: ViewMode = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(mode, ViewMode::Day);
        assert_eq!(ViewMode::default(), ViewMode::Day);
    }

    #[test]
    fn test_view_mode_display_roundtrips_through_from_str() {
        for mode in [ViewMode::Day, ViewMode::Week] {
            assert_eq!(ViewMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }
}
