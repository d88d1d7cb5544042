//! Property tests for the shared rate arithmetic.

use convtrend_common::utils::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_zero_visits_never_divides(conversions in 0.0f64..1e9) {
        prop_assert_eq!(conversion_rate(conversions, 0.0), 0.0);
    }

    #[test]
    fn test_rate_is_finite_and_two_decimals(conversions in 0u32..10_000, visits in 1u32..10_000) {
        let rate = conversion_rate(f64::from(conversions), f64::from(visits));
        prop_assert!(rate.is_finite());
        prop_assert!(rate >= 0.0);
        let scaled = rate * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn test_rate_bounded_when_conversions_do_not_exceed_visits(
        visits in 1u32..10_000,
        ratio in 0.0f64..=1.0,
    ) {
        let conversions = (f64::from(visits) * ratio).floor();
        let rate = conversion_rate(conversions, f64::from(visits));
        prop_assert!(rate <= 100.0);
    }
}
