//! Shared rate arithmetic.

/// Rounds a value to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Conversion rate as a two-decimal percentage.
///
/// Returns `0.0` when there are no visits; the division is never attempted.
pub fn conversion_rate(conversions: f64, visits: f64) -> f64 {
    if visits == 0.0 {
        return 0.0;
    }
    let rate = round_to_cents(conversions / visits * 100.0);
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}
