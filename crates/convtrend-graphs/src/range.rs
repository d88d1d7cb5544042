//! Value-axis range for the selected series.

use crate::types::{AggregatedRow, AxisRange};
use convtrend_config::RangeConfig;
use tracing::debug;

/// Computes padded axis bounds over the selected variations' rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCalculator {
    config: RangeConfig,
}

impl RangeCalculator {
    /// Creates a calculator with the given padding.
    pub const fn new(config: RangeConfig) -> Self {
        Self { config }
    }

    /// Padding in use.
    pub const fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Bounds over every `conversionRate_<id>` field of `rows` for the
    /// selected ids.
    ///
    /// The spread is padded by `padding_ratio` on both sides, or by
    /// `fallback_padding` when the spread is zero. The lower bound is floored
    /// and clamped at zero, the upper bound is ceiled. Returns `[0, 1]` when
    /// no selected field has a finite value.
    pub fn calculate<I, S>(&self, rows: &[AggregatedRow], selected: I) -> AxisRange
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected: Vec<S> = selected.into_iter().collect();

        let bounds = rows
            .iter()
            .flat_map(|row| selected.iter().filter_map(move |id| row.rate(id.as_ref())))
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            });

        let Some((min, max)) = bounds else {
            debug!(rows = rows.len(), "No values for selection, using fallback range");
            return AxisRange::FALLBACK;
        };

        let mut pad = (max - min) * self.config.padding_ratio;
        if pad == 0.0 || !pad.is_finite() {
            pad = self.config.fallback_padding;
        }

        AxisRange {
            min: (min - pad).floor().max(0.0),
            max: (max + pad).ceil(),
        }
    }
}
