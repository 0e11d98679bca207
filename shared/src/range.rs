//! Integer `{min, max}` ranges for grams, kilocalories and kilograms

use serde::Serialize;

/// Closed integer range with `min <= max`
///
/// Ranges are only built from already-ordered bounds; nothing here swaps
/// inverted inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MacroRange {
    min: i64,
    max: i64,
}

impl MacroRange {
    /// Build from integer bounds, or `None` when `min > max`
    pub fn new(min: i64, max: i64) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Round ordered raw bounds once. Rounding is monotone, so order survives.
    pub(crate) fn from_raw(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper, "unordered raw bounds {lower} > {upper}");
        Self {
            min: lower.round() as i64,
            max: upper.round() as i64,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Rounded average of both ends
    pub fn midpoint(&self) -> i64 {
        ((self.min + self.max) as f64 / 2.0).round() as i64
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }
}
