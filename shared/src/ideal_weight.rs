//! Position-conditioned ideal weight
//!
//! Maps a freeform position label onto one of six canonical playing roles
//! and derives an ideal weight range from height:
//! `base = height_cm − 100`, then per-role offsets on both ends.

use crate::errors::{CalcResult, CalculationError};
use crate::range::MacroRange;
use crate::validation::{IDEAL_HEIGHT_CM, MACRO_WEIGHT_KG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical playing role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "FB/WB")]
    FullBack,
    #[serde(rename = "DM/CM/AM")]
    Midfielder,
    #[serde(rename = "ST/CF-fast")]
    Striker,
    #[serde(rename = "Winger")]
    Winger,
}

/// Offsets in kilograms relative to `base`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOffset {
    pub min: i32,
    pub max: i32,
}

/// Alias table. Exact, case-sensitive keys only; anything absent is rejected.
const POSITION_ALIASES: &[(&str, Position)] = &[
    // Goalkeeper
    ("GK", Position::Goalkeeper),
    ("Goalkeeper", Position::Goalkeeper),
    ("حارس مرمى", Position::Goalkeeper),
    ("حارس", Position::Goalkeeper),
    // Centre back
    ("CB", Position::CentreBack),
    ("Centre Back", Position::CentreBack),
    ("Center Back", Position::CentreBack),
    ("قلب الدفاع", Position::CentreBack),
    ("مدافع", Position::CentreBack),
    // Full back / wing back
    ("FB/WB", Position::FullBack),
    ("FB", Position::FullBack),
    ("WB", Position::FullBack),
    ("Full Back", Position::FullBack),
    ("Wing Back", Position::FullBack),
    ("ظهير", Position::FullBack),
    ("ظهير أيمن", Position::FullBack),
    ("ظهير أيسر", Position::FullBack),
    // Midfield
    ("DM/CM/AM", Position::Midfielder),
    ("DM", Position::Midfielder),
    ("CM", Position::Midfielder),
    ("AM", Position::Midfielder),
    ("Midfielder", Position::Midfielder),
    ("محور", Position::Midfielder),
    ("محور دفاعي", Position::Midfielder),
    ("محور هجومي", Position::Midfielder),
    ("وسط", Position::Midfielder),
    ("وسط دفاعي", Position::Midfielder),
    ("وسط هجومي", Position::Midfielder),
    // Striker
    ("ST/CF-fast", Position::Striker),
    ("ST", Position::Striker),
    ("CF", Position::Striker),
    ("Striker", Position::Striker),
    ("مهاجم", Position::Striker),
    ("مهاجم صريح", Position::Striker),
    ("مهاجم وهمي", Position::Striker),
    ("مهاجم سريع", Position::Striker),
    // Winger
    ("Winger", Position::Winger),
    ("جناح", Position::Winger),
    ("جناح أيمن", Position::Winger),
    ("جناح أيسر", Position::Winger),
];

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Goalkeeper,
        Position::CentreBack,
        Position::FullBack,
        Position::Midfielder,
        Position::Striker,
        Position::Winger,
    ];

    /// Canonical tag, e.g. `"FB/WB"`
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::CentreBack => "CB",
            Position::FullBack => "FB/WB",
            Position::Midfielder => "DM/CM/AM",
            Position::Striker => "ST/CF-fast",
            Position::Winger => "Winger",
        }
    }

    pub fn offsets(&self) -> PositionOffset {
        let (min, max) = match self {
            Position::Goalkeeper => (-5, 2),
            Position::CentreBack => (-5, 2),
            Position::FullBack => (-6, 0),
            Position::Midfielder => (-5, 0),
            Position::Striker => (-5, 3),
            Position::Winger => (-7, 0),
        };
        PositionOffset { min, max }
    }

    /// Resolve a freeform position label
    pub fn from_alias(label: &str) -> CalcResult<Self> {
        POSITION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == label)
            .map(|(_, position)| *position)
            .ok_or_else(|| CalculationError::UnsupportedPosition {
                position: label.to_string(),
                supported: Self::ALL
                    .iter()
                    .map(|p| p.canonical_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub fn is_supported(label: &str) -> bool {
        Self::from_alias(label).is_ok()
    }

    /// Every accepted alias, in table order
    pub fn supported_aliases() -> Vec<&'static str> {
        POSITION_ALIASES.iter().map(|(alias, _)| *alias).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl std::str::FromStr for Position {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s)
    }
}

/// Comparison of a current weight against the ideal range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeightComparison {
    BelowRange { deficit_kg: f64 },
    AboveRange { surplus_kg: f64 },
    WithinRange,
}

impl WeightComparison {
    /// Plain comparison against `[min, max]`
    pub fn compare(weight_kg: f64, range: &MacroRange) -> Self {
        let (min, max) = (range.min() as f64, range.max() as f64);
        if weight_kg < min {
            WeightComparison::BelowRange {
                deficit_kg: min - weight_kg,
            }
        } else if weight_kg > max {
            WeightComparison::AboveRange {
                surplus_kg: weight_kg - max,
            }
        } else {
            WeightComparison::WithinRange
        }
    }
}

impl fmt::Display for WeightComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightComparison::BelowRange { deficit_kg } => {
                write!(f, "below the minimum by {} kg", one_decimal(*deficit_kg))
            }
            WeightComparison::AboveRange { surplus_kg } => {
                write!(f, "above the maximum by {} kg", one_decimal(*surplus_kg))
            }
            WeightComparison::WithinRange => f.write_str("within the ideal range"),
        }
    }
}

fn one_decimal(kg: f64) -> f64 {
    (kg * 10.0).round() / 10.0
}

/// Ideal weight calculation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealWeightResult {
    pub ideal_weight_kg: MacroRange,
    /// `height_cm − 100`, returned for transparency
    pub base: f64,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<WeightComparison>,
    pub summary: String,
}

fn range_for(height_cm: f64, position: Position) -> (MacroRange, f64) {
    let base = height_cm - 100.0;
    let offsets = position.offsets();
    let range = MacroRange::from_raw(base + f64::from(offsets.min), base + f64::from(offsets.max));
    (range, base)
}

/// Range and base for an already-canonical position
pub fn ideal_weight_range(height_cm: f64, position: Position) -> CalcResult<(MacroRange, f64)> {
    IDEAL_HEIGHT_CM.check(height_cm)?;
    Ok(range_for(height_cm, position))
}

/// Validate height, canonicalize the position and compute the ideal range
///
/// When `weight_kg` is given, a [`WeightComparison`] is attached.
pub fn compute_ideal_weight(
    height_cm: f64,
    position: &str,
    weight_kg: Option<f64>,
) -> CalcResult<IdealWeightResult> {
    IDEAL_HEIGHT_CM.check(height_cm)?;
    let position = Position::from_alias(position)?;
    if let Some(w) = weight_kg {
        MACRO_WEIGHT_KG.check(w)?;
    }
    let (range, base) = range_for(height_cm, position);

    let comparison = weight_kg.map(|w| WeightComparison::compare(w, &range));
    let mut summary = format!("Ideal weight: {} to {} kg", range.min(), range.max());
    if let Some(cmp) = &comparison {
        summary.push_str(&format!(" ({})", cmp));
    }

    Ok(IdealWeightResult {
        ideal_weight_kg: range,
        base,
        position,
        comparison,
        summary,
    })
}
