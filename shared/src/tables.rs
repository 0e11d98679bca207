//! Shared lookup tables for the macro allocation engine
//!
//! The age-group/goal rule set lives here as plain data. Adding an age band
//! or a goal means adding a row or column to these tables, not a new branch.

use crate::errors::{CalcResult, CalculationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Youngest age (in whole years) the engine accepts
pub const MIN_AGE_YEARS: u32 = 9;

/// Energy density per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of the calorie target supplied by fat, as fractions
pub const FAT_SHARE_MIN: f64 = 0.25;
pub const FAT_SHARE_MAX: f64 = 0.35;

// ============================================================================
// Age Groups
// ============================================================================

/// Age band driving the protein and calorie-delta tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 9 to 12 years
    #[serde(rename = "9-12")]
    Child,
    /// 13 to 17 years
    #[serde(rename = "13-18")]
    Teen,
    /// 18 years and above
    #[serde(rename = "18+")]
    Adult,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Child, AgeGroup::Teen, AgeGroup::Adult];

    /// Classify an age. Ages below [`MIN_AGE_YEARS`] are rejected, never clamped.
    ///
    /// Bands: 9..=12, 13..=17, 18 and above. Age 18 belongs to `18+`.
    pub fn from_age(age_years: u32) -> CalcResult<Self> {
        match age_years {
            a if a < MIN_AGE_YEARS => Err(CalculationError::AgeBelowMinimum {
                age: a,
                min: MIN_AGE_YEARS,
            }),
            9..=12 => Ok(AgeGroup::Child),
            13..=17 => Ok(AgeGroup::Teen),
            _ => Ok(AgeGroup::Adult),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "9-12",
            AgeGroup::Teen => "13-18",
            AgeGroup::Adult => "18+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Goals
// ============================================================================

/// Nutrition goal selecting the protein ratio and calorie delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Cut,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Cut, Goal::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Cut => "cut",
            Goal::Bulk => "bulk",
        }
    }

    /// Display note attached to a plan; carries no numeric meaning
    pub fn note(&self) -> &'static str {
        match self {
            Goal::Maintain => {
                "Weight maintenance plan: calories and protein stay within the normal range."
            }
            Goal::Cut => {
                "Weight loss plan: calories reduced from carbohydrates while raising the protein target for the age group."
            }
            Goal::Bulk => {
                "Weight gain plan: calories increased from carbohydrates while raising the protein target for the age group."
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintain" => Ok(Goal::Maintain),
            "cut" => Ok(Goal::Cut),
            "bulk" => Ok(Goal::Bulk),
            _ => Err(CalculationError::UnknownGoal(s.to_string())),
        }
    }
}

// ============================================================================
// Protein ratios and calorie deltas
// ============================================================================

/// Protein grams per kilogram of body weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProteinRatio {
    pub min: f64,
    pub max: f64,
}

/// Calorie adjustment relative to the maintenance anchor (kcal/day)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieDelta {
    pub min: i64,
    pub max: i64,
}

const fn ratio(min: f64, max: f64) -> ProteinRatio {
    ProteinRatio { min, max }
}

const fn delta(min: i64, max: i64) -> CalorieDelta {
    CalorieDelta { min, max }
}

/// Rows: age group. Columns: maintain, cut, bulk.
const PROTEIN_RATIOS: [[ProteinRatio; 3]; 3] = [
    [ratio(1.0, 1.2), ratio(1.2, 1.5), ratio(1.2, 1.5)],
    [ratio(1.0, 1.4), ratio(1.6, 2.0), ratio(1.6, 2.0)],
    [ratio(1.4, 1.6), ratio(2.0, 2.0), ratio(2.0, 2.0)],
];

/// Rows: age group. Columns: maintain, cut, bulk.
const CALORIE_DELTAS: [[CalorieDelta; 3]; 3] = [
    [delta(0, 0), delta(-200, -100), delta(200, 400)],
    [delta(0, 0), delta(-400, -200), delta(200, 400)],
    [delta(0, 0), delta(-500, -300), delta(300, 500)],
];

/// Protein ratio for an age group and goal
pub fn protein_ratio(group: AgeGroup, goal: Goal) -> ProteinRatio {
    PROTEIN_RATIOS[group.index()][goal.index()]
}

/// Calorie delta for an age group and goal (zero for maintain)
pub fn calorie_delta(group: AgeGroup, goal: Goal) -> CalorieDelta {
    CALORIE_DELTAS[group.index()][goal.index()]
}
