//! Energy expenditure calculations
//!
//! Basal metabolic rate and total daily energy expenditure for the
//! calculator. All functions are pure; numeric domain checks belong to
//! [`crate::validation`] and run before anything here.

use crate::errors::{CalcResult, CalculationError};
use crate::validation::validate_energy_inputs;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "ذكر" => Ok(BiologicalSex::Male),
            "female" | "أنثى" => Ok(BiologicalSex::Female),
            _ => Err(CalculationError::UnknownGender(s.to_string())),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// No training
    Sedentary,
    /// 1-2 training days per week
    Light,
    /// 3-4 training days per week
    Moderate,
    /// 5-6 training days per week
    High,
    /// Daily training plus physical work
    VeryHigh,
}

/// Form labels accepted for each activity level, in addition to the codes
const ACTIVITY_LABELS: [(&str, ActivityLevel); 5] = [
    ("كسول (بدون تمرين)", ActivityLevel::Sedentary),
    ("نشاط خفيف (1-2 يوم تمرين اسبوعيا)", ActivityLevel::Light),
    ("نشاط متوسط (3-4 أيام تمرين اسبوعيا)", ActivityLevel::Moderate),
    ("نشاط عالي (5-6 أيام تمرين اسبوعيا)", ActivityLevel::High),
    ("نشاط مكثف (تمرين يومي + نشاط بدني)", ActivityLevel::VeryHigh),
];

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ];

    /// Multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.376,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::VeryHigh => 1.9,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
            ActivityLevel::VeryHigh => "very_high",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "No training",
            ActivityLevel::Light => "Light activity (1-2 training days per week)",
            ActivityLevel::Moderate => "Moderate activity (3-4 training days per week)",
            ActivityLevel::High => "High activity (5-6 training days per week)",
            ActivityLevel::VeryHigh => "Intense activity (daily training plus physical work)",
        }
    }

    /// Resolve an activity label. Exact match against the codes and form labels.
    pub fn from_label(label: &str) -> CalcResult<Self> {
        if let Some(level) = Self::ALL.iter().find(|l| l.code() == label) {
            return Ok(*level);
        }
        ACTIVITY_LABELS
            .iter()
            .find(|(text, _)| *text == label)
            .map(|(_, level)| *level)
            .ok_or_else(|| CalculationError::UnknownActivityLevel {
                label: label.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate (kcal/day)
///
/// Men: 66.47 + 13.75 × weight(kg) + 5 × height(cm) − 4.7 × age(y)
/// Women: 655 + 9.6 × weight(kg) + 1.85 × height(cm) − 4.7 × age(y)
///
/// Rounded once, after summation.
pub fn calculate_bmr(sex: BiologicalSex, weight_kg: f64, height_cm: f64, age_years: u32) -> i64 {
    let age = f64::from(age_years);
    let raw = match sex {
        BiologicalSex::Male => 66.47 + 13.75 * weight_kg + 5.0 * height_cm - 4.7 * age,
        BiologicalSex::Female => 655.0 + 9.6 * weight_kg + 1.85 * height_cm - 4.7 * age,
    };
    raw.round() as i64
}

/// Calculate Total Daily Energy Expenditure: `round(bmr × factor)`
pub fn calculate_tdee(bmr: i64, activity: ActivityLevel) -> i64 {
    (bmr as f64 * activity.factor()).round() as i64
}

/// TDEE from a raw activity label; unknown labels fail instead of defaulting
pub fn tdee_for_label(bmr: i64, activity_label: &str) -> CalcResult<i64> {
    let activity = ActivityLevel::from_label(activity_label)?;
    Ok(calculate_tdee(bmr, activity))
}

/// Energy expenditure result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    pub activity_level: ActivityLevel,
    /// Activity multiplier used
    pub activity_factor: f64,
}

/// Validate inputs, then compute BMR and TDEE
pub fn compute_energy(
    sex: BiologicalSex,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_label: &str,
) -> CalcResult<EnergyResult> {
    validate_energy_inputs(age_years, weight_kg, height_cm)?;
    let activity = ActivityLevel::from_label(activity_label)?;

    let bmr = calculate_bmr(sex, weight_kg, height_cm, age_years);
    Ok(EnergyResult {
        bmr,
        tdee: calculate_tdee(bmr, activity),
        activity_level: activity,
        activity_factor: activity.factor(),
    })
}
