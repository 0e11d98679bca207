//! Input validation
//!
//! Range checks for every numeric input of the engine. Each check fails fast
//! with a [`CalculationError`] naming the field and its valid domain. The
//! composite validators below run their checks in a fixed field order:
//! age, height, weight, calories.

use crate::errors::{CalcResult, CalculationError};
use crate::tables::AgeGroup;

/// Smallest calorie anchor accepted by the macro engine (kcal/day)
pub const MIN_CALORIES: u32 = 800;

/// Closed numeric domain for one input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl Bounds {
    pub const fn new(field: &'static str, min: f64, max: f64, unit: &'static str) -> Self {
        Self {
            field,
            min,
            max,
            unit,
        }
    }

    /// Check `value` lies within `[min, max]`
    pub fn check(&self, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalculationError::NotFinite { field: self.field });
        }
        if value < self.min || value > self.max {
            return Err(CalculationError::OutOfRange {
                field: self.field,
                min: self.min,
                max: self.max,
                unit: self.unit,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }
}

/// Weight domain for the macro-only calculator and the energy calculator
pub const MACRO_WEIGHT_KG: Bounds = Bounds::new("weight", 20.0, 250.0, "kg");

/// Weight domain for the combined plan
pub const PLAN_WEIGHT_KG: Bounds = Bounds::new("weight", 30.0, 140.0, "kg");

/// Height domain for the ideal weight calculator and the combined plan
pub const IDEAL_HEIGHT_CM: Bounds = Bounds::new("height", 140.0, 210.0, "cm");

/// Height domain for the energy calculator
pub const ENERGY_HEIGHT_CM: Bounds = Bounds::new("height", 100.0, 230.0, "cm");

/// Validate age and return its age group
pub fn validate_age(age_years: u32) -> CalcResult<AgeGroup> {
    AgeGroup::from_age(age_years)
}

/// Validate a calorie anchor
///
/// Sub-minimum targets are rejected outright; clamping would leave the
/// macro split without room for protein and fat.
pub fn validate_calories(calories: u32) -> CalcResult<()> {
    if calories < MIN_CALORIES {
        return Err(CalculationError::CaloriesBelowMinimum {
            calories,
            min: MIN_CALORIES,
        });
    }
    Ok(())
}

/// Inputs for the energy expenditure path: age, weight, height
pub fn validate_energy_inputs(age_years: u32, weight_kg: f64, height_cm: f64) -> CalcResult<()> {
    validate_age(age_years)?;
    MACRO_WEIGHT_KG.check(weight_kg)?;
    ENERGY_HEIGHT_CM.check(height_cm)?;
    Ok(())
}

/// Inputs for the macro-only path: age, weight `[20, 250]`, calories
pub fn validate_macro_inputs(age_years: u32, weight_kg: f64, calories: u32) -> CalcResult<AgeGroup> {
    let group = validate_age(age_years)?;
    MACRO_WEIGHT_KG.check(weight_kg)?;
    validate_calories(calories)?;
    Ok(group)
}

/// Body measurements for the combined plan path: age, height `[140, 210]`, weight `[30, 140]`
pub fn validate_plan_body(age_years: u32, weight_kg: f64, height_cm: f64) -> CalcResult<AgeGroup> {
    let group = validate_age(age_years)?;
    IDEAL_HEIGHT_CM.check(height_cm)?;
    PLAN_WEIGHT_KG.check(weight_kg)?;
    Ok(group)
}

/// Inputs for the combined plan path: body measurements, then calories
pub fn validate_plan_inputs(
    age_years: u32,
    weight_kg: f64,
    height_cm: f64,
    calories: u32,
) -> CalcResult<AgeGroup> {
    let group = validate_plan_body(age_years, weight_kg, height_cm)?;
    validate_calories(calories)?;
    Ok(group)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map engine field names to display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "weight" => "Current Weight",
        "height" => "Height",
        "calories" => "Maintenance Calories",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "position" => "Playing Position",
        _ => field_name,
    }
}

/// Format a failure for display next to its form field
pub fn user_message(err: &CalculationError) -> String {
    format!("{}: {}", get_field_display_label(err.field()), err)
}
