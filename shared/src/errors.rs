//! Error types for the nutrition planning engine

use thiserror::Error;

/// Validation failures raised by the calculation engine
///
/// Every variant names the offending field and the rule it broke. The engine
/// never recovers from these; they are returned to the immediate caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("{field} must be between {min} and {max} {unit}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    #[error("{field} must be a valid number")]
    NotFinite { field: &'static str },

    #[error("age must be at least {min} years (got {age})")]
    AgeBelowMinimum { age: u32, min: u32 },

    #[error("calories must be at least {min} kcal/day (got {calories})")]
    CaloriesBelowMinimum { calories: u32, min: u32 },

    #[error("unknown gender '{0}'. Must be one of: male, female")]
    UnknownGender(String),

    #[error("unknown activity level '{label}'. Must be one of: {expected}")]
    UnknownActivityLevel { label: String, expected: String },

    #[error("unknown goal '{0}'. Must be one of: maintain, cut, bulk")]
    UnknownGoal(String),

    #[error("position not supported: '{position}'. Supported positions: {supported}")]
    UnsupportedPosition { position: String, supported: String },

    #[error("calories insufficient to cover minimum protein and fat")]
    InsufficientCalories,
}

impl CalculationError {
    /// Name of the input field the failure refers to
    pub fn field(&self) -> &'static str {
        match self {
            CalculationError::OutOfRange { field, .. } | CalculationError::NotFinite { field } => {
                *field
            }
            CalculationError::AgeBelowMinimum { .. } => "age",
            CalculationError::CaloriesBelowMinimum { .. }
            | CalculationError::InsufficientCalories => "calories",
            CalculationError::UnknownGender(_) => "gender",
            CalculationError::UnknownActivityLevel { .. } => "activity_level",
            CalculationError::UnknownGoal(_) => "goal",
            CalculationError::UnsupportedPosition { .. } => "position",
        }
    }

    /// Stable machine-readable code for transport layers
    pub fn code(&self) -> &'static str {
        match self {
            CalculationError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalculationError::NotFinite { .. } => "NOT_A_NUMBER",
            CalculationError::AgeBelowMinimum { .. } => "AGE_BELOW_MINIMUM",
            CalculationError::CaloriesBelowMinimum { .. } => "CALORIES_BELOW_MINIMUM",
            CalculationError::UnknownGender(_) => "UNKNOWN_GENDER",
            CalculationError::UnknownActivityLevel { .. } => "UNKNOWN_ACTIVITY_LEVEL",
            CalculationError::UnknownGoal(_) => "UNKNOWN_GOAL",
            CalculationError::UnsupportedPosition { .. } => "UNSUPPORTED_POSITION",
            CalculationError::InsufficientCalories => "INSUFFICIENT_CALORIES",
        }
    }
}

/// Result alias used throughout the engine
pub type CalcResult<T> = Result<T, CalculationError>;
