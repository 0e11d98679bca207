//! API request and response types

use crate::display::{format_plan_display, plan_midpoints, PlanDisplay, PlanMidpoints};
use crate::energy::{compute_energy, BiologicalSex, EnergyResult};
use crate::errors::CalcResult;
use crate::ideal_weight::{compute_ideal_weight, IdealWeightResult};
use crate::macros::{compute_macros, MacroPlan};
use crate::plan::{compute_plan, plan_for_profile, AnchorSource, PlanResult, Profile, ProfilePlan};
use crate::tables::Goal;
use crate::validation::validate_plan_body;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_goal() -> String {
    Goal::default().as_str().to_string()
}

/// Energy expenditure request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnergyRequest {
    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[validate(length(min = 1, message = "activity level is required"))]
    pub activity_level: String,
}

impl EnergyRequest {
    pub fn compute(&self) -> CalcResult<EnergyResult> {
        let sex: BiologicalSex = self.gender.parse()?;
        compute_energy(sex, self.weight_kg, self.height_cm, self.age_years, &self.activity_level)
    }
}

/// Ideal weight request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IdealWeightRequest {
    pub height_cm: f64,
    #[validate(length(min = 1, message = "position is required"))]
    pub position: String,
    /// Current weight, for the comparison note
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl IdealWeightRequest {
    pub fn compute(&self) -> CalcResult<IdealWeightResult> {
        compute_ideal_weight(self.height_cm, &self.position, self.weight_kg)
    }
}

/// Macro-only request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MacroRequest {
    pub age_years: u32,
    pub weight_kg: f64,
    /// Maintenance calories (kcal/day)
    pub calories: u32,
    #[serde(default = "default_goal")]
    pub goal: String,
}

impl MacroRequest {
    pub fn compute(&self) -> CalcResult<MacroPlan> {
        compute_macros(self.age_years, self.weight_kg, self.calories, &self.goal)
    }
}

/// Combined plan request
///
/// When `calories` is absent, the anchor is the TDEE estimated from
/// `gender` and `activity_level`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanRequest {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[validate(length(min = 1, message = "position is required"))]
    pub position: String,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl PlanRequest {
    pub fn compute(&self) -> CalcResult<PlanResponse> {
        let profile_plan = match self.calories {
            Some(calories) => ProfilePlan {
                anchor_source: AnchorSource::Supplied,
                energy: None,
                plan: compute_plan(
                    self.age_years,
                    self.weight_kg,
                    self.height_cm,
                    &self.position,
                    &self.goal,
                    calories,
                )?,
            },
            None => {
                validate_plan_body(self.age_years, self.weight_kg, self.height_cm)?;
                let profile = Profile {
                    age_years: self.age_years,
                    weight_kg: self.weight_kg,
                    height_cm: self.height_cm,
                    sex: self.gender.as_deref().unwrap_or_default().parse()?,
                    position: self.position.clone(),
                    activity_level: self.activity_level.clone().unwrap_or_default(),
                    goal: self.goal.parse()?,
                };
                plan_for_profile(&profile, None)?
            }
        };
        Ok(PlanResponse::from(profile_plan))
    }
}

/// Plan with its presentation helpers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResponse {
    pub plan: PlanResult,
    pub display: PlanDisplay,
    pub midpoints: PlanMidpoints,
    pub anchor_source: AnchorSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyResult>,
}

impl From<ProfilePlan> for PlanResponse {
    fn from(value: ProfilePlan) -> Self {
        Self {
            display: format_plan_display(&value.plan),
            midpoints: plan_midpoints(&value.plan),
            plan: value.plan,
            anchor_source: value.anchor_source,
            energy: value.energy,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
