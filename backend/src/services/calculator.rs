//! Calculator service
//!
//! Runs the engine for each calculator operation. The engine itself never
//! logs; this layer records the inputs on a span, the outcome as an event,
//! and rejections at `warn`.

use crate::error::{ApiError, ApiResult};
use player_nutrition_shared::{
    CalcResult, EnergyRequest, EnergyResult, IdealWeightRequest, IdealWeightResult, MacroPlan,
    MacroRequest, PlanRequest, PlanResponse,
};
use tracing::{debug, instrument, warn};
use validator::Validate;

/// Calculator service for the nutrition engine
pub struct CalculatorService;

fn checked<T>(operation: &'static str, result: CalcResult<T>) -> ApiResult<T> {
    result.map_err(|err| {
        warn!(
            operation,
            field = err.field(),
            code = err.code(),
            error = %err,
            "Calculation rejected"
        );
        ApiError::from(err)
    })
}

impl CalculatorService {
    #[instrument(skip_all, fields(age = req.age_years, activity = %req.activity_level))]
    pub fn energy(req: &EnergyRequest) -> ApiResult<EnergyResult> {
        req.validate()?;
        let result = checked("energy", req.compute())?;
        debug!(bmr = result.bmr, tdee = result.tdee, "Energy computed");
        Ok(result)
    }

    #[instrument(skip_all, fields(height = req.height_cm, position = %req.position))]
    pub fn ideal_weight(req: &IdealWeightRequest) -> ApiResult<IdealWeightResult> {
        req.validate()?;
        let result = checked("ideal_weight", req.compute())?;
        debug!(
            position = %result.position,
            min = result.ideal_weight_kg.min(),
            max = result.ideal_weight_kg.max(),
            "Ideal weight computed"
        );
        Ok(result)
    }

    #[instrument(skip_all, fields(age = req.age_years, calories = req.calories, goal = %req.goal))]
    pub fn macros(req: &MacroRequest) -> ApiResult<MacroPlan> {
        req.validate()?;
        let plan = checked("macros", req.compute())?;
        debug!(
            age_group = %plan.age_group,
            final_min = plan.calories.final_min,
            final_max = plan.calories.final_max,
            "Macros allocated"
        );
        Ok(plan)
    }

    #[instrument(skip_all, fields(age = req.age_years, position = %req.position, goal = %req.goal))]
    pub fn plan(req: &PlanRequest) -> ApiResult<PlanResponse> {
        req.validate()?;
        let response = checked("plan", req.compute())?;
        debug!(
            anchor = response.plan.macros.calories.maintain,
            anchor_source = ?response.anchor_source,
            "Plan assembled"
        );
        Ok(response)
    }
}
