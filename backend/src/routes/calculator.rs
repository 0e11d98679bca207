//! Calculator API routes

use crate::error::ApiResult;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use player_nutrition_shared::{
    EnergyRequest, EnergyResult, IdealWeightRequest, IdealWeightResult, MacroPlan, MacroRequest,
    PlanRequest, PlanResponse,
};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/energy", post(compute_energy))
        .route("/ideal-weight", post(compute_ideal_weight))
        .route("/macros", post(compute_macros))
        .route("/plan", post(compute_plan))
}

/// POST /api/v1/calculator/energy - BMR and TDEE
async fn compute_energy(
    payload: Result<Json<EnergyRequest>, JsonRejection>,
) -> ApiResult<Json<EnergyResult>> {
    let Json(req) = payload?;
    Ok(Json(CalculatorService::energy(&req)?))
}

/// POST /api/v1/calculator/ideal-weight - Position-based ideal weight
async fn compute_ideal_weight(
    payload: Result<Json<IdealWeightRequest>, JsonRejection>,
) -> ApiResult<Json<IdealWeightResult>> {
    let Json(req) = payload?;
    Ok(Json(CalculatorService::ideal_weight(&req)?))
}

/// POST /api/v1/calculator/macros - Macro-only allocation
async fn compute_macros(
    payload: Result<Json<MacroRequest>, JsonRejection>,
) -> ApiResult<Json<MacroPlan>> {
    let Json(req) = payload?;
    Ok(Json(CalculatorService::macros(&req)?))
}

/// POST /api/v1/calculator/plan - Combined plan
///
/// Anchors on `calories` when given, otherwise on the estimated TDEE.
async fn compute_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(req) = payload?;
    Ok(Json(CalculatorService::plan(&req)?))
}
