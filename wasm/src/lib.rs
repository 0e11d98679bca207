//! Player Nutrition WASM Module
//!
//! WebAssembly bindings so the planner can run entirely in the browser.
//! Every export takes a JSON request string and returns a JSON result
//! string; failures are thrown as plain message strings.

use player_nutrition_shared::{
    user_message, EnergyRequest, IdealWeightRequest, MacroRequest, PlanRequest,
};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid request: {}", e))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn energy_json(request: &str) -> Result<String, String> {
    let req: EnergyRequest = parse(request)?;
    let result = req.compute().map_err(|e| user_message(&e))?;
    render(&result)
}

fn ideal_weight_json(request: &str) -> Result<String, String> {
    let req: IdealWeightRequest = parse(request)?;
    let result = req.compute().map_err(|e| user_message(&e))?;
    render(&result)
}

fn macros_json(request: &str) -> Result<String, String> {
    let req: MacroRequest = parse(request)?;
    let result = req.compute().map_err(|e| user_message(&e))?;
    render(&result)
}

fn plan_json(request: &str) -> Result<String, String> {
    let req: PlanRequest = parse(request)?;
    let result = req.compute().map_err(|e| user_message(&e))?;
    render(&result)
}

/// BMR and TDEE for an `EnergyRequest`
#[wasm_bindgen(js_name = computeEnergy)]
pub fn compute_energy(request: &str) -> Result<String, JsValue> {
    energy_json(request).map_err(|e| JsValue::from_str(&e))
}

/// Position-based ideal weight for an `IdealWeightRequest`
#[wasm_bindgen(js_name = computeIdealWeight)]
pub fn compute_ideal_weight(request: &str) -> Result<String, JsValue> {
    ideal_weight_json(request).map_err(|e| JsValue::from_str(&e))
}

/// Macro ranges for a `MacroRequest`
#[wasm_bindgen(js_name = computeMacros)]
pub fn compute_macros(request: &str) -> Result<String, JsValue> {
    macros_json(request).map_err(|e| JsValue::from_str(&e))
}

/// Full plan, display lines and midpoints for a `PlanRequest`
#[wasm_bindgen(js_name = computePlan)]
pub fn compute_plan(request: &str) -> Result<String, JsValue> {
    plan_json(request).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn value(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_energy() {
        let out = energy_json(
            r#"{"gender":"male","age_years":25,"weight_kg":70,"height_cm":175,"activity_level":"moderate"}"#,
        )
        .unwrap();
        let v = value(&out);
        assert_eq!(v["bmr"], 1786);
        assert_eq!(v["tdee"], 2768);
    }

    #[test]
    fn test_ideal_weight() {
        let v = value(&ideal_weight_json(r#"{"height_cm":180,"position":"GK"}"#).unwrap());
        assert_eq!(v["ideal_weight_kg"]["min"], 75);
        assert_eq!(v["ideal_weight_kg"]["max"], 82);
        assert_eq!(v["base"], 80.0);
        assert_eq!(v["position"], "GK");
    }

    #[test]
    fn test_ideal_weight_height_rejected() {
        let err = ideal_weight_json(r#"{"height_cm":135,"position":"GK"}"#).unwrap_err();
        assert_eq!(err, "Height: height must be between 140 and 210 cm");
    }

    #[test]
    fn test_macros() {
        let v = value(
            &macros_json(r#"{"age_years":25,"weight_kg":70,"calories":2500,"goal":"maintain"}"#)
                .unwrap(),
        );
        assert_eq!(v["protein_g"]["min"], 98);
        assert_eq!(v["carb_g"]["max"], 371);
    }

    #[test]
    fn test_macros_weight_rejected() {
        let err = macros_json(r#"{"age_years":25,"weight_kg":300,"calories":2500}"#).unwrap_err();
        assert_eq!(err, "Current Weight: weight must be between 20 and 250 kg");
    }

    #[test]
    fn test_plan() {
        let v = value(
            &plan_json(
                r#"{"age_years":25,"weight_kg":70,"height_cm":175,"position":"CB","goal":"bulk","calories":2500}"#,
            )
            .unwrap(),
        );
        assert_eq!(v["plan"]["ideal_weight_kg"]["min"], 70);
        assert_eq!(v["plan"]["calories"]["final_max"], 3000);
        assert_eq!(v["midpoints"]["protein_g"], 140);
    }

    #[test]
    fn test_malformed_json() {
        let err = plan_json("{not json").unwrap_err();
        assert!(err.starts_with("invalid request"));
    }
}
