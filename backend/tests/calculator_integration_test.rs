//! Integration tests for the calculator endpoints

mod common;

use axum::http::StatusCode;
use common::TestApp;
use rstest::rstest;
use serde_json::{json, Value};

#[tokio::test]
async fn test_energy_endpoint() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/energy",
            json!({
                "gender": "female",
                "age_years": 30,
                "weight_kg": 60,
                "height_cm": 165,
                "activity_level": "light"
            }),
        )
        .await;

    // 655 + 576 + 305.25 − 141 = 1395.25
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmr"], 1395);
    assert_eq!(body["tdee"], 1920);
    assert_eq!(body["activity_level"], "light");
}

#[tokio::test]
async fn test_energy_unknown_activity() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/energy",
            json!({
                "gender": "male",
                "age_years": 30,
                "weight_kg": 80,
                "height_cm": 180,
                "activity_level": "athlete"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_ACTIVITY_LEVEL");
    assert_eq!(body["error"]["field"], "activity_level");
}

#[tokio::test]
async fn test_ideal_weight_goalkeeper() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/ideal-weight",
            json!({ "height_cm": 180, "position": "GK", "weight_kg": 70 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ideal_weight_kg"], json!({ "min": 75, "max": 82 }));
    assert_eq!(body["base"], 80.0);
    assert_eq!(body["comparison"]["status"], "below_range");
}

#[tokio::test]
async fn test_ideal_weight_height_out_of_range() {
    let app = TestApp::new();

    for height in [135, 215] {
        let (status, body) = app
            .post_json(
                "/api/v1/calculator/ideal-weight",
                json!({ "height_cm": height, "position": "CB" }),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "height");
        assert_eq!(
            body["error"]["message"],
            "height must be between 140 and 210 cm"
        );
    }
}

#[tokio::test]
async fn test_ideal_weight_unsupported_position() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/ideal-weight",
            json!({ "height_cm": 180, "position": "gk" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNSUPPORTED_POSITION");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("GK, CB, FB/WB, DM/CM/AM, ST/CF-fast, Winger"));
}

#[tokio::test]
async fn test_macros_maintain_reference() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/macros",
            json!({ "age_years": 25, "weight_kg": 70, "calories": 2500, "goal": "maintain" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protein_g"], json!({ "min": 98, "max": 112 }));
    assert_eq!(body["fat_g"], json!({ "min": 69, "max": 97 }));
    assert_eq!(body["carb_g"], json!({ "min": 294, "max": 371 }));
    assert_eq!(body["calories"]["final_min"], 2500);
    assert_eq!(body["calories"]["final_max"], 2500);
    assert_eq!(body["age_group"], "18+");
}

#[tokio::test]
async fn test_macros_weight_out_of_range() {
    let app = TestApp::new();

    for weight in [15, 300] {
        let (status, body) = app
            .post_json(
                "/api/v1/calculator/macros",
                json!({ "age_years": 25, "weight_kg": weight, "calories": 2500 }),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "weight must be between 20 and 250 kg"
        );
    }
}

#[tokio::test]
async fn test_macros_insufficient_calories() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/macros",
            json!({ "age_years": 25, "weight_kg": 250, "calories": 800, "goal": "cut" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INSUFFICIENT_CALORIES");
}

#[tokio::test]
async fn test_plan_with_supplied_calories() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/plan",
            json!({
                "age_years": 16,
                "weight_kg": 55,
                "height_cm": 170,
                "position": "DM",
                "goal": "cut",
                "calories": 2300
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["position"], "DM/CM/AM");
    assert_eq!(body["plan"]["ideal_weight_kg"], json!({ "min": 65, "max": 70 }));
    assert_eq!(body["plan"]["protein_g"], json!({ "min": 88, "max": 110 }));
    assert_eq!(body["plan"]["calories"]["final_min"], 1900);
    assert_eq!(body["plan"]["calories"]["final_max"], 2100);
    assert_eq!(body["anchor_source"], "supplied");
    assert_eq!(
        body["display"]["delta"],
        "Calorie adjustment: -400 to -200 kcal/day"
    );
}

#[tokio::test]
async fn test_plan_anchors_on_tdee() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/plan",
            json!({
                "age_years": 25,
                "weight_kg": 70,
                "height_cm": 175,
                "position": "CB",
                "gender": "male",
                "activity_level": "moderate"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["anchor_source"], "estimated");
    assert_eq!(body["energy"]["tdee"], 2768);
    assert_eq!(body["plan"]["calories"]["maintain"], 2768);
    assert_eq!(body["plan"]["goal"], "maintain");
}

#[tokio::test]
async fn test_plan_uses_stricter_weight_band() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/plan",
            json!({
                "age_years": 25,
                "weight_kg": 25,
                "height_cm": 175,
                "position": "CB",
                "calories": 2500
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "weight must be between 30 and 140 kg");
}

#[tokio::test]
async fn test_blank_position_is_request_validation_error() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/calculator/plan",
            json!({
                "age_years": 25,
                "weight_kg": 70,
                "height_cm": 175,
                "position": "",
                "calories": 2500
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "position");
}

#[rstest]
#[case::energy_gender(
    "/api/v1/calculator/energy",
    json!({ "gender": "robot", "age_years": 30, "weight_kg": 80, "height_cm": 180, "activity_level": "light" }),
    "UNKNOWN_GENDER",
    "gender"
)]
#[case::energy_age(
    "/api/v1/calculator/energy",
    json!({ "gender": "male", "age_years": 5, "weight_kg": 80, "height_cm": 180, "activity_level": "light" }),
    "AGE_BELOW_MINIMUM",
    "age"
)]
#[case::ideal_weight_current_weight(
    "/api/v1/calculator/ideal-weight",
    json!({ "height_cm": 180, "position": "GK", "weight_kg": 300 }),
    "OUT_OF_RANGE",
    "weight"
)]
#[case::macros_calories(
    "/api/v1/calculator/macros",
    json!({ "age_years": 25, "weight_kg": 70, "calories": 700 }),
    "CALORIES_BELOW_MINIMUM",
    "calories"
)]
#[case::macros_goal(
    "/api/v1/calculator/macros",
    json!({ "age_years": 25, "weight_kg": 70, "calories": 2500, "goal": "recomp" }),
    "UNKNOWN_GOAL",
    "goal"
)]
#[case::plan_position(
    "/api/v1/calculator/plan",
    json!({ "age_years": 25, "weight_kg": 70, "height_cm": 175, "position": "Libero", "calories": 2500 }),
    "UNSUPPORTED_POSITION",
    "position"
)]
#[case::plan_height(
    "/api/v1/calculator/plan",
    json!({ "age_years": 25, "weight_kg": 70, "height_cm": 215, "position": "CB", "calories": 2500 }),
    "OUT_OF_RANGE",
    "height"
)]
#[tokio::test]
async fn test_rejections_name_code_and_field(
    #[case] path: &str,
    #[case] body: Value,
    #[case] code: &str,
    #[case] field: &str,
) {
    let app = TestApp::new();

    let (status, response) = app.post_json(path, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], code);
    assert_eq!(response["error"]["field"], field);
}
