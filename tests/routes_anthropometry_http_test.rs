// ABOUTME: HTTP integration tests for calculation, recommendation and repeatability routes
// ABOUTME: Drives the full router in-process and checks status codes and response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for the anthropometry routes

mod common;
mod helpers;

use common::{create_test_router, female_payload, male_payload};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

// ============================================================================
// POST /api/calculate
// ============================================================================

#[tokio::test]
async fn test_calculate_male_reference() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&male_payload())
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["metrics"]["bmi"], 24.69);
    assert_eq!(body["metrics"]["waist_hip_ratio"], 0.85);
    assert_eq!(body["metrics"]["body_fat_percentage"], 11.2);
    assert_eq!(body["metrics"]["fat_free_mass_index"], 21.93);
    assert_eq!(body["metrics"]["skinfold_protocol"], "male_specific");
    assert_eq!(body["goal"]["category"], "standard_plan");
    assert!(body["goal"]["caloric_strategy"].is_string());
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_calculate_uses_catalog_goal_text() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&female_payload())
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["goal"]["category"], "advanced_recomposition");
    assert_eq!(body["goal"]["primary_goal"], "Advanced recomposition");
    assert_eq!(
        body["goal"]["description"],
        "Optimal balance between muscle gain and fat loss"
    );
    assert!(body["interpretations"]["body_fat_percentage"]["label"].is_string());
}

#[tokio::test]
async fn test_calculate_without_skinfolds_has_no_goal() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({
            "gender": "female",
            "age": 40,
            "weight": 70,
            "height": 175,
            "waist": 80,
            "hip": 100
        }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["metrics"]["bmi"], 22.86);
    assert!(body["metrics"].get("body_fat_percentage").is_none());
    assert!(body.get("goal").is_none());
}

#[tokio::test]
async fn test_calculate_out_of_range_weight_is_rejected() {
    let mut payload = male_payload();
    payload["weight"] = json!(400);

    let response = AxumTestRequest::post("/api/calculate")
        .json(&payload)
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();

    assert_eq!(body["success"], false);
    assert!(body.get("metrics").is_none());
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
}

#[tokio::test]
async fn test_calculate_missing_gender_is_rejected() {
    let mut payload = male_payload();
    payload.as_object_mut().unwrap().remove("gender");

    let response = AxumTestRequest::post("/api/calculate")
        .json(&payload)
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let response = AxumTestRequest::post("/api/calculate")
        .raw_json("{\"gender\": \"M\", \"age\": ")
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_calculate_site_and_legacy_key_together() {
    let mut payload = female_payload();
    payload["triceps"] = json!(15);

    let response = AxumTestRequest::post("/api/calculate")
        .json(&payload)
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_FORMAT");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("duplicate field `triceps`"));
}

#[tokio::test]
async fn test_calculate_requires_json_content_type() {
    let response = AxumTestRequest::post("/api/calculate")
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// POST /api/recommendations
// ============================================================================

#[tokio::test]
async fn test_recommendations_for_known_goal() {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({ "goal": { "primary_goal": "Hypertrophy" } }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    let recommendations = &body["recommendations"];
    assert!(!recommendations["nutrition"].as_array().unwrap().is_empty());
    assert!(!recommendations["training"].as_array().unwrap().is_empty());
    assert!(recommendations["supplements"].is_array());
}

#[tokio::test]
async fn test_recommendations_accept_alias() {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({ "goal": { "primary_goal": "Reducción visceral" } }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["recommendations"]["nutrition"].is_array());
}

#[tokio::test]
async fn test_recommendations_accept_goal_from_calculation() {
    let app = create_test_router();
    let calculation: Value = AxumTestRequest::post("/api/calculate")
        .json(&male_payload())
        .send(app.clone())
        .await
        .json();

    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({ "goal": calculation["goal"] }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["recommendations"]["training"].is_array());
}

#[tokio::test]
async fn test_recommendations_unknown_goal_message() {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({ "goal": { "primary_goal": "Marathon taper" } }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["recommendations"]["message"],
        "No specific recommendations for this goal"
    );
}

#[tokio::test]
async fn test_recommendations_missing_goal() {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({}))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_recommendations_missing_primary_goal() {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&json!({ "goal": {} }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("goal.primary_goal"));
}

// ============================================================================
// POST /api/measurements/repeatability
// ============================================================================

#[tokio::test]
async fn test_repeatability_acceptable() {
    let response = AxumTestRequest::post("/api/measurements/repeatability")
        .json(&json!({ "site": "triceps", "measurements": [10.0, 10.2, 10.1] }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["site"], "triceps");
    assert_eq!(body["acceptable"], true);
    assert_eq!(body["coefficient_of_variation"], 0.99);
}

#[tokio::test]
async fn test_repeatability_rejects_spread() {
    let response = AxumTestRequest::post("/api/measurements/repeatability")
        .json(&json!({ "measurements": [10.0, 12.0] }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["acceptable"], false);
    assert_eq!(body["coefficient_of_variation"], 12.86);
    assert!(body.get("site").is_none());
}

#[tokio::test]
async fn test_repeatability_single_value() {
    let response = AxumTestRequest::post("/api/measurements/repeatability")
        .json(&json!({ "measurements": [10.0] }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["acceptable"], false);
}

#[tokio::test]
async fn test_repeatability_zero_mean_is_undefined() {
    let response = AxumTestRequest::post("/api/measurements/repeatability")
        .json(&json!({ "measurements": [-1.0, 1.0] }))
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json();
    assert_eq!(body["code"], "COMPUTATION_UNDEFINED");
}

// ============================================================================
// Router-level behavior
// ============================================================================

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_cors_header_present_for_browser_origin() {
    let response = AxumTestRequest::post("/api/calculate")
        .header("origin", "http://localhost:3000")
        .json(&male_payload())
        .send(create_test_router())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
