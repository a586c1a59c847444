// ABOUTME: Anthropometry route handlers for calculation, recommendations and repeatability checks
// ABOUTME: Thin handlers that delegate to the metrics engine and the recommendation catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Anthropometry routes
//!
//! Calculation failures are part of the result body: a record that fails
//! validation is answered with `400` and the failed `CalculationResult`, not
//! with an `AppError`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pierre_anthro_core::constants::endpoints;
use pierre_anthro_core::errors::{AppError, ErrorCode};
use pierre_anthro_core::models::MeasurementRecord;
use pierre_anthro_intelligence::{assess_repeatability, RepeatabilityAssessment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::recommendations::RecommendationLookup;
use crate::resources::ServerResources;

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationRequest {
    /// Goal as returned by `/api/calculate`
    pub goal: Option<GoalSelection>,
}

/// Goal reference inside a recommendation request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalSelection {
    /// Goal name, key or alias
    pub primary_goal: Option<String>,
}

/// Response of `POST /api/recommendations`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// Always `true`
    pub success: bool,
    /// Advice lists, or a message when the goal is unknown
    pub recommendations: RecommendationLookup,
}

/// Body of `POST /api/measurements/repeatability`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepeatabilityRequest {
    /// Repeated measurements of one site
    #[serde(default)]
    pub measurements: Vec<f64>,
    /// Optional site name echoed back
    #[serde(default)]
    pub site: Option<String>,
}

/// Response of `POST /api/measurements/repeatability`
#[derive(Debug, Clone, Serialize)]
pub struct RepeatabilityResponse {
    /// Always `true`
    pub success: bool,
    /// Site name from the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Assessment
    #[serde(flatten)]
    pub assessment: RepeatabilityAssessment,
}

fn invalid_body(rejection: &JsonRejection) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid request body: {}", rejection.body_text()),
    )
}

/// Anthropometry routes
pub struct AnthropometryRoutes;

impl AnthropometryRoutes {
    /// Create all anthropometry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::CALCULATE, post(Self::handle_calculate))
            .route(endpoints::RECOMMENDATIONS, post(Self::handle_recommendations))
            .route(endpoints::REPEATABILITY, post(Self::handle_repeatability))
            .with_state(resources)
    }

    /// Handle a measurement calculation
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<MeasurementRecord>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(record) = body.map_err(|rejection| invalid_body(&rejection))?;

        let result = resources.engine.compute(&record);
        if result.success {
            debug!(
                goal = result.goal.as_ref().map(|g| g.category.key()),
                "Calculation succeeded"
            );
            Ok((StatusCode::OK, Json(result)).into_response())
        } else {
            info!(errors = result.errors.len(), "Calculation rejected");
            Ok((StatusCode::BAD_REQUEST, Json(result)).into_response())
        }
    }

    /// Handle a recommendation lookup
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RecommendationRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|rejection| invalid_body(&rejection))?;

        let goal = request.goal.ok_or_else(|| AppError::missing_field("goal"))?;
        let primary_goal = goal
            .primary_goal
            .ok_or_else(|| AppError::missing_field("goal.primary_goal"))?;

        let recommendations = resources.catalog.lookup(&primary_goal);
        if matches!(recommendations, RecommendationLookup::NotFound { .. }) {
            debug!(%primary_goal, "No recommendations for goal");
        }

        Ok((
            StatusCode::OK,
            Json(RecommendationResponse {
                success: true,
                recommendations,
            }),
        )
            .into_response())
    }

    /// Handle a repeated-measurement quality check
    async fn handle_repeatability(
        body: Result<Json<RepeatabilityRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|rejection| invalid_body(&rejection))?;

        let assessment = assess_repeatability(&request.measurements)?;

        Ok((
            StatusCode::OK,
            Json(RepeatabilityResponse {
                success: true,
                site: request.site,
                assessment,
            }),
        )
            .into_response())
    }
}
