//! HTTP request handlers for the absence cost engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! request is resolved against the loaded policy defaults, handed to the
//! pure calculation core, and wrapped in a result envelope with an audit
//! trace.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_monthly_trend, compute_savings_traced, compute_traced};
use crate::models::{AuditTrace, EstimateResult, SavingsResult, TrendResult};

use super::request::{EstimateRequest, SavingsRequest, TrendRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/savings", post(savings_handler))
        .route("/trend", post(trend_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /estimate endpoint.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let scenario = request.scenario.resolve(state.policy().config());

    let start_time = Instant::now();
    match compute_traced(&scenario) {
        Ok(traced) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                employee_count = scenario.employee_count,
                total_period_cost = %traced.breakdown.total_period_cost,
                duration_us = duration_us,
                "Estimate completed successfully"
            );

            let result = EstimateResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                export_rows: traced.breakdown.export_rows(),
                breakdown: traced.breakdown,
                audit_trace: AuditTrace {
                    steps: traced.steps,
                    warnings: traced.warnings,
                    duration_us,
                },
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /savings endpoint.
async fn savings_handler(
    State(state): State<AppState>,
    payload: Result<Json<SavingsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing savings request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let scenario = request.scenario.resolve(state.policy().config());

    let start_time = Instant::now();
    match compute_savings_traced(&scenario, request.target_absence_percent) {
        Ok(traced) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                target_absence_percent = %request.target_absence_percent,
                annual_savings = %traced.savings.annual_savings,
                duration_us = duration_us,
                "Savings comparison completed successfully"
            );

            let result = SavingsResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                savings: traced.savings,
                audit_trace: AuditTrace {
                    steps: traced.steps,
                    warnings: traced.warnings,
                    duration_us,
                },
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Savings comparison failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /trend endpoint.
async fn trend_handler(
    State(state): State<AppState>,
    payload: Result<Json<TrendRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trend request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let scenario = request.scenario.resolve(state.policy().config());

    match compute_monthly_trend(&scenario, &request.monthly_absence_percent) {
        Ok(trend) => {
            info!(
                correlation_id = %correlation_id,
                annual_total = %trend.total(),
                "Trend completed successfully"
            );

            let result = TrendResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                trend,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Trend failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
