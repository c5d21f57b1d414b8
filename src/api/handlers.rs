//! HTTP request handlers for the Business Valuation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_valuation, derive_overall_grade, lookup_multiplier_range, normalize_ebitda,
};
use crate::models::{AuditStep, AuditTrace, AuditWarning, ValuationResult, ValueDriverGrades};

use super::request::ValuationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/valuate", post(valuate_handler))
        .with_state(state)
}

/// Handler for POST /valuate endpoint.
///
/// Accepts a valuation request and returns the computed valuation result.
async fn valuate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValuationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing valuation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the grade map before entering the calculation pipeline
    let grades = match request.grades() {
        Ok(grades) => grades,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Grade validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    match perform_valuation(&request, &grades, &state) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                valuation_id = %result.valuation_id,
                tier = ?request.tier,
                overall_score = %result.overall_score,
                mid_estimate = %result.mid_estimate,
                duration_us = result.audit_trace.duration_us,
                "Valuation completed successfully"
            );
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
                "Valuation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the valuation calculation pipeline.
fn perform_valuation(
    request: &ValuationRequest,
    grades: &ValueDriverGrades,
    state: &AppState,
) -> Result<ValuationResult, crate::error::EngineError> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let tables = state.config().tables();

    let ebitda = normalize_ebitda(&request.financials, step_number)?;
    audit_steps.push(ebitda.audit_step.clone());
    step_number += 1;

    let grade_average = derive_overall_grade(grades, step_number);
    audit_steps.push(grade_average.audit_step.clone());
    step_number += 1;

    let lookup = lookup_multiplier_range(
        request.naics_code.as_deref(),
        request.tier,
        tables,
        step_number,
    );
    audit_steps.push(lookup.audit_step.clone());
    if let Some(warning) = lookup.warning.clone() {
        warnings.push(warning);
    }
    step_number += 1;

    let valuation = compute_valuation(
        grade_average.percent_score,
        ebitda.adjusted_ebitda,
        &lookup.range,
        request.tier,
        step_number,
    );
    audit_steps.push(valuation.audit_step.clone());

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(ValuationResult {
        valuation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tier: request.tier,
        base_ebitda: ebitda.base_ebitda,
        adjusted_ebitda: ebitda.adjusted_ebitda,
        overall_score: grade_average.overall.to_string(),
        valuation_multiple: valuation.multiple,
        low_estimate: valuation.low_estimate,
        mid_estimate: valuation.mid_estimate,
        high_estimate: valuation.high_estimate,
        matched_naics: lookup.matched_code,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
