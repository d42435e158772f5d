//! HTTP request handlers for the settlement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_termination;
use crate::models::TerminationInputs;

use super::explanation::EXPLANATION_FALLBACK;
use super::request::TerminationRequest;
use super::response::{ApiError, ApiErrorResponse, ExplanationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/explain", post(explain_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a termination request and returns the calculated settlement.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_to_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let inputs: TerminationInputs = request.into();

    match calculate_termination(&inputs, state.config().statute()) {
        Ok(settlement) => {
            info!(
                correlation_id = %correlation_id,
                reason = ?inputs.reason,
                notice_days = settlement.details.notice_days,
                total_net = %settlement.total_net,
                "Settlement calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(settlement),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement calculation failed"
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

/// Handler for POST /explain endpoint.
///
/// Calculates the settlement and asks the configured generator for a
/// narrative. Generator failure is non-fatal: the response carries the
/// fallback placeholder instead.
async fn explain_handler(
    State(state): State<AppState>,
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing explanation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_to_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let inputs: TerminationInputs = request.into();

    let settlement = match calculate_termination(&inputs, state.config().statute()) {
        Ok(settlement) => settlement,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement calculation failed"
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

    let explanation = match state.explainer().explain(&inputs, &settlement) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Explanation generation failed; returning fallback"
            );
            EXPLANATION_FALLBACK.to_string()
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ExplanationResponse {
            explanation,
            settlement,
        }),
    )
        .into_response()
}
