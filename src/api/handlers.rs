//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::authorization::{allowed_pages, authorize_request_str, navigation_for};
use crate::calculation::{MONTHLY_PROJECTION_DAYS, aggregate, project_monthly, run_payroll};
use crate::error::EngineError;
use crate::models::Role;
use crate::reports::{dashboard_stats, workforce_report};

use super::middleware::require_page_access;
use super::request::{
    AggregateRequest, AuthorizeRequest, ComputeRequest, MonthlyRequest, ReportRequest, RunRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ComputeResponse, MonthlyResponse, RolePagesResponse,
};
use super::state::AppState;

/// Header carrying the authenticated user's role, set by the session layer.
pub const ROLE_HEADER: &str = "x-user-role";

/// Creates the API router with all endpoints.
///
/// The `/payroll/*` and `/reports/*` endpoints are gated by the caller's
/// role, exactly as the matching pages are. `/authorize` and the role lookup
/// stay open since they only describe the policy.
pub fn create_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/payroll/compute", post(compute_handler))
        .route("/payroll/aggregate", post(aggregate_handler))
        .route("/payroll/run", post(run_handler))
        .route("/payroll/monthly", post(monthly_handler))
        .route("/reports/dashboard", post(dashboard_handler))
        .route("/reports/workforce", post(workforce_handler))
        .route_layer(middleware::from_fn(require_page_access));

    Router::new()
        .merge(gated)
        .route("/authorize", post(authorize_handler))
        .route("/roles/:role/pages", get(role_pages_handler))
        .with_state(state)
}

/// Unwraps a JSON body or turns the rejection into a 400 response.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Logs an engine error and converts it into its HTTP response.
fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /payroll/compute.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll computation");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = request.pay_cycle().and_then(|cycle| {
        state
            .calculator()
            .compute_with_audit(request.daily_rate, cycle)
            .map(|(result, audit_trail)| (cycle, result, audit_trail))
    });

    match outcome {
        Ok((cycle, result, audit_trail)) => {
            info!(
                correlation_id = %correlation_id,
                cycle = %cycle,
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                "Payroll computed"
            );
            let body = ComputeResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                daily_rate: request.daily_rate,
                cycle,
                result,
                audit_trail,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /payroll/aggregate.
async fn aggregate_handler(payload: Result<Json<AggregateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match aggregate(&request.results) {
        Ok(totals) => {
            info!(
                correlation_id = %correlation_id,
                results = totals.employee_count,
                net_pay = %totals.net_pay,
                "Payroll totals aggregated"
            );
            (StatusCode::OK, Json(totals)).into_response()
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /payroll/run.
async fn run_handler(
    State(state): State<AppState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let run = request
        .filter()
        .and_then(|filter| run_payroll(&state.calculator(), &request.employees, filter));

    match run {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                employees = run.lines.len(),
                net_pay = %run.totals.net_pay,
                "Payroll run completed"
            );
            (StatusCode::OK, Json(run)).into_response()
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /payroll/monthly.
async fn monthly_handler(payload: Result<Json<MonthlyRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match project_monthly(request.daily_rate) {
        Ok(monthly_salary) => (
            StatusCode::OK,
            Json(MonthlyResponse {
                daily_rate: request.daily_rate,
                days: MONTHLY_PROJECTION_DAYS,
                monthly_salary,
            }),
        )
            .into_response(),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /reports/dashboard.
async fn dashboard_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match dashboard_stats(&request.employees, &request.positions) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /reports/workforce.
async fn workforce_handler(payload: Result<Json<ReportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match workforce_report(&request.employees, &request.positions) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /authorize.
///
/// The role comes from the session header. A header that is present but not
/// valid UTF-8 is treated as an unknown role and denied.
async fn authorize_handler(
    headers: HeaderMap,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let role = headers
        .get(ROLE_HEADER)
        .map(|value| value.to_str().unwrap_or_default());
    let decision = authorize_request_str(role, &request.path);

    info!(
        correlation_id = %correlation_id,
        role = role.unwrap_or("<none>"),
        path = %request.path,
        decision = ?decision,
        "Navigation authorized"
    );
    (StatusCode::OK, Json(decision)).into_response()
}

/// Handler for GET /roles/:role/pages.
async fn role_pages_handler(Path(role): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match role.parse::<Role>() {
        Ok(role) => (
            StatusCode::OK,
            Json(RolePagesResponse {
                role,
                pages: allowed_pages(role).to_vec(),
                navigation: navigation_for(role),
            }),
        )
            .into_response(),
        Err(err) => engine_error(correlation_id, err),
    }
}
