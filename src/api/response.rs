//! Response types for the payroll engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authorization::NavItem;
use crate::error::EngineError;
use crate::models::{AuditStep, PageKey, PayCycle, PayrollResult, Role};

/// Response body for `POST /payroll/compute`.
#[derive(Debug, Clone, Serialize)]
pub struct ComputeResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Daily rate the calculation used.
    pub daily_rate: Decimal,
    /// Cycle the calculation used.
    pub cycle: PayCycle,
    /// The pay breakdown.
    pub result: PayrollResult,
    /// Every step taken to reach the breakdown.
    pub audit_trail: Vec<AuditStep>,
}

/// Response body for `POST /payroll/monthly`.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyResponse {
    /// Daily rate projected.
    pub daily_rate: Decimal,
    /// Days in the projection.
    pub days: u32,
    /// Projected monthly base salary.
    pub monthly_salary: Decimal,
}

/// Response body for `GET /roles/:role/pages`.
#[derive(Debug, Clone, Serialize)]
pub struct RolePagesResponse {
    /// The resolved role.
    pub role: Role,
    /// Pages the role may view.
    pub pages: Vec<PageKey>,
    /// Navigation entries the role sees.
    pub navigation: Vec<NavItem>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("Correct the '{}' value and retry", field),
                ),
            },
            EngineError::UnknownRole { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("UNKNOWN_ROLE", message),
            },
            EngineError::InvalidRates { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RATES", message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
