//! HTTP API module for the payroll engine.
//!
//! This module exposes the payroll calculator, the role authorizer, and the
//! reports as JSON endpoints. Payroll and report endpoints are gated by the
//! caller's role.

mod handlers;
mod middleware;
mod request;
mod response;
mod state;

pub use handlers::{ROLE_HEADER, create_router};
pub use middleware::require_page_access;
pub use request::{
    AggregateRequest, AuthorizeRequest, ComputeRequest, MonthlyRequest, ReportRequest, RunRequest,
};
pub use response::{ApiError, ApiErrorResponse, ComputeResponse, MonthlyResponse, RolePagesResponse};
pub use state::AppState;
