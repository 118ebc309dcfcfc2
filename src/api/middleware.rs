//! Role gating for the payroll and report endpoints.
//!
//! Every gated request runs through the same decision as page navigation:
//! the role header is resolved and the request path is classified into a
//! page. A missing or unknown role is refused with 401; a role without
//! access to the page is refused with 403.

use axum::{
    Json,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::authorization::{Decision, authorize_request_str};

use super::handlers::ROLE_HEADER;
use super::response::ApiError;

/// Admits the request only when the caller's role may view the page its
/// path belongs to.
///
/// A header that is present but not valid UTF-8 counts as an unknown role.
pub async fn require_page_access(headers: HeaderMap, request: Request, next: Next) -> Response {
    let role = headers
        .get(ROLE_HEADER)
        .map(|value| value.to_str().unwrap_or_default());
    let path = request.uri().path().to_string();

    match authorize_request_str(role, &path) {
        Decision::Allow => next.run(request).await,
        Decision::Deny => {
            warn!(path = %path, "Request without a recognised role refused");
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiError::with_details(
                    "UNAUTHENTICATED",
                    "A valid role is required",
                    format!("Send the '{}' header", ROLE_HEADER),
                )),
            )
                .into_response()
        }
        Decision::RedirectTo { path: redirect } => {
            warn!(
                role = role.unwrap_or("<none>"),
                path = %path,
                "Request outside the role's pages refused"
            );
            (
                StatusCode::FORBIDDEN,
                Json(ApiError::with_details(
                    "FORBIDDEN",
                    format!("Role may not access {}", path),
                    redirect,
                )),
            )
                .into_response()
        }
    }
}
