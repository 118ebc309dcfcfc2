//! Navigation decisions.
//!
//! [`authorize_request`] evaluates, in order: missing session, unclassified
//! path, page outside the role's policy row. It performs no I/O.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{PageKey, Role};

use super::policy::is_authorized;

/// Where unauthorized navigation is sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Path prefixes that identify an application page.
const PAGE_PREFIXES: [(&str, PageKey); 7] = [
    ("/", PageKey::Dashboard),
    ("/dashboard", PageKey::Dashboard),
    ("/employees", PageKey::Employees),
    ("/positions", PageKey::Positions),
    ("/payroll", PageKey::Payroll),
    ("/reports", PageKey::Reports),
    ("/applicants", PageKey::Applicants),
];

/// The outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Serve the requested page.
    Allow,
    /// Send the user elsewhere.
    RedirectTo {
        /// Target of the redirect.
        path: String,
    },
    /// No authenticated session; the caller should require login.
    Deny,
}

/// Maps a request path to the page it belongs to.
///
/// The longest matching prefix wins. A prefix matches only on a segment
/// boundary, so `/payroll/7` is the payroll page but `/payrolls` is not.
/// The root prefix `/` matches only the root itself. Query strings and
/// fragments are ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::authorization::page_for_path;
/// use payroll_engine::models::PageKey;
///
/// assert_eq!(page_for_path("/"), Some(PageKey::Dashboard));
/// assert_eq!(page_for_path("/payroll/edit/3"), Some(PageKey::Payroll));
/// assert_eq!(page_for_path("/login"), None);
/// ```
pub fn page_for_path(path: &str) -> Option<PageKey> {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    PAGE_PREFIXES
        .iter()
        .filter(|(prefix, _)| prefix_matches(prefix, path))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, page)| *page)
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Decides whether a navigation attempt is allowed.
///
/// 1. No role (no session) is `Deny`.
/// 2. A path that maps to no page is `Allow`.
/// 3. A page outside the role's policy row redirects to [`UNAUTHORIZED_PATH`].
/// 4. Anything else is `Allow`.
///
/// # Example
///
/// ```
/// use payroll_engine::authorization::{Decision, authorize_request};
/// use payroll_engine::models::Role;
///
/// assert_eq!(authorize_request(Some(Role::Admin), "/payroll"), Decision::Allow);
/// assert_eq!(
///     authorize_request(Some(Role::Hr), "/payroll"),
///     Decision::RedirectTo { path: "/unauthorized".to_string() }
/// );
/// assert_eq!(authorize_request(None, "/employees"), Decision::Deny);
/// ```
pub fn authorize_request(role: Option<Role>, requested_path: &str) -> Decision {
    let Some(role) = role else {
        return Decision::Deny;
    };

    let Some(page) = page_for_path(requested_path) else {
        return Decision::Allow;
    };

    if is_authorized(role, page) {
        Decision::Allow
    } else {
        debug!(%role, %page, path = requested_path, "Navigation redirected");
        Decision::RedirectTo {
            path: UNAUTHORIZED_PATH.to_string(),
        }
    }
}

/// Decides a navigation attempt for a textual role code.
///
/// An unknown role fails closed with `Deny`.
pub fn authorize_request_str(role: Option<&str>, requested_path: &str) -> Decision {
    match role.map(str::parse::<Role>).transpose() {
        Ok(role) => authorize_request(role, requested_path),
        Err(err) => {
            warn!(error = %err, path = requested_path, "Denying request with unknown role");
            Decision::Deny
        }
    }
}
