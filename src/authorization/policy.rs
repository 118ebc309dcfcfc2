//! The role-to-page access table.

use crate::error::EngineResult;
use crate::models::{PageKey, Role};

/// Pages visible to each role.
///
/// A process-wide constant. A policy change replaces this table as a whole.
pub const ROLE_PAGE_POLICY: [(Role, &[PageKey]); 4] = [
    (
        Role::Admin,
        &[
            PageKey::Dashboard,
            PageKey::Employees,
            PageKey::Positions,
            PageKey::Payroll,
            PageKey::Reports,
            PageKey::Applicants,
        ],
    ),
    (
        Role::Hr,
        &[
            PageKey::Dashboard,
            PageKey::Employees,
            PageKey::Positions,
            PageKey::Reports,
            PageKey::Applicants,
        ],
    ),
    (
        Role::Payroll,
        &[
            PageKey::Dashboard,
            PageKey::Employees,
            PageKey::Payroll,
            PageKey::Reports,
        ],
    ),
    (
        Role::Manager,
        &[
            PageKey::Dashboard,
            PageKey::Employees,
            PageKey::Positions,
            PageKey::Reports,
        ],
    ),
];

/// Returns the pages a role may view, in navigation order.
///
/// # Example
///
/// ```
/// use payroll_engine::authorization::allowed_pages;
/// use payroll_engine::models::{PageKey, Role};
///
/// assert!(allowed_pages(Role::Payroll).contains(&PageKey::Payroll));
/// assert!(!allowed_pages(Role::Payroll).contains(&PageKey::Positions));
/// ```
pub fn allowed_pages(role: Role) -> &'static [PageKey] {
    ROLE_PAGE_POLICY
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, pages)| *pages)
        .unwrap_or(&[])
}

/// Returns the pages for a textual role code.
///
/// Fails with `UnknownRole` when the code names no policy row.
pub fn allowed_pages_for(role: &str) -> EngineResult<&'static [PageKey]> {
    let role = role.parse::<Role>()?;
    Ok(allowed_pages(role))
}

/// Returns whether `role` may view `page`.
pub fn is_authorized(role: Role, page: PageKey) -> bool {
    allowed_pages(role).contains(&page)
}
