//! Navigation bar entries filtered by role.

use serde::Serialize;

use crate::models::{PageKey, Role};

use super::policy::is_authorized;

/// One entry in the application navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Page the entry leads to.
    pub page: PageKey,
    /// Link target.
    pub href: &'static str,
    /// Display label.
    pub label: &'static str,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        page: PageKey::Dashboard,
        href: "/",
        label: "Dashboard",
    },
    NavItem {
        page: PageKey::Employees,
        href: "/employees",
        label: "Employees",
    },
    NavItem {
        page: PageKey::Positions,
        href: "/positions",
        label: "Positions",
    },
    NavItem {
        page: PageKey::Payroll,
        href: "/payroll",
        label: "Payroll",
    },
    NavItem {
        page: PageKey::Reports,
        href: "/reports",
        label: "Reports",
    },
    NavItem {
        page: PageKey::Applicants,
        href: "/applicants",
        label: "Applicants",
    },
];

/// Returns the navigation entries a role may see, in display order.
///
/// ```
/// use payroll_engine::authorization::navigation_for;
/// use payroll_engine::models::Role;
///
/// let labels: Vec<&str> = navigation_for(Role::Payroll).iter().map(|i| i.label).collect();
/// assert_eq!(labels, vec!["Dashboard", "Employees", "Payroll", "Reports"]);
/// ```
pub fn navigation_for(role: Role) -> Vec<NavItem> {
    NAV_ITEMS
        .into_iter()
        .filter(|item| is_authorized(role, item.page))
        .collect()
}
