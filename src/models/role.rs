//! User roles and application page keys.
//!
//! Both sets are closed: parsing any other text is an error, never a
//! silently defaulted value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A category of user governing which application sections are visible.
///
/// Serialized with the upper-case codes the session provider issues
/// (`ADMIN`, `HR`, `PAYROLL`, `MANAGER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access to every section.
    Admin,
    /// Human resources staff.
    Hr,
    /// Payroll clerks.
    Payroll,
    /// Line managers.
    Manager,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hr, Role::Payroll, Role::Manager];

    /// Returns the upper-case session code for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::Payroll => "PAYROLL",
            Role::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EngineError;

    /// Parses a role code case-insensitively.
    ///
    /// ```
    /// use payroll_engine::models::Role;
    ///
    /// assert_eq!("payroll".parse::<Role>().unwrap(), Role::Payroll);
    /// assert!("janitor".parse::<Role>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "HR" => Ok(Role::Hr),
            "PAYROLL" => Ok(Role::Payroll),
            "MANAGER" => Ok(Role::Manager),
            _ => Err(EngineError::UnknownRole {
                role: s.to_string(),
            }),
        }
    }
}

/// Identifies one section of the application; the unit of access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKey {
    /// Landing page with aggregate statistics.
    Dashboard,
    /// Employee records.
    Employees,
    /// Position records.
    Positions,
    /// Payroll calculation and listing.
    Payroll,
    /// Workforce reports.
    Reports,
    /// Job applicants.
    Applicants,
}

impl PageKey {
    /// Every page key, in navigation order.
    pub const ALL: [PageKey; 6] = [
        PageKey::Dashboard,
        PageKey::Employees,
        PageKey::Positions,
        PageKey::Payroll,
        PageKey::Reports,
        PageKey::Applicants,
    ];

    /// Returns the lowercase identifier of this page.
    pub const fn as_str(self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Employees => "employees",
            PageKey::Positions => "positions",
            PageKey::Payroll => "payroll",
            PageKey::Reports => "reports",
            PageKey::Applicants => "applicants",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PageKey::ALL
            .into_iter()
            .find(|page| page.as_str() == wanted)
            .ok_or_else(|| EngineError::invalid_input("page", format!("unknown page '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("hr".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!(" Manager ".parse::<Role>().unwrap(), Role::Manager);
    }

    #[test]
    fn test_role_parse_unknown_is_unknown_role() {
        let err = "INTERN".parse::<Role>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownRole {
                role: "INTERN".to_string()
            }
        );
    }

    #[test]
    fn test_role_serialization_uses_session_codes() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        assert_eq!(serde_json::to_string(&Role::Payroll).unwrap(), "\"PAYROLL\"");
        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_role_display_matches_code() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_page_key_parse() {
        assert_eq!("payroll".parse::<PageKey>().unwrap(), PageKey::Payroll);
        assert_eq!("Applicants".parse::<PageKey>().unwrap(), PageKey::Applicants);
    }

    #[test]
    fn test_page_key_parse_unknown_is_invalid_input() {
        let err = "settings".parse::<PageKey>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "page"));
    }

    #[test]
    fn test_page_key_serialization() {
        assert_eq!(
            serde_json::to_string(&PageKey::Dashboard).unwrap(),
            "\"dashboard\""
        );
    }
}
