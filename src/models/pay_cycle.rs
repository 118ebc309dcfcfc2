//! Pay cycle definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The recurring period over which a daily rate is paid out.
///
/// The record store keeps the legacy payroll-type codes `SEMANAL` and
/// `CATORCENAL`; both are accepted when deserializing or parsing. Both paths
/// go through [`FromStr`], so they agree on case-insensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PayCycle {
    /// Seven-day pay period.
    Weekly,
    /// Fourteen-day pay period.
    Biweekly,
}

impl PayCycle {
    /// Returns the number of days in one period of this cycle.
    ///
    /// ```
    /// use payroll_engine::models::PayCycle;
    ///
    /// assert_eq!(PayCycle::Weekly.period_days(), 7);
    /// assert_eq!(PayCycle::Biweekly.period_days(), 14);
    /// ```
    pub const fn period_days(self) -> u32 {
        match self {
            PayCycle::Weekly => 7,
            PayCycle::Biweekly => 14,
        }
    }

    /// Returns the canonical lowercase name of the cycle.
    pub const fn as_str(self) -> &'static str {
        match self {
            PayCycle::Weekly => "weekly",
            PayCycle::Biweekly => "biweekly",
        }
    }
}

impl fmt::Display for PayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayCycle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" | "semanal" => Ok(PayCycle::Weekly),
            "biweekly" | "bi-weekly" | "catorcenal" => Ok(PayCycle::Biweekly),
            _ => Err(EngineError::invalid_input(
                "cycle",
                format!("unsupported pay cycle '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for PayCycle {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_days() {
        assert_eq!(PayCycle::Weekly.period_days(), 7);
        assert_eq!(PayCycle::Biweekly.period_days(), 14);
    }

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("weekly".parse::<PayCycle>().unwrap(), PayCycle::Weekly);
        assert_eq!("Biweekly".parse::<PayCycle>().unwrap(), PayCycle::Biweekly);
    }

    #[test]
    fn test_parse_legacy_payroll_type_codes() {
        assert_eq!("SEMANAL".parse::<PayCycle>().unwrap(), PayCycle::Weekly);
        assert_eq!("CATORCENAL".parse::<PayCycle>().unwrap(), PayCycle::Biweekly);
    }

    #[test]
    fn test_parse_unknown_cycle_is_invalid_input() {
        let err = "monthly".parse::<PayCycle>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "cycle"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&PayCycle::Weekly).unwrap(), "\"weekly\"");
        assert_eq!(
            serde_json::to_string(&PayCycle::Biweekly).unwrap(),
            "\"biweekly\""
        );
    }

    #[test]
    fn test_deserialize_legacy_alias() {
        let cycle: PayCycle = serde_json::from_str("\"CATORCENAL\"").unwrap();
        assert_eq!(cycle, PayCycle::Biweekly);
    }

    #[test]
    fn test_deserialize_matches_parse_case_insensitively() {
        for (text, expected) in [
            ("\"semanal\"", PayCycle::Weekly),
            ("\"Semanal\"", PayCycle::Weekly),
            ("\"catorcenal\"", PayCycle::Biweekly),
            ("\"WEEKLY\"", PayCycle::Weekly),
            ("\"bi-weekly\"", PayCycle::Biweekly),
        ] {
            let cycle: PayCycle = serde_json::from_str(text).unwrap();
            assert_eq!(cycle, expected, "{}", text);
        }
    }

    #[test]
    fn test_deserialize_unknown_cycle_fails() {
        assert!(serde_json::from_str::<PayCycle>("\"quincenal\"").is_err());
    }
}
