//! Employee and position records as supplied by the record store.
//!
//! These carry only the columns the payroll and reporting logic reads; the
//! store owns every other field. Records arriving over the API are checked
//! with `validate` against the same rules the store enforces on write.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayCycle;

/// Department codes the record store accepts.
pub const DEPARTMENTS: [&str; 12] = [
    "QCD", "SCD", "RDD", "MMD", "ADD", "ADDIT", "EQD", "CSD", "ADEHS", "AD", "HRD", "FD",
];

/// Plant codes the record store accepts.
pub const PLANTS: [&str; 3] = ["PM", "SSD", "CHU"];

/// Collar classifications the record store accepts.
pub const COLLAR_TYPES: [&str; 3] = ["BLUECOLLAR", "WHITECOLLAR", "GREYCOLLAR"];

const MIN_NAME_CHARS: usize = 2;

/// An employee row as read from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Store identifier.
    pub id: u64,
    /// Unique payroll number.
    pub payroll_number: u64,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Plant or site.
    pub plant: String,
    /// Daily pay rate.
    pub daily_salary: Decimal,
    /// Pay cycle the employee is paid on.
    pub payroll_type: PayCycle,
    /// Collar classification: `BLUECOLLAR`, `WHITECOLLAR` or `GREYCOLLAR`.
    pub collar_type: String,
    /// Identifier of the position held.
    #[serde(default)]
    pub position_id: Option<u64>,
}

/// A position row as read from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Store identifier.
    pub id: u64,
    /// Position title.
    pub title: String,
    /// Department owning the position.
    pub department: String,
    /// Daily pay rate offered for the position.
    pub daily_salary: Decimal,
    /// Whether an employee currently holds the position.
    #[serde(default)]
    pub is_filled: bool,
}

impl EmployeeRecord {
    /// Checks the record against the store's write rules.
    ///
    /// Errors name the field as `employees[<id>].<column>`.
    pub fn validate(&self) -> EngineResult<()> {
        let field = |column: &str| format!("employees[{}].{}", self.id, column);

        if self.payroll_number == 0 {
            return Err(EngineError::invalid_input(
                field("payroll_number"),
                "must be a positive integer",
            ));
        }
        check_min_chars(&self.name, || field("name"))?;
        check_code(&self.department, &DEPARTMENTS, || field("department"))?;
        check_code(&self.plant, &PLANTS, || field("plant"))?;
        check_positive(self.daily_salary, || field("daily_salary"))?;
        check_code(&self.collar_type, &COLLAR_TYPES, || field("collar_type"))?;
        if self.position_id == Some(0) {
            return Err(EngineError::invalid_input(
                field("position_id"),
                "must be a positive integer",
            ));
        }
        Ok(())
    }
}

impl PositionRecord {
    /// Checks the record against the store's write rules.
    ///
    /// Errors name the field as `positions[<id>].<column>`.
    pub fn validate(&self) -> EngineResult<()> {
        let field = |column: &str| format!("positions[{}].{}", self.id, column);

        check_min_chars(&self.title, || field("title"))?;
        check_code(&self.department, &DEPARTMENTS, || field("department"))?;
        check_positive(self.daily_salary, || field("daily_salary"))?;
        Ok(())
    }
}

fn check_min_chars(value: &str, field: impl FnOnce() -> String) -> EngineResult<()> {
    if value.chars().count() < MIN_NAME_CHARS {
        return Err(EngineError::invalid_input(
            field(),
            format!("must be at least {} characters", MIN_NAME_CHARS),
        ));
    }
    Ok(())
}

fn check_code(value: &str, allowed: &[&str], field: impl FnOnce() -> String) -> EngineResult<()> {
    if !allowed.contains(&value) {
        return Err(EngineError::invalid_input(
            field(),
            format!("'{}' is not one of {}", value, allowed.join(", ")),
        ));
    }
    Ok(())
}

fn check_positive(value: Decimal, field: impl FnOnce() -> String) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field(),
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}
