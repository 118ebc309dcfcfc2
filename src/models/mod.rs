//! Core data models for the payroll engine.
//!
//! This module contains the domain values shared by the payroll calculator,
//! the role authorizer, and the reporting layer.

mod audit;
mod pay_cycle;
mod payroll;
mod payroll_entry;
mod records;
mod role;

pub use audit::AuditStep;
pub use pay_cycle::PayCycle;
pub use payroll::{PayrollInput, PayrollResult, PayrollTotals};
pub(crate) use payroll::validate_daily_rate;
pub use payroll_entry::{EntryStatus, PayrollEntry};
pub use records::{COLLAR_TYPES, DEPARTMENTS, EmployeeRecord, PLANTS, PositionRecord};
pub use role::{PageKey, Role};
