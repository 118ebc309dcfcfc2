//! Calculation logic for the payroll engine.
//!
//! This module contains the period payroll calculator, aggregation of
//! results into totals, payroll runs over employee records, and the
//! salary-basis helpers used by the payroll entry flow.

mod aggregate;
mod monthly;
mod payroll;
mod payroll_run;

pub use aggregate::aggregate;
pub use monthly::{MONTHLY_PROJECTION_DAYS, entry_net_pay, project_monthly};
pub use payroll::{
    PayrollCalculator, STATUTORY_SOCIAL_SECURITY_RATE, STATUTORY_TAX_RATE, StatutoryRates,
    compute, round_currency,
};
pub use payroll_run::{CycleFilter, PayrollLine, PayrollRun, run_payroll};
