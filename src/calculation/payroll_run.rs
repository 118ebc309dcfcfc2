//! Payroll runs over a set of employee records.
//!
//! A run computes the period breakdown for every employee on the selected
//! pay cycle and totals the results, which is what the payroll listing view
//! renders.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayCycle, PayrollResult, PayrollTotals};

use super::aggregate::aggregate;
use super::payroll::PayrollCalculator;

/// Selects which employees take part in a payroll run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleFilter {
    /// Every employee, whatever their cycle.
    #[default]
    All,
    /// Only employees paid on the given cycle.
    Only(PayCycle),
}

impl CycleFilter {
    /// Returns true if an employee on `cycle` is included.
    pub fn matches(self, cycle: PayCycle) -> bool {
        match self {
            CycleFilter::All => true,
            CycleFilter::Only(wanted) => wanted == cycle,
        }
    }
}

impl From<Option<PayCycle>> for CycleFilter {
    fn from(cycle: Option<PayCycle>) -> Self {
        cycle.map_or(CycleFilter::All, CycleFilter::Only)
    }
}

/// One employee's row in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// Store identifier of the employee.
    pub employee_id: u64,
    /// Employee name.
    pub name: String,
    /// Employee department.
    pub department: String,
    /// Cycle the employee was paid on.
    pub cycle: PayCycle,
    /// Computed pay breakdown.
    pub result: PayrollResult,
}

/// The outcome of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// One line per included employee, in input order.
    pub lines: Vec<PayrollLine>,
    /// Totals across all lines.
    pub totals: PayrollTotals,
}

/// Computes pay for every employee matching `filter`.
///
/// Every record is first checked with [`EmployeeRecord::validate`], whether
/// or not the filter includes it. Employees are processed in input order and
/// the first invalid record, or the first rate too large to compute, aborts
/// the run; no partial run is returned.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{CycleFilter, PayrollCalculator, run_payroll};
/// use payroll_engine::models::{EmployeeRecord, PayCycle};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: 1,
///     payroll_number: 1001,
///     name: "John Doe".to_string(),
///     department: "ADDIT".to_string(),
///     plant: "PM".to_string(),
///     daily_salary: Decimal::new(100, 0),
///     payroll_type: PayCycle::Weekly,
///     collar_type: "WHITECOLLAR".to_string(),
///     position_id: None,
/// };
///
/// let run = run_payroll(&PayrollCalculator::default(), &[employee], CycleFilter::All).unwrap();
/// assert_eq!(run.totals.gross_pay, Decimal::new(700, 0));
/// ```
pub fn run_payroll(
    calculator: &PayrollCalculator,
    employees: &[EmployeeRecord],
    filter: CycleFilter,
) -> EngineResult<PayrollRun> {
    for employee in employees {
        employee.validate()?;
    }

    let mut lines = Vec::new();
    for employee in employees.iter().filter(|e| filter.matches(e.payroll_type)) {
        let result = calculator
            .compute(employee.daily_salary, employee.payroll_type)
            .map_err(|err| match err {
                EngineError::InvalidInput { message, .. } => EngineError::InvalidInput {
                    field: format!("employees[{}].daily_salary", employee.id),
                    message,
                },
                other => other,
            })?;

        lines.push(PayrollLine {
            employee_id: employee.id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            cycle: employee.payroll_type,
            result,
        });
    }

    let results: Vec<PayrollResult> = lines.iter().map(|line| line.result.clone()).collect();
    let totals = aggregate(&results)?;

    debug!(
        employees = employees.len(),
        included = lines.len(),
        net_pay = %totals.net_pay,
        "Payroll run computed"
    );

    Ok(PayrollRun { lines, totals })
}
