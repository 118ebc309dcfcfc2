//! Dashboard statistics and workforce reports.
//!
//! These summarize employee and position records for the dashboard and
//! reports views. Breakdowns use `BTreeMap` so output ordering is stable.
//! Every record is validated before it is counted.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayCycle, PositionRecord};

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of employees on record.
    pub total_employees: usize,
    /// Number of positions on record.
    pub total_positions: usize,
    /// Positions currently held.
    pub filled_positions: usize,
    /// Positions currently vacant.
    pub open_positions: usize,
    /// Share of positions filled, as a whole percentage.
    pub fill_rate_percent: Decimal,
    /// Sum of all employees' daily rates.
    pub total_daily_payroll: Decimal,
}

/// Breakdown of the workforce for the reports view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceReport {
    /// Number of employees on record.
    pub total_employees: usize,
    /// Number of positions on record.
    pub total_positions: usize,
    /// Head count per department.
    pub by_department: BTreeMap<String, usize>,
    /// Head count per plant.
    pub by_plant: BTreeMap<String, usize>,
    /// Head count per pay cycle.
    pub by_pay_cycle: BTreeMap<PayCycle, usize>,
    /// Head count per collar type.
    pub by_collar_type: BTreeMap<String, usize>,
    /// Sum of all employees' daily rates.
    pub total_daily_payroll: Decimal,
    /// Mean daily rate, zero when there are no employees.
    pub average_daily_rate: Decimal,
}

/// Computes the dashboard figures.
///
/// # Example
///
/// ```
/// use payroll_engine::reports::dashboard_stats;
///
/// let stats = dashboard_stats(&[], &[]).unwrap();
/// assert_eq!(stats.total_employees, 0);
/// assert!(stats.fill_rate_percent.is_zero());
/// ```
pub fn dashboard_stats(
    employees: &[EmployeeRecord],
    positions: &[PositionRecord],
) -> EngineResult<DashboardStats> {
    validate_records(employees, positions)?;
    let total_daily_payroll = total_daily_payroll(employees)?;

    let filled_positions = positions.iter().filter(|p| p.is_filled).count();
    let fill_rate_percent = if positions.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(filled_positions) * Decimal::ONE_HUNDRED / Decimal::from(positions.len()))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };

    Ok(DashboardStats {
        total_employees: employees.len(),
        total_positions: positions.len(),
        filled_positions,
        open_positions: positions.len() - filled_positions,
        fill_rate_percent,
        total_daily_payroll,
    })
}

/// Computes the workforce breakdown report.
pub fn workforce_report(
    employees: &[EmployeeRecord],
    positions: &[PositionRecord],
) -> EngineResult<WorkforceReport> {
    validate_records(employees, positions)?;

    let mut by_department = BTreeMap::new();
    let mut by_plant = BTreeMap::new();
    let mut by_pay_cycle = BTreeMap::new();
    let mut by_collar_type = BTreeMap::new();

    for employee in employees {
        *by_department.entry(employee.department.clone()).or_insert(0) += 1;
        *by_plant.entry(employee.plant.clone()).or_insert(0) += 1;
        *by_pay_cycle.entry(employee.payroll_type).or_insert(0) += 1;
        *by_collar_type.entry(employee.collar_type.clone()).or_insert(0) += 1;
    }

    let total_daily_payroll = total_daily_payroll(employees)?;
    let average_daily_rate = if employees.is_empty() {
        Decimal::ZERO
    } else {
        total_daily_payroll / Decimal::from(employees.len())
    };

    Ok(WorkforceReport {
        total_employees: employees.len(),
        total_positions: positions.len(),
        by_department,
        by_plant,
        by_pay_cycle,
        by_collar_type,
        total_daily_payroll,
        average_daily_rate,
    })
}

fn validate_records(employees: &[EmployeeRecord], positions: &[PositionRecord]) -> EngineResult<()> {
    employees.iter().try_for_each(EmployeeRecord::validate)?;
    positions.iter().try_for_each(PositionRecord::validate)
}

fn total_daily_payroll(employees: &[EmployeeRecord]) -> EngineResult<Decimal> {
    employees.iter().try_fold(Decimal::ZERO, |total, e| {
        total
            .checked_add(e.daily_salary)
            .ok_or_else(|| EngineError::out_of_range("total_daily_payroll"))
    })
}
