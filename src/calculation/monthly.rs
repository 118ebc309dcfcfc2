//! Salary-basis payroll helpers.
//!
//! The payroll entry flow works from a monthly base salary rather than a
//! weekly or biweekly period. These helpers are deliberately separate from
//! [`super::compute`]: the 30-day multiplier has nothing to do with pay
//! cycle length.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::validate_daily_rate;

/// Number of days a monthly base salary is projected over.
pub const MONTHLY_PROJECTION_DAYS: u32 = 30;

/// Projects a daily rate onto a 30-day monthly base salary.
///
/// Fails with `InvalidInput` for a non-positive rate or one whose monthly
/// projection leaves the decimal range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::project_monthly;
/// use rust_decimal::Decimal;
///
/// assert_eq!(project_monthly(Decimal::new(100, 0)).unwrap(), Decimal::new(3000, 0));
/// ```
pub fn project_monthly(daily_rate: Decimal) -> EngineResult<Decimal> {
    validate_daily_rate(daily_rate)?;
    daily_rate
        .checked_mul(Decimal::from(MONTHLY_PROJECTION_DAYS))
        .ok_or_else(|| EngineError::out_of_range("daily_rate"))
}

/// Computes the net pay of a salary-basis entry:
/// `(base_salary + bonuses) - (deductions + taxes)`.
///
/// Every component must be non-negative. The result may be negative when
/// withholdings exceed salary; callers decide whether to accept that.
pub fn entry_net_pay(
    base_salary: Decimal,
    deductions: Decimal,
    taxes: Decimal,
    bonuses: Decimal,
) -> EngineResult<Decimal> {
    for (field, value) in [
        ("base_salary", base_salary),
        ("deductions", deductions),
        ("taxes", taxes),
        ("bonuses", bonuses),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                field,
                format!("must not be negative, got {}", value),
            ));
        }
    }
    let earned = base_salary
        .checked_add(bonuses)
        .ok_or_else(|| EngineError::out_of_range("bonuses"))?;
    let withheld = deductions
        .checked_add(taxes)
        .ok_or_else(|| EngineError::out_of_range("taxes"))?;
    earned
        .checked_sub(withheld)
        .ok_or_else(|| EngineError::out_of_range("net_pay"))
}
