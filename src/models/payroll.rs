//! Payroll input, result, and totals models.
//!
//! This module contains the values that flow into and out of the payroll
//! calculator. [`PayrollResult`] is always derived by the calculator so its
//! fields stay internally consistent.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayCycle;

/// A validated request to compute one period of pay.
///
/// Holding a `PayrollInput` proves the daily rate is strictly positive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayCycle, PayrollInput};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::new(100, 0), PayCycle::Weekly).unwrap();
/// assert_eq!(input.daily_rate(), Decimal::new(100, 0));
///
/// assert!(PayrollInput::new(Decimal::ZERO, PayCycle::Weekly).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayrollInput {
    daily_rate: Decimal,
    cycle: PayCycle,
}

impl PayrollInput {
    /// Creates a new input, rejecting non-positive daily rates.
    pub fn new(daily_rate: Decimal, cycle: PayCycle) -> EngineResult<Self> {
        validate_daily_rate(daily_rate)?;
        Ok(Self { daily_rate, cycle })
    }

    /// Creates a new input from a binary float, rejecting NaN and infinities
    /// as well as non-positive values.
    pub fn from_f64(daily_rate: f64, cycle: PayCycle) -> EngineResult<Self> {
        if !daily_rate.is_finite() {
            return Err(EngineError::invalid_input(
                "daily_rate",
                format!("must be a finite number, got {}", daily_rate),
            ));
        }
        let rate = Decimal::from_f64(daily_rate).ok_or_else(|| {
            EngineError::invalid_input(
                "daily_rate",
                format!("{} cannot be represented as a decimal", daily_rate),
            )
        })?;
        Self::new(rate, cycle)
    }

    /// Returns the daily pay rate.
    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    /// Returns the pay cycle.
    pub fn cycle(&self) -> PayCycle {
        self.cycle
    }
}

/// Fails with `InvalidInput` unless the rate is strictly positive.
pub(crate) fn validate_daily_rate(daily_rate: Decimal) -> EngineResult<()> {
    if daily_rate <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "daily_rate",
            format!("must be greater than zero, got {}", daily_rate),
        ));
    }
    Ok(())
}

/// The pay breakdown for exactly one period.
///
/// `net_pay == gross_pay - total_deductions` and
/// `total_deductions == tax_amount + social_security_amount` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Pay before deductions.
    pub gross_pay: Decimal,
    /// Statutory income tax withheld.
    pub tax_amount: Decimal,
    /// Social-security contribution withheld.
    pub social_security_amount: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Pay after deductions.
    pub net_pay: Decimal,
    /// Number of days in the period.
    pub period_days: u32,
}

impl PayrollResult {
    /// Re-checks the breakdown invariants on a result that did not come
    /// straight from the calculator, such as one posted by a client.
    ///
    /// The period must be 7 or 14 days, every amount must be non-negative,
    /// and deductions and net pay must add up exactly.
    pub fn validate(&self) -> EngineResult<()> {
        if !matches!(self.period_days, 7 | 14) {
            return Err(EngineError::invalid_input(
                "period_days",
                format!("must be 7 or 14, got {}", self.period_days),
            ));
        }
        for (field, amount) in [
            ("gross_pay", self.gross_pay),
            ("tax_amount", self.tax_amount),
            ("social_security_amount", self.social_security_amount),
            ("total_deductions", self.total_deductions),
            ("net_pay", self.net_pay),
        ] {
            if amount < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative, got {}", amount),
                ));
            }
        }

        let deductions = self
            .tax_amount
            .checked_add(self.social_security_amount)
            .ok_or_else(|| EngineError::out_of_range("total_deductions"))?;
        if deductions != self.total_deductions {
            return Err(EngineError::invalid_input(
                "total_deductions",
                format!(
                    "must equal tax_amount + social_security_amount ({}), got {}",
                    deductions, self.total_deductions
                ),
            ));
        }
        let net = self
            .gross_pay
            .checked_sub(self.total_deductions)
            .ok_or_else(|| EngineError::out_of_range("net_pay"))?;
        if net != self.net_pay {
            return Err(EngineError::invalid_input(
                "net_pay",
                format!(
                    "must equal gross_pay - total_deductions ({}), got {}",
                    net, self.net_pay
                ),
            ));
        }
        Ok(())
    }
}

/// Totals across a sequence of payroll results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of results summed.
    pub employee_count: usize,
    /// Total gross pay.
    pub gross_pay: Decimal,
    /// Total income tax.
    pub tax_amount: Decimal,
    /// Total social-security contributions.
    pub social_security_amount: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
}

impl PayrollTotals {
    /// Adds one result to the running totals.
    ///
    /// Fails with `InvalidInput` when a running sum would leave the decimal
    /// range; the totals are left unchanged in that case.
    pub fn add(&mut self, result: &PayrollResult) -> EngineResult<()> {
        let sum = |total: Decimal, amount: Decimal, field: &str| {
            total
                .checked_add(amount)
                .ok_or_else(|| EngineError::out_of_range(field))
        };

        let next = Self {
            employee_count: self.employee_count + 1,
            gross_pay: sum(self.gross_pay, result.gross_pay, "gross_pay")?,
            tax_amount: sum(self.tax_amount, result.tax_amount, "tax_amount")?,
            social_security_amount: sum(
                self.social_security_amount,
                result.social_security_amount,
                "social_security_amount",
            )?,
            total_deductions: sum(
                self.total_deductions,
                result.total_deductions,
                "total_deductions",
            )?,
            net_pay: sum(self.net_pay, result.net_pay, "net_pay")?,
        };
        *self = next;
        Ok(())
    }
}
