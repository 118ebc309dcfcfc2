//! Salary-basis payroll entries.
//!
//! Entries are recorded by payroll clerks against a 30-day monthly base
//! salary. They are independent of the weekly/biweekly period breakdown
//! produced by [`crate::calculation::compute`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{entry_net_pay, project_monthly};
use crate::error::{EngineError, EngineResult};

/// Approval state of a payroll entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Recorded but not yet reviewed.
    Pending,
    /// Reviewed and approved for payment.
    Approved,
    /// Paid out.
    Paid,
}

/// A single salary-basis payroll entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Entry identifier.
    pub id: u64,
    /// Employee the entry pays.
    pub employee_id: u64,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Non-tax deductions.
    pub deductions: Decimal,
    /// Taxes withheld.
    pub taxes: Decimal,
    /// Bonuses added on top of the base salary.
    pub bonuses: Decimal,
    /// Net amount payable.
    pub net_pay: Decimal,
    /// Entry date.
    pub date: NaiveDate,
    /// Approval state.
    pub status: EntryStatus,
}

impl PayrollEntry {
    /// Builds a pending entry whose base salary is projected from a daily rate.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::{EntryStatus, PayrollEntry};
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let entry = PayrollEntry::draft(1, 42, Decimal::new(100, 0), date).unwrap();
    /// assert_eq!(entry.base_salary, Decimal::new(3000, 0));
    /// assert_eq!(entry.net_pay, Decimal::new(3000, 0));
    /// assert_eq!(entry.status, EntryStatus::Pending);
    /// ```
    pub fn draft(
        id: u64,
        employee_id: u64,
        daily_rate: Decimal,
        date: NaiveDate,
    ) -> EngineResult<Self> {
        let base_salary = project_monthly(daily_rate)?;
        Ok(Self {
            id,
            employee_id,
            base_salary,
            deductions: Decimal::ZERO,
            taxes: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            net_pay: base_salary,
            date,
            status: EntryStatus::Pending,
        })
    }

    /// Recomputes `net_pay` from the entry's salary components.
    pub fn recalculate(&mut self) -> EngineResult<Decimal> {
        self.net_pay = entry_net_pay(self.base_salary, self.deductions, self.taxes, self.bonuses)?;
        Ok(self.net_pay)
    }

    /// Moves the entry one step forward: pending to approved, approved to paid.
    pub fn advance(&mut self) -> EngineResult<EntryStatus> {
        self.status = match self.status {
            EntryStatus::Pending => EntryStatus::Approved,
            EntryStatus::Approved => EntryStatus::Paid,
            EntryStatus::Paid => {
                return Err(EngineError::invalid_input(
                    "status",
                    format!("entry {} is already paid", self.id),
                ));
            }
        };
        Ok(self.status)
    }
}
