//! Request types for the payroll engine API.
//!
//! Cycles arrive as plain strings and are parsed by the engine, so an
//! unsupported cycle is reported as an `INVALID_INPUT` error rather than a
//! JSON decoding failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::CycleFilter;
use crate::error::EngineResult;
use crate::models::{EmployeeRecord, PayCycle, PayrollResult, PositionRecord};

/// Request body for `POST /payroll/compute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Daily pay rate.
    pub daily_rate: Decimal,
    /// Pay cycle name (`weekly`, `biweekly`, or a legacy payroll-type code).
    pub cycle: String,
}

impl ComputeRequest {
    /// Parses the requested cycle.
    pub fn pay_cycle(&self) -> EngineResult<PayCycle> {
        self.cycle.parse()
    }
}

/// Request body for `POST /payroll/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Results to total, in order.
    pub results: Vec<PayrollResult>,
}

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// Employee records to pay.
    pub employees: Vec<EmployeeRecord>,
    /// Restrict the run to one cycle; all cycles when absent.
    #[serde(default)]
    pub cycle: Option<String>,
}

impl RunRequest {
    /// Parses the optional cycle into a filter.
    pub fn filter(&self) -> EngineResult<CycleFilter> {
        let cycle = self
            .cycle
            .as_deref()
            .map(str::parse::<PayCycle>)
            .transpose()?;
        Ok(cycle.into())
    }
}

/// Request body for `POST /payroll/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRequest {
    /// Daily pay rate.
    pub daily_rate: Decimal,
}

/// Request body for `POST /authorize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    /// The path the user is navigating to.
    pub path: String,
}

/// Request body for the report endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Employee records.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    /// Position records.
    #[serde(default)]
    pub positions: Vec<PositionRecord>,
}
