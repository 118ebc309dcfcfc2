//! Audit trail records for payroll calculations.

use serde::{Deserialize, Serialize};

/// A single step in a calculation audit trail.
///
/// Each step captures one rule that was applied, what went in, what came
/// out, and a human-readable explanation. Payroll views show these so an
/// operator can reconcile a pay breakdown line by line.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "gross_pay".to_string(),
///     rule_name: "Gross Pay".to_string(),
///     input: serde_json::json!({"daily_rate": "100", "period_days": 7}),
///     output: serde_json::json!({"gross_pay": "700"}),
///     reasoning: "$100 x 7 days = $700".to_string(),
/// };
/// assert_eq!(step.rule_id, "gross_pay");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of this step in the trail, starting at 1.
    pub step_number: u32,
    /// Machine-readable identifier of the applied rule.
    pub rule_id: String,
    /// Display name of the applied rule.
    pub rule_name: String,
    /// Values the rule consumed.
    pub input: serde_json::Value,
    /// Values the rule produced.
    pub output: serde_json::Value,
    /// Explanation of the arithmetic performed.
    pub reasoning: String,
}
