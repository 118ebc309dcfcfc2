//! Period payroll computation.
//!
//! This module converts a daily pay rate and a pay cycle into a full pay
//! breakdown for one period: gross pay, statutory income tax, social
//! security, and net pay. All arithmetic is exact decimal arithmetic; no
//! rounding happens inside the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PayCycle, PayrollInput, PayrollResult};

/// The statutory income tax rate (16%).
pub const STATUTORY_TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// The statutory social-security contribution rate (7.25%).
pub const STATUTORY_SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(725, 0, 0, false, 4);

/// The deduction rates applied to gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Fraction of gross pay withheld as income tax.
    pub tax_rate: Decimal,
    /// Fraction of gross pay withheld as social security.
    pub social_security_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            tax_rate: STATUTORY_TAX_RATE,
            social_security_rate: STATUTORY_SOCIAL_SECURITY_RATE,
        }
    }
}

impl StatutoryRates {
    /// Checks that each rate lies in `[0, 1)` and that together they stay
    /// below 1, so net pay can never go negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, rate) in [
            ("tax_rate", self.tax_rate),
            ("social_security_rate", self.social_security_rate),
        ] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(EngineError::InvalidRates {
                    message: format!("{} must be in [0, 1), got {}", name, rate),
                });
            }
        }
        if self.tax_rate + self.social_security_rate >= Decimal::ONE {
            return Err(EngineError::InvalidRates {
                message: format!(
                    "combined rate {} leaves no net pay",
                    self.tax_rate + self.social_security_rate
                ),
            });
        }
        Ok(())
    }
}

/// A payroll calculator bound to a set of statutory rates.
///
/// The default calculator uses the statutory 16% tax and 7.25% social
/// security rates. Calculators are immutable; a rate change means building
/// a new calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayrollCalculator {
    rates: StatutoryRates,
}

impl PayrollCalculator {
    /// Creates a calculator with the given rates, validating them first.
    pub fn with_rates(rates: StatutoryRates) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Returns the rates this calculator applies.
    pub fn rates(&self) -> StatutoryRates {
        self.rates
    }

    /// Computes one period of pay.
    ///
    /// Fails with `InvalidInput` if `daily_rate` is not strictly positive or
    /// is so large that the period amounts leave the decimal range.
    pub fn compute(&self, daily_rate: Decimal, cycle: PayCycle) -> EngineResult<PayrollResult> {
        let input = PayrollInput::new(daily_rate, cycle)?;
        self.compute_input(&input)
    }

    /// Computes one period of pay from an already validated input.
    pub fn compute_input(&self, input: &PayrollInput) -> EngineResult<PayrollResult> {
        let out_of_range = || EngineError::out_of_range("daily_rate");

        let period_days = input.cycle().period_days();
        let gross_pay = input
            .daily_rate()
            .checked_mul(Decimal::from(period_days))
            .ok_or_else(out_of_range)?;
        let tax_amount = gross_pay
            .checked_mul(self.rates.tax_rate)
            .ok_or_else(out_of_range)?;
        let social_security_amount = gross_pay
            .checked_mul(self.rates.social_security_rate)
            .ok_or_else(out_of_range)?;
        let total_deductions = tax_amount
            .checked_add(social_security_amount)
            .ok_or_else(out_of_range)?;
        let net_pay = gross_pay
            .checked_sub(total_deductions)
            .ok_or_else(out_of_range)?;

        Ok(PayrollResult {
            gross_pay,
            tax_amount,
            social_security_amount,
            total_deductions,
            net_pay,
            period_days,
        })
    }

    /// Computes one period of pay along with an audit trail of every step.
    pub fn compute_with_audit(
        &self,
        daily_rate: Decimal,
        cycle: PayCycle,
    ) -> EngineResult<(PayrollResult, Vec<AuditStep>)> {
        let input = PayrollInput::new(daily_rate, cycle)?;
        let result = self.compute_input(&input)?;
        let steps = audit_steps(&input, &result, &self.rates);
        Ok((result, steps))
    }
}

/// Computes one period of pay at the statutory rates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute;
/// use payroll_engine::models::PayCycle;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute(Decimal::new(100, 0), PayCycle::Weekly).unwrap();
/// assert_eq!(result.period_days, 7);
/// assert_eq!(result.gross_pay, Decimal::new(700, 0));
/// assert_eq!(result.net_pay, Decimal::from_str("537.25").unwrap());
/// ```
pub fn compute(daily_rate: Decimal, cycle: PayCycle) -> EngineResult<PayrollResult> {
    PayrollCalculator::default().compute(daily_rate, cycle)
}

/// Rounds a currency amount to cents using banker's rounding.
///
/// Intended for display layers only; calculator outputs are never rounded.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

fn audit_steps(
    input: &PayrollInput,
    result: &PayrollResult,
    rates: &StatutoryRates,
) -> Vec<AuditStep> {
    let rate = input.daily_rate().normalize();
    let gross = result.gross_pay.normalize();

    vec![
        AuditStep {
            step_number: 1,
            rule_id: "period_days".to_string(),
            rule_name: "Period Length".to_string(),
            input: serde_json::json!({ "cycle": input.cycle().as_str() }),
            output: serde_json::json!({ "period_days": result.period_days }),
            reasoning: format!("{} cycle = {} days", input.cycle(), result.period_days),
        },
        AuditStep {
            step_number: 2,
            rule_id: "gross_pay".to_string(),
            rule_name: "Gross Pay".to_string(),
            input: serde_json::json!({
                "daily_rate": rate.to_string(),
                "period_days": result.period_days
            }),
            output: serde_json::json!({ "gross_pay": gross.to_string() }),
            reasoning: format!("${} x {} days = ${}", rate, result.period_days, gross),
        },
        AuditStep {
            step_number: 3,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            input: serde_json::json!({
                "gross_pay": gross.to_string(),
                "rate": rates.tax_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "tax_amount": result.tax_amount.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} = ${}",
                gross,
                rates.tax_rate.normalize(),
                result.tax_amount.normalize()
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "social_security".to_string(),
            rule_name: "Social Security".to_string(),
            input: serde_json::json!({
                "gross_pay": gross.to_string(),
                "rate": rates.social_security_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "social_security_amount": result.social_security_amount.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} = ${}",
                gross,
                rates.social_security_rate.normalize(),
                result.social_security_amount.normalize()
            ),
        },
        AuditStep {
            step_number: 5,
            rule_id: "net_pay".to_string(),
            rule_name: "Net Pay".to_string(),
            input: serde_json::json!({
                "gross_pay": gross.to_string(),
                "total_deductions": result.total_deductions.normalize().to_string()
            }),
            output: serde_json::json!({ "net_pay": result.net_pay.normalize().to_string() }),
            reasoning: format!(
                "${} - ${} = ${}",
                gross,
                result.total_deductions.normalize(),
                result.net_pay.normalize()
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_weekly_breakdown() {
        let result = compute(dec("100"), PayCycle::Weekly).unwrap();

        assert_eq!(result.period_days, 7);
        assert_eq!(result.gross_pay, dec("700"));
        assert_eq!(result.tax_amount, dec("112"));
        assert_eq!(result.social_security_amount, dec("50.75"));
        assert_eq!(result.total_deductions, dec("162.75"));
        assert_eq!(result.net_pay, dec("537.25"));
    }

    #[test]
    fn test_biweekly_breakdown() {
        let result = compute(dec("100"), PayCycle::Biweekly).unwrap();

        assert_eq!(result.period_days, 14);
        assert_eq!(result.gross_pay, dec("1400"));
        assert_eq!(result.tax_amount, dec("224"));
        assert_eq!(result.social_security_amount, dec("101.5"));
        assert_eq!(result.total_deductions, dec("325.5"));
        assert_eq!(result.net_pay, dec("1074.5"));
    }

    #[test]
    fn test_fractional_rate_is_exact() {
        let result = compute(dec("85.33"), PayCycle::Weekly).unwrap();

        assert_eq!(result.gross_pay, dec("597.31"));
        assert_eq!(result.tax_amount, dec("95.5696"));
        assert_eq!(result.social_security_amount, dec("43.304975"));
        assert_eq!(
            result.net_pay,
            result.gross_pay - (result.tax_amount + result.social_security_amount)
        );
    }

    #[test]
    fn test_zero_rate_is_invalid() {
        let err = compute(Decimal::ZERO, PayCycle::Weekly).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_rate_is_invalid() {
        let err = compute(dec("-5"), PayCycle::Weekly).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_rate_overflowing_gross_pay_is_invalid() {
        let huge = Decimal::MAX / Decimal::TWO;

        let err = compute(huge, PayCycle::Biweekly).unwrap_err();
        assert_eq!(err, EngineError::out_of_range("daily_rate"));

        let err = compute(Decimal::MAX, PayCycle::Weekly).unwrap_err();
        assert_eq!(err, EngineError::out_of_range("daily_rate"));
    }

    #[test]
    fn test_audit_rejects_rate_out_of_range() {
        let err = PayrollCalculator::default()
            .compute_with_audit(Decimal::MAX / Decimal::TWO, PayCycle::Weekly)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "daily_rate"));
    }

    #[test]
    fn test_largest_representable_period_still_computes() {
        // MAX / 14 keeps the biweekly gross just inside the range.
        let rate = (Decimal::MAX / Decimal::from(14)).trunc();
        let result = compute(rate, PayCycle::Biweekly).unwrap();

        assert_eq!(result.gross_pay, rate * Decimal::from(14));
        assert_eq!(
            result.net_pay,
            result.gross_pay - (result.tax_amount + result.social_security_amount)
        );
    }

    #[test]
    fn test_default_rates_are_statutory() {
        let rates = StatutoryRates::default();
        assert_eq!(rates.tax_rate, dec("0.16"));
        assert_eq!(rates.social_security_rate, dec("0.0725"));
    }

    #[test]
    fn test_custom_rates_apply() {
        let calculator = PayrollCalculator::with_rates(StatutoryRates {
            tax_rate: dec("0.10"),
            social_security_rate: dec("0.05"),
        })
        .unwrap();

        let result = calculator.compute(dec("100"), PayCycle::Weekly).unwrap();
        assert_eq!(result.tax_amount, dec("70"));
        assert_eq!(result.social_security_amount, dec("35"));
        assert_eq!(result.net_pay, dec("595"));
    }

    #[test]
    fn test_rates_out_of_range_rejected() {
        let negative = StatutoryRates {
            tax_rate: dec("-0.01"),
            social_security_rate: dec("0.05"),
        };
        assert!(matches!(
            PayrollCalculator::with_rates(negative),
            Err(EngineError::InvalidRates { .. })
        ));

        let combined = StatutoryRates {
            tax_rate: dec("0.6"),
            social_security_rate: dec("0.4"),
        };
        assert!(matches!(
            PayrollCalculator::with_rates(combined),
            Err(EngineError::InvalidRates { .. })
        ));
    }

    #[test]
    fn test_audit_trail_records_each_step() {
        let (result, steps) = PayrollCalculator::default()
            .compute_with_audit(dec("100"), PayCycle::Weekly)
            .unwrap();

        assert_eq!(result.net_pay, dec("537.25"));
        let ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["period_days", "gross_pay", "income_tax", "social_security", "net_pay"]
        );
        assert_eq!(steps[1].reasoning, "$100 x 7 days = $700");
        assert_eq!(steps[2].output["tax_amount"], "112");
        assert_eq!(steps[3].output["social_security_amount"], "50.75");
        assert_eq!(steps[4].reasoning, "$700 - $162.75 = $537.25");
    }

    #[test]
    fn test_audit_rejects_invalid_rate() {
        assert!(
            PayrollCalculator::default()
                .compute_with_audit(Decimal::ZERO, PayCycle::Biweekly)
                .is_err()
        );
    }

    #[test]
    fn test_round_currency_uses_bankers_rounding() {
        assert_eq!(round_currency(dec("43.304975")), dec("43.30"));
        assert_eq!(round_currency(dec("0.125")), dec("0.12"));
        assert_eq!(round_currency(dec("0.135")), dec("0.14"));
    }
}
