//! Property tests for the payroll calculator and role authorizer.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::authorization::{Decision, authorize_request, is_authorized, page_for_path};
use payroll_engine::calculation::{aggregate, compute, project_monthly};
use payroll_engine::error::EngineError;
use payroll_engine::models::{PageKey, PayCycle, PayrollResult, Role};

/// Daily rates from 0.01 to 100,000.00 in whole cents.
fn daily_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Daily rates near the top of the decimal range, where period amounts
/// overflow for at least one cycle.
fn huge_rate() -> impl Strategy<Value = Decimal> {
    (1u32..=1_000).prop_map(|divisor| Decimal::MAX / Decimal::from(divisor))
}

fn cycle() -> impl Strategy<Value = PayCycle> {
    prop_oneof![Just(PayCycle::Weekly), Just(PayCycle::Biweekly)]
}

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn path() -> impl Strategy<Value = String> {
    let known = prop::sample::select(vec![
        "/",
        "/dashboard",
        "/employees",
        "/positions",
        "/payroll",
        "/reports",
        "/applicants",
        "/login",
        "/unauthorized",
    ]);
    (known, "[a-z0-9]{0,6}").prop_map(|(base, tail)| {
        if tail.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base.trim_end_matches('/'), tail)
        }
    })
}

proptest! {
    #[test]
    fn prop_result_is_internally_consistent(rate in daily_rate(), cycle in cycle()) {
        let result = compute(rate, cycle).unwrap();

        prop_assert_eq!(result.gross_pay, rate * Decimal::from(result.period_days));
        prop_assert_eq!(
            result.total_deductions,
            result.tax_amount + result.social_security_amount
        );
        prop_assert_eq!(
            result.net_pay,
            result.gross_pay - (result.tax_amount + result.social_security_amount)
        );
        prop_assert!(result.net_pay > Decimal::ZERO);
        prop_assert!(result.tax_amount >= Decimal::ZERO);
        prop_assert!(result.social_security_amount >= Decimal::ZERO);
    }

    #[test]
    fn prop_biweekly_is_twice_weekly(rate in daily_rate()) {
        let weekly = compute(rate, PayCycle::Weekly).unwrap();
        let biweekly = compute(rate, PayCycle::Biweekly).unwrap();

        prop_assert_eq!(biweekly.gross_pay, weekly.gross_pay * Decimal::TWO);
        prop_assert_eq!(biweekly.net_pay, weekly.net_pay * Decimal::TWO);
    }

    #[test]
    fn prop_compute_is_idempotent(rate in daily_rate(), cycle in cycle()) {
        prop_assert_eq!(compute(rate, cycle).unwrap(), compute(rate, cycle).unwrap());
    }

    #[test]
    fn prop_non_positive_rate_is_rejected(cents in -10_000_000i64..=0, cycle in cycle()) {
        prop_assert!(compute(Decimal::new(cents, 2), cycle).is_err());
    }

    #[test]
    fn prop_aggregate_is_additive(
        inputs in prop::collection::vec((daily_rate(), cycle()), 0..20)
    ) {
        let results: Vec<PayrollResult> = inputs
            .iter()
            .map(|(rate, cycle)| compute(*rate, *cycle).unwrap())
            .collect();
        let totals = aggregate(&results).unwrap();

        let net: Decimal = results.iter().map(|r| r.net_pay).sum();
        let gross: Decimal = results.iter().map(|r| r.gross_pay).sum();
        prop_assert_eq!(totals.net_pay, net);
        prop_assert_eq!(totals.gross_pay, gross);
        prop_assert_eq!(totals.net_pay, totals.gross_pay - totals.total_deductions);
        prop_assert_eq!(totals.employee_count, results.len());
    }

    #[test]
    fn prop_monthly_projection_is_thirty_days(rate in daily_rate()) {
        prop_assert_eq!(project_monthly(rate).unwrap(), rate * Decimal::from(30));
    }

    #[test]
    fn prop_huge_rate_never_panics(rate in huge_rate(), cycle in cycle()) {
        match compute(rate, cycle) {
            Ok(result) => {
                prop_assert_eq!(
                    result.net_pay,
                    result.gross_pay - (result.tax_amount + result.social_security_amount)
                );
            }
            Err(err) => prop_assert_eq!(err, EngineError::out_of_range("daily_rate")),
        }
        match project_monthly(rate) {
            Ok(monthly) => prop_assert_eq!(monthly, rate * Decimal::from(30)),
            Err(err) => prop_assert_eq!(err, EngineError::out_of_range("daily_rate")),
        }
    }

    #[test]
    fn prop_aggregate_of_huge_results_never_panics(
        divisor in 15u32..=60,
        count in 1usize..8,
    ) {
        let result = compute(Decimal::MAX / Decimal::from(divisor), PayCycle::Biweekly).unwrap();
        let results = vec![result; count];
        match aggregate(&results) {
            Ok(totals) => prop_assert_eq!(totals.employee_count, count),
            Err(err) => {
                let is_invalid_input = matches!(err, EngineError::InvalidInput { .. });
                prop_assert!(is_invalid_input);
            }
        }
    }

    #[test]
    fn prop_authorize_is_idempotent(role in role(), path in path()) {
        prop_assert_eq!(
            authorize_request(Some(role), &path),
            authorize_request(Some(role), &path)
        );
    }

    #[test]
    fn prop_absent_role_always_denied(path in path()) {
        prop_assert_eq!(authorize_request(None, &path), Decision::Deny);
    }

    #[test]
    fn prop_decision_agrees_with_policy(role in role(), path in path()) {
        let decision = authorize_request(Some(role), &path);
        match page_for_path(&path) {
            None => prop_assert_eq!(decision, Decision::Allow),
            Some(page) if is_authorized(role, page) => prop_assert_eq!(decision, Decision::Allow),
            Some(_) => prop_assert_eq!(
                decision,
                Decision::RedirectTo { path: "/unauthorized".to_string() }
            ),
        }
    }

    #[test]
    fn prop_admin_never_redirected(path in path()) {
        prop_assert_eq!(authorize_request(Some(Role::Admin), &path), Decision::Allow);
    }
}

#[test]
fn test_every_role_can_reach_dashboard() {
    for role in Role::ALL {
        assert!(is_authorized(role, PageKey::Dashboard));
    }
}

#[test]
fn test_rates_at_the_edge_of_the_decimal_range() {
    assert_eq!(
        compute(Decimal::MAX, PayCycle::Weekly).unwrap_err(),
        EngineError::out_of_range("daily_rate")
    );
    assert_eq!(
        compute(Decimal::MAX / Decimal::TWO, PayCycle::Biweekly).unwrap_err(),
        EngineError::out_of_range("daily_rate")
    );
    assert_eq!(
        project_monthly(Decimal::MAX / Decimal::TEN).unwrap_err(),
        EngineError::out_of_range("daily_rate")
    );

    let near_max = compute(Decimal::MAX / Decimal::from(20), PayCycle::Biweekly).unwrap();
    assert!(aggregate(&[near_max.clone()]).is_ok());
    assert!(aggregate(&[near_max.clone(), near_max]).is_err());
}
