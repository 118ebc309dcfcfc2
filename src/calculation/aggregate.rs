//! Aggregation of payroll results.

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollResult, PayrollTotals};

/// Sums a sequence of payroll results into period totals.
///
/// Accumulation runs left to right in slice order so repeated calls over
/// the same slice always produce identical decimals. An empty slice yields
/// zero totals.
///
/// Each result is re-checked with [`PayrollResult::validate`] before it is
/// summed, since results may arrive from outside the calculator. Errors name
/// the offending row, e.g. `results[2].net_pay`. A sum that would leave the
/// decimal range fails with `InvalidInput` as well.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate, compute};
/// use payroll_engine::models::PayCycle;
/// use rust_decimal::Decimal;
///
/// let results = vec![
///     compute(Decimal::new(100, 0), PayCycle::Weekly).unwrap(),
///     compute(Decimal::new(200, 0), PayCycle::Weekly).unwrap(),
/// ];
/// let totals = aggregate(&results).unwrap();
/// assert_eq!(totals.employee_count, 2);
/// assert_eq!(totals.gross_pay, Decimal::new(2100, 0));
/// ```
pub fn aggregate(results: &[PayrollResult]) -> EngineResult<PayrollTotals> {
    results
        .iter()
        .enumerate()
        .try_fold(PayrollTotals::default(), |mut totals, (index, result)| {
            match result.validate().and_then(|()| totals.add(result)) {
                Ok(()) => Ok(totals),
                Err(err) => Err(in_row(index, err)),
            }
        })
}

fn in_row(index: usize, err: EngineError) -> EngineError {
    match err {
        EngineError::InvalidInput { field, message } => EngineError::InvalidInput {
            field: format!("results[{}].{}", index, field),
            message,
        },
        other => other,
    }
}
