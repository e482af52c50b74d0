//! Cash pre-equity calculation functionality.
//!
//! This module computes the annual pay a user would earn if none of it were
//! swapped for equity.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the cash pre-equity calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CashPreEquityResult {
    /// Annual pay before any conversion to equity.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates annual pay before any equity swap.
///
/// `hourly_rate x hours_per_week x weeks_per_year`, multiplied exactly with
/// no intermediate rounding.
///
/// # Arguments
///
/// * `hourly_rate` - Pay per hour
/// * `hours_per_week` - Hours worked per week
/// * `weeks_per_year` - Weeks worked per year
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `CashPreEquityResult`, or `CalculationError` if the product does
/// not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use equity_swap_calculator::calculation::calculate_cash_pre_equity;
/// use rust_decimal::Decimal;
///
/// let result = calculate_cash_pre_equity(
///     Decimal::from(150),
///     Decimal::from(21),
///     Decimal::from(43),
///     1,
/// )?;
/// assert_eq!(result.amount, Decimal::from(135450));
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
pub fn calculate_cash_pre_equity(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
    step_number: u32,
) -> EngineResult<CashPreEquityResult> {
    let amount = hourly_rate
        .checked_mul(hours_per_week)
        .and_then(|weekly| weekly.checked_mul(weeks_per_year))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "cash_pre_equity overflowed: {} x {} x {}",
                hourly_rate, hours_per_week, weeks_per_year
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cash_pre_equity".to_string(),
        rule_name: "Cash Pre-Equity".to_string(),
        formula: "hourly_rate x hours_per_week x weeks_per_year".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "weeks_per_year": weeks_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "cash_pre_equity": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} hours x {} weeks = ${}",
            hourly_rate.normalize(),
            hours_per_week.normalize(),
            weeks_per_year.normalize(),
            amount.normalize()
        ),
    };

    Ok(CashPreEquityResult { amount, audit_step })
}
