//! Equity swap calculation functionality.
//!
//! This module splits the cash pre-equity amount into the part swapped for
//! equity and the part that stays in cash.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the equity compensation calculation.
#[derive(Debug, Clone)]
pub struct EquityCompensationResult {
    /// Value swapped for equity, rounded to a whole currency unit.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the cash compensation calculation.
#[derive(Debug, Clone)]
pub struct CashCompensationResult {
    /// Pay remaining in cash after the swap.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the value of pay swapped for equity.
///
/// `round(cash_pre_equity x equity_swap_percent / 100)` to 0 decimal places.
/// Halves round up (away from zero). This is the only rounding applied to
/// the equity amount.
///
/// # Examples
///
/// ```
/// use equity_swap_calculator::calculation::calculate_equity_compensation;
/// use rust_decimal::Decimal;
///
/// let result = calculate_equity_compensation(Decimal::from(135450), Decimal::from(50), 2)?;
/// assert_eq!(result.amount, Decimal::from(67725));
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
pub fn calculate_equity_compensation(
    cash_pre_equity: Decimal,
    equity_swap_percent: Decimal,
    step_number: u32,
) -> EngineResult<EquityCompensationResult> {
    let fraction = equity_swap_percent / Decimal::ONE_HUNDRED;
    let unrounded =
        cash_pre_equity
            .checked_mul(fraction)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "equity_compensation overflowed: {} x {}%",
                    cash_pre_equity, equity_swap_percent
                ),
            })?;
    let amount = unrounded.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let audit_step = AuditStep {
        step_number,
        rule_id: "equity_compensation".to_string(),
        rule_name: "Equity Compensation".to_string(),
        formula: "round(cash_pre_equity x equity_swap_percent / 100)".to_string(),
        input: serde_json::json!({
            "cash_pre_equity": cash_pre_equity.normalize().to_string(),
            "equity_swap_percent": equity_swap_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "unrounded": unrounded.normalize().to_string(),
            "equity_compensation": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {}% = ${}, rounded to ${}",
            cash_pre_equity.normalize(),
            equity_swap_percent.normalize(),
            unrounded.normalize(),
            amount.normalize()
        ),
    };

    Ok(EquityCompensationResult { amount, audit_step })
}

/// Calculates the pay that stays in cash.
///
/// `cash_pre_equity - equity_compensation`, exact.
pub fn calculate_cash_compensation(
    cash_pre_equity: Decimal,
    equity_compensation: Decimal,
    step_number: u32,
) -> EngineResult<CashCompensationResult> {
    let amount = cash_pre_equity
        .checked_sub(equity_compensation)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "cash_compensation overflowed: {} - {}",
                cash_pre_equity, equity_compensation
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cash_compensation".to_string(),
        rule_name: "Cash Compensation".to_string(),
        formula: "cash_pre_equity - equity_compensation".to_string(),
        input: serde_json::json!({
            "cash_pre_equity": cash_pre_equity.normalize().to_string(),
            "equity_compensation": equity_compensation.normalize().to_string()
        }),
        output: serde_json::json!({
            "cash_compensation": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            cash_pre_equity.normalize(),
            equity_compensation.normalize(),
            amount.normalize()
        ),
    };

    Ok(CashCompensationResult { amount, audit_step })
}
