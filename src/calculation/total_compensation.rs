//! Total compensation calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the total compensation calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalCompensationResult {
    /// Cash compensation plus cash bonus.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates total annual compensation paid in cash.
///
/// `cash_compensation + cash_bonus`, exact.
pub fn calculate_total_compensation(
    cash_compensation: Decimal,
    cash_bonus: Decimal,
    step_number: u32,
) -> EngineResult<TotalCompensationResult> {
    let amount = cash_compensation
        .checked_add(cash_bonus)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "total_compensation overflowed: {} + {}",
                cash_compensation, cash_bonus
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_compensation".to_string(),
        rule_name: "Total Compensation".to_string(),
        formula: "cash_compensation + cash_bonus".to_string(),
        input: serde_json::json!({
            "cash_compensation": cash_compensation.normalize().to_string(),
            "cash_bonus": cash_bonus.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_compensation": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} = ${}",
            cash_compensation.normalize(),
            cash_bonus.normalize(),
            amount.normalize()
        ),
    };

    Ok(TotalCompensationResult { amount, audit_step })
}
