//! Cash bonus calculation functionality.
//!
//! The cash bonus is a fixed supplement on equity compensation that offsets
//! the tax and exercise cost of the options.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The cash bonus multiplier applied to equity compensation (37.5%).
pub const CASH_BONUS_RATE: Decimal = Decimal::from_parts(375, 0, 0, false, 3);

/// The result of the cash bonus calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CashBonusResult {
    /// The bonus amount, unrounded.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the cash bonus paid on top of equity compensation.
///
/// `equity_compensation x 0.375`. The result keeps its full precision;
/// rounding is left to display formatting.
///
/// # Examples
///
/// ```
/// use equity_swap_calculator::calculation::calculate_cash_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_cash_bonus(Decimal::from(67725), 4);
/// assert_eq!(result.amount, Decimal::from_str("25396.875").unwrap());
/// ```
pub fn calculate_cash_bonus(equity_compensation: Decimal, step_number: u32) -> CashBonusResult {
    let amount = equity_compensation * CASH_BONUS_RATE;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cash_bonus".to_string(),
        rule_name: "Cash Bonus".to_string(),
        formula: "equity_compensation x 0.375".to_string(),
        input: serde_json::json!({
            "equity_compensation": equity_compensation.normalize().to_string(),
            "rate": CASH_BONUS_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "cash_bonus": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            equity_compensation.normalize(),
            CASH_BONUS_RATE.normalize(),
            amount.normalize()
        ),
    };

    CashBonusResult { amount, audit_step }
}
