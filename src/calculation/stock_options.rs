//! Stock option count calculation functionality.
//!
//! This module converts equity compensation into a whole number of shares at
//! the configured stock price.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the option count calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NumberOfOptionsResult {
    /// Equity compensation divided by the stock price, rounded to a whole share.
    pub count: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the number of options granted for the equity compensation.
///
/// `round(equity_compensation / stock_price)` to a whole share, halves
/// rounding up. The quotient is carried at full `Decimal` precision before
/// the single rounding step.
///
/// # Returns
///
/// Returns a `NumberOfOptionsResult`, or an error if:
/// - `stock_price` is zero (`DivisionByZero`)
/// - the quotient does not fit in a `Decimal` (`CalculationError`)
///
/// # Examples
///
/// ```
/// use equity_swap_calculator::calculation::calculate_number_of_options;
/// use rust_decimal::Decimal;
///
/// let result = calculate_number_of_options(Decimal::from(67725), Decimal::new(114, 1), 5)?;
/// assert_eq!(result.count, Decimal::from(5941));
///
/// assert!(calculate_number_of_options(Decimal::from(67725), Decimal::ZERO, 5).is_err());
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
pub fn calculate_number_of_options(
    equity_compensation: Decimal,
    stock_price: Decimal,
    step_number: u32,
) -> EngineResult<NumberOfOptionsResult> {
    if stock_price.is_zero() {
        return Err(EngineError::DivisionByZero {
            operation: "number_of_options".to_string(),
        });
    }
    let quotient =
        equity_compensation
            .checked_div(stock_price)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "number_of_options overflowed: {} / {}",
                    equity_compensation, stock_price
                ),
            })?;
    let count = quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let audit_step = AuditStep {
        step_number,
        rule_id: "number_of_options".to_string(),
        rule_name: "Number of Options".to_string(),
        formula: "round(equity_compensation / stock_price)".to_string(),
        input: serde_json::json!({
            "equity_compensation": equity_compensation.normalize().to_string(),
            "stock_price": stock_price.normalize().to_string()
        }),
        output: serde_json::json!({
            "number_of_options": count.normalize().to_string()
        }),
        reasoning: format!(
            "${} / ${} per share = {} options",
            equity_compensation.normalize(),
            stock_price.normalize(),
            count.normalize()
        ),
    };

    Ok(NumberOfOptionsResult { count, audit_step })
}
