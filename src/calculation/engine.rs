//! The compensation engine.
//!
//! This module chains the individual calculation rules into the full
//! `(settings, selection) -> result` mapping, optionally recording an audit
//! trace of every step.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationReport, CompensationResult,
    CompensationSettings, WorkingSelection,
};

use super::{
    calculate_cash_bonus, calculate_cash_compensation, calculate_cash_pre_equity,
    calculate_equity_compensation, calculate_number_of_options, calculate_total_compensation,
};

/// Computes the derived compensation figures.
///
/// A pure function of its inputs: neither argument is modified and the same
/// inputs always yield the same result. The selection is used as given; the
/// engine does not clamp it to the settings' bounds.
///
/// # Returns
///
/// Returns the `CompensationResult`, or an error if:
/// - the stock price is zero (`DivisionByZero`)
/// - an intermediate product does not fit in a `Decimal` (`CalculationError`)
///
/// # Examples
///
/// ```
/// use equity_swap_calculator::calculation::compute;
/// use equity_swap_calculator::models::{CompensationSettings, WorkingSelection};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = CompensationSettings::default();
/// let mut selection = WorkingSelection::from_defaults(&settings);
/// selection.equity_swap_percent = Decimal::from(50);
///
/// let result = compute(&settings, &selection)?;
/// assert_eq!(result.cash_pre_equity, Decimal::from(135450));
/// assert_eq!(result.equity_compensation, Decimal::from(67725));
/// assert_eq!(result.cash_bonus, Decimal::from_str("25396.875").unwrap());
/// assert_eq!(result.total_compensation, Decimal::from_str("93121.875").unwrap());
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
pub fn compute(
    settings: &CompensationSettings,
    selection: &WorkingSelection,
) -> EngineResult<CompensationResult> {
    run_rules(settings, selection).map(|(result, _)| result)
}

/// Computes the derived figures and records a complete audit trace.
///
/// Besides the six rule steps, the trace carries warnings for a selection
/// lying outside the configured bounds and for an equity swap too small to
/// buy a single option.
pub fn compute_with_audit(
    settings: &CompensationSettings,
    selection: &WorkingSelection,
) -> EngineResult<CalculationReport> {
    let start_time = Instant::now();

    let (result, steps) = run_rules(settings, selection)?;
    let warnings = collect_warnings(settings, selection, &result);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        settings: settings.clone(),
        selection: *selection,
        result,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn run_rules(
    settings: &CompensationSettings,
    selection: &WorkingSelection,
) -> EngineResult<(CompensationResult, Vec<AuditStep>)> {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(6);

    let cash_pre_equity = calculate_cash_pre_equity(
        settings.hourly_rate,
        selection.hours_per_week,
        selection.weeks_per_year,
        1,
    )?;
    steps.push(cash_pre_equity.audit_step);

    let equity = calculate_equity_compensation(
        cash_pre_equity.amount,
        selection.equity_swap_percent,
        2,
    )?;
    steps.push(equity.audit_step);

    let cash = calculate_cash_compensation(cash_pre_equity.amount, equity.amount, 3)?;
    steps.push(cash.audit_step);

    let bonus = calculate_cash_bonus(equity.amount, 4);
    steps.push(bonus.audit_step);

    let options = calculate_number_of_options(equity.amount, settings.stock_price, 5)?;
    steps.push(options.audit_step);

    let total = calculate_total_compensation(cash.amount, bonus.amount, 6)?;
    steps.push(total.audit_step);

    let result = CompensationResult {
        cash_pre_equity: cash_pre_equity.amount,
        equity_compensation: equity.amount,
        cash_compensation: cash.amount,
        cash_bonus: bonus.amount,
        number_of_options: options.count,
        total_compensation: total.amount,
    };

    Ok((result, steps))
}

fn collect_warnings(
    settings: &CompensationSettings,
    selection: &WorkingSelection,
    result: &CompensationResult,
) -> Vec<AuditWarning> {
    let mut warnings: Vec<AuditWarning> = selection
        .out_of_bounds(settings)
        .into_iter()
        .map(|field| {
            let bounds = settings.bounds(field);
            AuditWarning {
                code: "SELECTION_OUT_OF_BOUNDS".to_string(),
                message: format!(
                    "{} {} is outside [{}, {}]",
                    field,
                    selection.get(field).normalize(),
                    bounds.min.normalize(),
                    bounds.max.normalize()
                ),
                severity: "medium".to_string(),
            }
        })
        .collect();

    if result.equity_compensation > Decimal::ZERO && result.number_of_options.is_zero() {
        warnings.push(AuditWarning {
            code: "EQUITY_BELOW_ONE_OPTION".to_string(),
            message: format!(
                "Equity compensation ${} buys less than half an option at ${} per share",
                result.equity_compensation.normalize(),
                settings.stock_price.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
