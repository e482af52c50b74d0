//! Calculation result models for the Equity Swap Calculator.
//!
//! This module contains the [`CompensationResult`] type holding the derived
//! figures, and the [`CalculationReport`] that wraps a result together with
//! its inputs and a complete audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompensationSettings, WorkingSelection};

/// The derived compensation figures.
///
/// Results are recomputed from the settings and working selection on every
/// change and are never persisted.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::models::CompensationResult;
/// use rust_decimal::Decimal;
///
/// let result = CompensationResult {
///     cash_pre_equity: Decimal::from(135450),
///     equity_compensation: Decimal::ZERO,
///     cash_compensation: Decimal::from(135450),
///     cash_bonus: Decimal::ZERO,
///     number_of_options: Decimal::ZERO,
///     total_compensation: Decimal::from(135450),
/// };
/// assert_eq!(result.total_compensation, result.cash_pre_equity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Total pay before any conversion to equity.
    pub cash_pre_equity: Decimal,
    /// Value of the pay swapped for equity, rounded to a whole currency unit.
    pub equity_compensation: Decimal,
    /// Pay remaining in cash after the swap.
    pub cash_compensation: Decimal,
    /// Bonus paid to cover the cost of exercising the options.
    pub cash_bonus: Decimal,
    /// Equity compensation expressed as a whole number of shares.
    pub number_of_options: Decimal,
    /// Cash compensation plus cash bonus.
    pub total_compensation: Decimal,
}

/// A single step in the audit trace recording a calculation rule.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The formula the rule evaluates.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs or outcomes that don't prevent calculation
/// but may surprise the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A calculation result together with its inputs and audit trace.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::calculation::compute_with_audit;
/// use equity_swap_calculator::models::{CompensationSettings, WorkingSelection};
///
/// let settings = CompensationSettings::default();
/// let selection = WorkingSelection::from_defaults(&settings);
///
/// let report = compute_with_audit(&settings, &selection)?;
/// assert_eq!(report.audit_trace.steps.len(), 6);
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The settings bundle the calculation read.
    pub settings: CompensationSettings,
    /// The working selection the calculation read.
    pub selection: WorkingSelection,
    /// The derived figures.
    pub result: CompensationResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
