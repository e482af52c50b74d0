//! Core data models for the Equity Swap Calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod bounds;
mod calculation_result;
mod field;
mod selection;
mod settings;

pub use bounds::Bounds;
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationReport, CompensationResult,
};
pub use field::{BoundPart, SelectionField, SettingsField};
pub use selection::WorkingSelection;
pub use settings::{CompensationSettings, MAX_AMOUNT};
