//! The calculator session.
//!
//! A [`CalculatorSession`] owns the current settings bundle and working
//! selection. It validates or clamps every edit, persists it through a
//! [`SettingsStore`] and recomputes results on demand through the engine.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{compute, compute_with_audit};
use crate::error::EngineResult;
use crate::format::{ResultLine, result_lines};
use crate::input::{SELECTION_INPUT_SCALE, SETTINGS_INPUT_SCALE, parse_numeric_input};
use crate::models::{
    CalculationReport, CompensationResult, CompensationSettings, SelectionField, SettingsField,
    WorkingSelection,
};
use crate::store::{KeyValueStore, SettingsStore};

/// Current calculator state bound to a store.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::models::SelectionField;
/// use equity_swap_calculator::session::CalculatorSession;
/// use equity_swap_calculator::store::{MemoryStore, SettingsStore};
/// use rust_decimal::Decimal;
///
/// let mut session = CalculatorSession::open(SettingsStore::new(MemoryStore::new()));
/// session.update_selection(SelectionField::EquitySwap, Decimal::from(50));
///
/// let result = session.result()?;
/// assert_eq!(result.equity_compensation, Decimal::from(67725));
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct CalculatorSession<S> {
    store: SettingsStore<S>,
    settings: CompensationSettings,
    selection: WorkingSelection,
}

impl<S: KeyValueStore> CalculatorSession<S> {
    /// Loads settings and selection from the store.
    pub fn open(store: SettingsStore<S>) -> Self {
        let settings = store.load();
        let selection = store.load_working_selection(&settings);

        info!(
            stock_price = %settings.stock_price,
            hourly_rate = %settings.hourly_rate,
            equity_swap = %selection.equity_swap_percent,
            hours_per_week = %selection.hours_per_week,
            weeks_per_year = %selection.weeks_per_year,
            "Calculator session opened"
        );

        Self {
            store,
            settings,
            selection,
        }
    }

    /// Returns the current settings bundle.
    pub fn settings(&self) -> &CompensationSettings {
        &self.settings
    }

    /// Returns the current working selection.
    pub fn selection(&self) -> &WorkingSelection {
        &self.selection
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    /// Computes the result for the current state.
    pub fn result(&self) -> EngineResult<CompensationResult> {
        compute(&self.settings, &self.selection)
    }

    /// Computes the result for the current state with a full audit trace.
    pub fn report(&self) -> EngineResult<CalculationReport> {
        let report = compute_with_audit(&self.settings, &self.selection)?;
        debug!(
            calculation_id = %report.calculation_id,
            warnings = report.audit_trace.warnings.len(),
            "Calculation report generated"
        );
        Ok(report)
    }

    /// Computes the formatted result rows for the current state.
    pub fn result_lines(&self) -> EngineResult<[ResultLine; 4]> {
        Ok(result_lines(&self.result()?))
    }

    /// Edits one settings field.
    ///
    /// An edit that breaks a settings invariant is rejected and leaves both
    /// the session and the store untouched. An accepted edit is persisted,
    /// and the selection is clamped into the new bounds and persisted too.
    /// Storage failures are logged; the in-memory state is kept.
    pub fn update_setting(&mut self, field: SettingsField, value: Decimal) -> EngineResult<()> {
        let updated = match self.settings.with_field(field, value) {
            Ok(updated) => updated,
            Err(err) => {
                warn!(field = %field, value = %value, error = %err, "Rejected settings edit");
                return Err(err);
            }
        };

        info!(field = %field, value = %value, "Settings field updated");
        self.apply_settings(updated);
        Ok(())
    }

    /// Replaces the whole settings bundle.
    ///
    /// The bundle is validated first; an invalid bundle is rejected.
    pub fn replace_settings(&mut self, settings: CompensationSettings) -> EngineResult<()> {
        if let Err(err) = settings.validate() {
            warn!(error = %err, "Rejected settings bundle");
            return Err(err);
        }

        info!("Settings bundle replaced");
        self.apply_settings(settings);
        Ok(())
    }

    /// Sets one selection field, clamped into its bounds, and persists the
    /// selection. Returns the value actually applied.
    pub fn update_selection(&mut self, field: SelectionField, value: Decimal) -> Decimal {
        let applied = self.settings.bounds(field).clamp(value);
        if applied != value {
            debug!(field = %field, requested = %value, applied = %applied, "Clamped selection edit");
        }

        self.selection.set(field, applied);
        self.persist_selection();
        applied
    }

    /// Parses display text and applies it as a settings edit.
    pub fn update_setting_from_input(&mut self, field: SettingsField, text: &str) -> EngineResult<()> {
        self.update_setting(field, parse_numeric_input(text, "", SETTINGS_INPUT_SCALE))
    }

    /// Parses display text and applies it as a selection edit.
    ///
    /// Only the field's own unit suffix is accepted.
    pub fn update_selection_from_input(&mut self, field: SelectionField, text: &str) -> Decimal {
        let value = parse_numeric_input(text, field.unit_suffix(), SELECTION_INPUT_SCALE);
        self.update_selection(field, value)
    }

    fn apply_settings(&mut self, settings: CompensationSettings) {
        self.settings = settings;
        if let Err(err) = self.store.save(&self.settings) {
            warn!(error = %err, "Failed to persist settings");
        }

        let clamped = self.selection.clamped_to(&self.settings);
        if clamped != self.selection {
            info!(
                out_of_bounds = ?self.selection.out_of_bounds(&self.settings),
                "Clamped selection into updated bounds"
            );
            self.selection = clamped;
        }
        self.persist_selection();
    }

    fn persist_selection(&mut self) {
        if let Err(err) = self.store.save_working_selection(&self.selection) {
            warn!(error = %err, "Failed to persist working selection");
        }
    }
}
