//! Settings persistence.
//!
//! The [`SettingsStore`] reads and writes the settings bundle and the three
//! working-selection scalars. Reads never fail: anything missing or malformed
//! is replaced by the matching default and logged.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationSettings, SelectionField, WorkingSelection};

use super::KeyValueStore;

/// The key under which the settings bundle is persisted.
pub const SETTINGS_KEY: &str = "compensationOptions";

/// How persisted selection values are reconciled with the current bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionLoadPolicy {
    /// Clamp each loaded value into its bounds.
    #[default]
    Clamp,
    /// Keep loaded values as stored, even outside the bounds.
    Preserve,
}

/// Persists the settings bundle and working selection over a [`KeyValueStore`].
///
/// # Persisted layout
///
/// ```text
/// compensationOptions  JSON object with the eleven numeric settings fields
/// equitySwap           decimal as text
/// hoursPerWeek         decimal as text
/// weeksPerYear         decimal as text
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    backend: S,
    policy: SelectionLoadPolicy,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Creates a store that clamps loaded selections.
    pub fn new(backend: S) -> Self {
        Self::with_policy(backend, SelectionLoadPolicy::default())
    }

    /// Creates a store with an explicit selection load policy.
    pub fn with_policy(backend: S, policy: SelectionLoadPolicy) -> Self {
        Self { backend, policy }
    }

    /// Returns the selection load policy.
    pub fn policy(&self) -> SelectionLoadPolicy {
        self.policy
    }

    /// Returns the underlying key/value store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Loads the settings bundle.
    ///
    /// Returns the built-in default bundle if nothing is stored, the stored
    /// record cannot be read or parsed, or it breaks a settings invariant.
    pub fn load(&self) -> CompensationSettings {
        match self.read_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!(key = SETTINGS_KEY, "No stored settings, using defaults");
                CompensationSettings::default()
            }
            Err(err) => {
                warn!(key = SETTINGS_KEY, error = %err, "Stored settings unusable, using defaults");
                CompensationSettings::default()
            }
        }
    }

    /// Persists the full settings bundle, replacing any previous bundle.
    pub fn save(&mut self, settings: &CompensationSettings) -> EngineResult<()> {
        let json = serde_json::to_string(settings).map_err(|e| EngineError::StorageWrite {
            key: SETTINGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.backend.set(SETTINGS_KEY, &json)?;
        debug!(key = SETTINGS_KEY, "Settings saved");
        Ok(())
    }

    /// Loads the working selection.
    ///
    /// Each of the three values falls back to the bundle default when it is
    /// missing or unparsable. Values are then clamped into the current bounds
    /// unless the policy is [`SelectionLoadPolicy::Preserve`].
    pub fn load_working_selection(&self, settings: &CompensationSettings) -> WorkingSelection {
        let mut selection = WorkingSelection::from_defaults(settings);

        for field in SelectionField::ALL {
            match self.read_scalar(field) {
                Ok(Some(value)) => selection.set(field, value),
                Ok(None) => {}
                Err(err) => {
                    warn!(key = field.storage_key(), error = %err, "Stored value unusable, using default");
                }
            }
        }

        match self.policy {
            SelectionLoadPolicy::Clamp => {
                let clamped = selection.clamped_to(settings);
                if clamped != selection {
                    info!(
                        out_of_bounds = ?selection.out_of_bounds(settings),
                        "Clamped stored selection into current bounds"
                    );
                }
                clamped
            }
            SelectionLoadPolicy::Preserve => selection,
        }
    }

    /// Persists the three working-selection values, each under its own key.
    pub fn save_working_selection(&mut self, selection: &WorkingSelection) -> EngineResult<()> {
        for field in SelectionField::ALL {
            let value = selection.get(field).normalize().to_string();
            self.backend.set(field.storage_key(), &value)?;
        }
        debug!(
            equity_swap = %selection.equity_swap_percent,
            hours_per_week = %selection.hours_per_week,
            weeks_per_year = %selection.weeks_per_year,
            "Working selection saved"
        );
        Ok(())
    }

    fn read_settings(&self) -> EngineResult<Option<CompensationSettings>> {
        let Some(raw) = self.backend.get(SETTINGS_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| EngineError::StorageRead {
                key: SETTINGS_KEY.to_string(),
                message: e.to_string(),
            })
    }

    fn read_scalar(&self, field: SelectionField) -> EngineResult<Option<Decimal>> {
        let key = field.storage_key();
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| EngineError::StorageRead {
                key: key.to_string(),
                message: format!("'{}' is not a number: {}", trimmed, e),
            })?;

        let ceiling = field.ceiling();
        if value < Decimal::ZERO || value > ceiling {
            return Err(EngineError::StorageRead {
                key: key.to_string(),
                message: format!(
                    "{} is outside [0, {}]",
                    value.normalize(),
                    ceiling.normalize()
                ),
            });
        }

        Ok(Some(value))
    }
}
