//! The user's working selection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationSettings, SelectionField};

/// The three values currently chosen on the calculator.
///
/// Each value is expected to lie within the matching bounds of the
/// [`CompensationSettings`]; [`WorkingSelection::clamped_to`] restores that
/// property after the bounds change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingSelection {
    /// Percentage of potential cash pay swapped for equity.
    pub equity_swap_percent: Decimal,
    /// Hours worked per week.
    pub hours_per_week: Decimal,
    /// Weeks worked per year.
    pub weeks_per_year: Decimal,
}

impl WorkingSelection {
    /// Builds a selection from the default of each bound triple.
    ///
    /// # Example
    ///
    /// ```
    /// use equity_swap_calculator::models::{CompensationSettings, WorkingSelection};
    /// use rust_decimal::Decimal;
    ///
    /// let selection = WorkingSelection::from_defaults(&CompensationSettings::default());
    /// assert_eq!(selection.hours_per_week, Decimal::from(21));
    /// assert_eq!(selection.weeks_per_year, Decimal::from(43));
    /// ```
    pub fn from_defaults(settings: &CompensationSettings) -> Self {
        Self {
            equity_swap_percent: settings.equity_swap.default,
            hours_per_week: settings.hours_per_week.default,
            weeks_per_year: settings.weeks_per_year.default,
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, field: SelectionField) -> Decimal {
        match field {
            SelectionField::EquitySwap => self.equity_swap_percent,
            SelectionField::HoursPerWeek => self.hours_per_week,
            SelectionField::WeeksPerYear => self.weeks_per_year,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: SelectionField, value: Decimal) {
        match field {
            SelectionField::EquitySwap => self.equity_swap_percent = value,
            SelectionField::HoursPerWeek => self.hours_per_week = value,
            SelectionField::WeeksPerYear => self.weeks_per_year = value,
        }
    }

    /// Returns a copy with every field clamped into the settings' bounds.
    pub fn clamped_to(&self, settings: &CompensationSettings) -> Self {
        let mut clamped = *self;
        for field in SelectionField::ALL {
            clamped.set(field, settings.bounds(field).clamp(self.get(field)));
        }
        clamped
    }

    /// Returns the fields whose values lie outside the settings' bounds.
    pub fn out_of_bounds(&self, settings: &CompensationSettings) -> Vec<SelectionField> {
        SelectionField::ALL
            .into_iter()
            .filter(|field| !settings.bounds(*field).contains(self.get(*field)))
            .collect()
    }
}
