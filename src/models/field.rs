//! Field identifiers for the calculator inputs.
//!
//! [`SelectionField`] names the three quantities a user picks on the
//! calculator, and [`SettingsField`] names the eleven numbers of the settings
//! bundle. Both carry the storage key and the label used by the
//! presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three user-chosen quantities of the working selection.
///
/// Each quantity is constrained by a bound triple in the settings bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    /// Percentage of potential cash pay converted into equity.
    EquitySwap,
    /// Hours worked per week.
    HoursPerWeek,
    /// Weeks worked per year.
    WeeksPerYear,
}

impl SelectionField {
    /// All selection fields in display order.
    pub const ALL: [SelectionField; 3] = [
        SelectionField::EquitySwap,
        SelectionField::HoursPerWeek,
        SelectionField::WeeksPerYear,
    ];

    /// The key under which the working value is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            SelectionField::EquitySwap => "equitySwap",
            SelectionField::HoursPerWeek => "hoursPerWeek",
            SelectionField::WeeksPerYear => "weeksPerYear",
        }
    }

    /// The question shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            SelectionField::EquitySwap => {
                "How much of your hourly rate would you like to swap for equity?"
            }
            SelectionField::HoursPerWeek => "How many hours per week will you work?",
            SelectionField::WeeksPerYear => "How many weeks a year will you work?",
        }
    }

    /// The unit suffix shown after the value (e.g. `%` or ` hours`).
    pub fn unit_suffix(self) -> &'static str {
        match self {
            SelectionField::EquitySwap => "%",
            SelectionField::HoursPerWeek => " hours",
            SelectionField::WeeksPerYear => " weeks",
        }
    }

    /// The hard upper limit for any value of this quantity.
    ///
    /// Percentages cannot exceed 100, a week has 168 hours and a year has at
    /// most 52 weeks.
    pub fn ceiling(self) -> Decimal {
        match self {
            SelectionField::EquitySwap => Decimal::ONE_HUNDRED,
            SelectionField::HoursPerWeek => Decimal::from(168),
            SelectionField::WeeksPerYear => Decimal::from(52),
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// One part of a bound triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPart {
    /// The lowest selectable value.
    Min,
    /// The highest selectable value.
    Max,
    /// The value used when nothing has been persisted.
    Default,
}

/// One of the eleven numbers that make up the settings bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsField {
    /// Price per share.
    StockPrice,
    /// Pay per hour absent any equity swap.
    HourlyRate,
    /// A part of the bound triple of a selection quantity.
    Bound(SelectionField, BoundPart),
}

impl SettingsField {
    /// All settings fields in the order the options form shows them.
    pub const ALL: [SettingsField; 11] = [
        SettingsField::StockPrice,
        SettingsField::HourlyRate,
        SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Min),
        SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Max),
        SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Default),
        SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Min),
        SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Max),
        SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Default),
        SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Min),
        SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Max),
        SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Default),
    ];

    /// The JSON field name used in the persisted settings record.
    pub fn key(self) -> &'static str {
        use BoundPart::{Default, Max, Min};
        use SelectionField::{EquitySwap, HoursPerWeek, WeeksPerYear};

        match self {
            SettingsField::StockPrice => "stockPrice",
            SettingsField::HourlyRate => "hourlyRate",
            SettingsField::Bound(EquitySwap, Min) => "minEquitySwap",
            SettingsField::Bound(EquitySwap, Max) => "maxEquitySwap",
            SettingsField::Bound(EquitySwap, Default) => "defaultEquitySwap",
            SettingsField::Bound(HoursPerWeek, Min) => "minHoursPerWeek",
            SettingsField::Bound(HoursPerWeek, Max) => "maxHoursPerWeek",
            SettingsField::Bound(HoursPerWeek, Default) => "defaultHoursPerWeek",
            SettingsField::Bound(WeeksPerYear, Min) => "minWeeksPerYear",
            SettingsField::Bound(WeeksPerYear, Max) => "maxWeeksPerYear",
            SettingsField::Bound(WeeksPerYear, Default) => "defaultWeeksPerYear",
        }
    }

    /// The label shown on the options form.
    pub fn label(self) -> &'static str {
        use BoundPart::{Default, Max, Min};
        use SelectionField::{EquitySwap, HoursPerWeek, WeeksPerYear};

        match self {
            SettingsField::StockPrice => "Stock Price",
            SettingsField::HourlyRate => "Hourly Rate",
            SettingsField::Bound(EquitySwap, Min) => "Min Equity Swap",
            SettingsField::Bound(EquitySwap, Max) => "Max Equity Swap",
            SettingsField::Bound(EquitySwap, Default) => "Default Equity Swap",
            SettingsField::Bound(HoursPerWeek, Min) => "Min Hours Per Week",
            SettingsField::Bound(HoursPerWeek, Max) => "Max Hours Per Week",
            SettingsField::Bound(HoursPerWeek, Default) => "Default Hrs/W",
            SettingsField::Bound(WeeksPerYear, Min) => "Min Weeks Per Year",
            SettingsField::Bound(WeeksPerYear, Max) => "Max Weeks Per Year",
            SettingsField::Bound(WeeksPerYear, Default) => "Default W/Y",
        }
    }

    /// Looks up a field by its persisted JSON key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
