//! The compensation settings bundle.
//!
//! This module defines [`CompensationSettings`], the named bundle of prices,
//! rates and bound triples the user configures on the options form, together
//! with its persisted record layout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{BoundPart, Bounds, SelectionField, SettingsField};

/// Largest accepted stock price or hourly rate.
///
/// With the selection ceilings, every engine product stays within `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// The configuration bundle driving the calculator.
///
/// Serializes to the flat eleven-field JSON record persisted under
/// `compensationOptions`. Deserialization validates the bundle, so a record
/// with out-of-order bounds or a zero stock price is rejected rather than
/// silently loaded.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::models::CompensationSettings;
/// use rust_decimal::Decimal;
///
/// let settings = CompensationSettings::default();
/// assert_eq!(settings.hourly_rate, Decimal::from(150));
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord", into = "SettingsRecord")]
pub struct CompensationSettings {
    /// Price per share.
    pub stock_price: Decimal,
    /// Pay per hour absent any equity swap.
    pub hourly_rate: Decimal,
    /// Bounds for the equity swap percentage.
    pub equity_swap: Bounds,
    /// Bounds for the hours worked per week.
    pub hours_per_week: Bounds,
    /// Bounds for the weeks worked per year.
    pub weeks_per_year: Bounds,
}

impl Default for CompensationSettings {
    /// The built-in bundle used when nothing valid has been persisted.
    fn default() -> Self {
        Self {
            stock_price: Decimal::new(114, 1),
            hourly_rate: Decimal::from(150),
            equity_swap: Bounds::new(Decimal::ZERO, Decimal::from(80), Decimal::ZERO),
            hours_per_week: Bounds::new(Decimal::from(10), Decimal::from(35), Decimal::from(21)),
            weeks_per_year: Bounds::new(Decimal::from(20), Decimal::from(44), Decimal::from(43)),
        }
    }
}

impl CompensationSettings {
    /// Returns the bound triple for a selection quantity.
    pub fn bounds(&self, field: SelectionField) -> &Bounds {
        match field {
            SelectionField::EquitySwap => &self.equity_swap,
            SelectionField::HoursPerWeek => &self.hours_per_week,
            SelectionField::WeeksPerYear => &self.weeks_per_year,
        }
    }

    fn bounds_mut(&mut self, field: SelectionField) -> &mut Bounds {
        match field {
            SelectionField::EquitySwap => &mut self.equity_swap,
            SelectionField::HoursPerWeek => &mut self.hours_per_week,
            SelectionField::WeeksPerYear => &mut self.weeks_per_year,
        }
    }

    /// Returns the current value of a settings field.
    pub fn get(&self, field: SettingsField) -> Decimal {
        match field {
            SettingsField::StockPrice => self.stock_price,
            SettingsField::HourlyRate => self.hourly_rate,
            SettingsField::Bound(quantity, part) => self.bounds(quantity).get(part),
        }
    }

    /// Returns a copy of the bundle with one field replaced.
    ///
    /// The edit is rejected, and `self` left untouched, if:
    /// - the stock price or hourly rate is not strictly positive, or exceeds
    ///   [`MAX_AMOUNT`] (`InvalidValue`)
    /// - a bound part is negative or above the quantity's ceiling (`InvalidValue`)
    /// - the edit breaks `min <= default <= max` (`InvalidBounds`)
    ///
    /// # Example
    ///
    /// ```
    /// use equity_swap_calculator::models::{BoundPart, CompensationSettings, SelectionField, SettingsField};
    /// use rust_decimal::Decimal;
    ///
    /// let settings = CompensationSettings::default();
    /// let field = SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Max);
    ///
    /// let edited = settings.with_field(field, Decimal::from(40))?;
    /// assert_eq!(edited.hours_per_week.max, Decimal::from(40));
    ///
    /// // max below the default is refused
    /// assert!(settings.with_field(field, Decimal::from(5)).is_err());
    /// # Ok::<(), equity_swap_calculator::error::EngineError>(())
    /// ```
    pub fn with_field(&self, field: SettingsField, value: Decimal) -> EngineResult<Self> {
        let mut updated = self.clone();
        match field {
            SettingsField::StockPrice => {
                require_positive(field, value)?;
                updated.stock_price = value;
            }
            SettingsField::HourlyRate => {
                require_positive(field, value)?;
                updated.hourly_rate = value;
            }
            SettingsField::Bound(quantity, part) => {
                require_within_domain(field, quantity, value)?;
                let bounds = self
                    .bounds(quantity)
                    .with_part(part, value)
                    .map_err(|message| EngineError::InvalidBounds {
                        field: field.key().to_string(),
                        message,
                    })?;
                *updated.bounds_mut(quantity) = bounds;
            }
        }
        Ok(updated)
    }

    /// Checks every invariant of the bundle.
    pub fn validate(&self) -> EngineResult<()> {
        require_positive(SettingsField::StockPrice, self.stock_price)?;
        require_positive(SettingsField::HourlyRate, self.hourly_rate)?;

        for quantity in SelectionField::ALL {
            let bounds = self.bounds(quantity);
            for part in [BoundPart::Min, BoundPart::Max, BoundPart::Default] {
                require_within_domain(
                    SettingsField::Bound(quantity, part),
                    quantity,
                    bounds.get(part),
                )?;
            }
            if !bounds.is_ordered() {
                return Err(EngineError::InvalidBounds {
                    field: quantity.storage_key().to_string(),
                    message: format!(
                        "expected min <= default <= max, got {} <= {} <= {}",
                        bounds.min.normalize(),
                        bounds.default.normalize(),
                        bounds.max.normalize()
                    ),
                });
            }
        }

        Ok(())
    }
}

fn require_positive(field: SettingsField, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidValue {
            field: field.key().to_string(),
            message: format!("must be greater than zero, got {}", value.normalize()),
        });
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::InvalidValue {
            field: field.key().to_string(),
            message: format!(
                "must not exceed {}, got {}",
                MAX_AMOUNT.normalize(),
                value.normalize()
            ),
        });
    }
    Ok(())
}

fn require_within_domain(
    field: SettingsField,
    quantity: SelectionField,
    value: Decimal,
) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidValue {
            field: field.key().to_string(),
            message: format!("must not be negative, got {}", value.normalize()),
        });
    }
    let ceiling = quantity.ceiling();
    if value > ceiling {
        return Err(EngineError::InvalidValue {
            field: field.key().to_string(),
            message: format!(
                "must not exceed {}, got {}",
                ceiling.normalize(),
                value.normalize()
            ),
        });
    }
    Ok(())
}

/// The flat record persisted under `compensationOptions`.
///
/// Decimals are written as JSON numbers carrying their exact digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRecord {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    stock_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    min_equity_swap: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    max_equity_swap: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    default_equity_swap: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    min_hours_per_week: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    max_hours_per_week: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    default_hours_per_week: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    min_weeks_per_year: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    max_weeks_per_year: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    default_weeks_per_year: Decimal,
}

impl From<CompensationSettings> for SettingsRecord {
    fn from(settings: CompensationSettings) -> Self {
        SettingsRecord {
            stock_price: settings.stock_price,
            hourly_rate: settings.hourly_rate,
            min_equity_swap: settings.equity_swap.min,
            max_equity_swap: settings.equity_swap.max,
            default_equity_swap: settings.equity_swap.default,
            min_hours_per_week: settings.hours_per_week.min,
            max_hours_per_week: settings.hours_per_week.max,
            default_hours_per_week: settings.hours_per_week.default,
            min_weeks_per_year: settings.weeks_per_year.min,
            max_weeks_per_year: settings.weeks_per_year.max,
            default_weeks_per_year: settings.weeks_per_year.default,
        }
    }
}

impl TryFrom<SettingsRecord> for CompensationSettings {
    type Error = EngineError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        let settings = CompensationSettings {
            stock_price: record.stock_price,
            hourly_rate: record.hourly_rate,
            equity_swap: Bounds::new(
                record.min_equity_swap,
                record.max_equity_swap,
                record.default_equity_swap,
            ),
            hours_per_week: Bounds::new(
                record.min_hours_per_week,
                record.max_hours_per_week,
                record.default_hours_per_week,
            ),
            weeks_per_year: Bounds::new(
                record.min_weeks_per_year,
                record.max_weeks_per_year,
                record.default_weeks_per_year,
            ),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const DEFAULT_RECORD: &str = r#"{
        "stockPrice": 11.4,
        "hourlyRate": 150,
        "minEquitySwap": 0,
        "maxEquitySwap": 80,
        "defaultEquitySwap": 0,
        "minHoursPerWeek": 10,
        "maxHoursPerWeek": 35,
        "defaultHoursPerWeek": 21,
        "minWeeksPerYear": 20,
        "maxWeeksPerYear": 44,
        "defaultWeeksPerYear": 43
    }"#;

    #[test]
    fn test_default_bundle_values() {
        let settings = CompensationSettings::default();
        assert_eq!(settings.stock_price, dec("11.4"));
        assert_eq!(settings.hourly_rate, dec("150"));
        assert_eq!(settings.equity_swap, Bounds::new(dec("0"), dec("80"), dec("0")));
        assert_eq!(settings.hours_per_week, Bounds::new(dec("10"), dec("35"), dec("21")));
        assert_eq!(settings.weeks_per_year, Bounds::new(dec("20"), dec("44"), dec("43")));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_deserialize_record_with_numeric_fields() {
        let settings: CompensationSettings = serde_json::from_str(DEFAULT_RECORD).unwrap();
        assert_eq!(settings, CompensationSettings::default());
    }

    #[test]
    fn test_serialize_writes_flat_numeric_record() {
        let json = serde_json::to_string(&CompensationSettings::default()).unwrap();
        assert!(json.contains("\"stockPrice\":11.4"));
        assert!(json.contains("\"hourlyRate\":150"));
        assert!(json.contains("\"minEquitySwap\":0"));
        assert!(json.contains("\"maxEquitySwap\":80"));
        assert!(json.contains("\"defaultHoursPerWeek\":21"));
        assert!(json.contains("\"defaultWeeksPerYear\":43"));
    }

    #[test]
    fn test_record_preserves_exact_decimals() {
        let settings = CompensationSettings {
            stock_price: dec("0.1"),
            hourly_rate: dec("123.45"),
            ..CompensationSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"stockPrice\":0.1"));
        assert!(json.contains("\"hourlyRate\":123.45"));

        let restored: CompensationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_deserialize_rejects_out_of_order_bounds() {
        let json = DEFAULT_RECORD.replace("\"defaultHoursPerWeek\": 21", "\"defaultHoursPerWeek\": 50");
        let result: Result<CompensationSettings, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_stock_price() {
        let json = DEFAULT_RECORD.replace("\"stockPrice\": 11.4", "\"stockPrice\": 0");
        let result: Result<CompensationSettings, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = DEFAULT_RECORD.replace("\"hourlyRate\": 150,", "");
        let result: Result<CompensationSettings, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_field_updates_stock_price() {
        let settings = CompensationSettings::default();
        let updated = settings.with_field(SettingsField::StockPrice, dec("12.5")).unwrap();
        assert_eq!(updated.stock_price, dec("12.5"));
        assert_eq!(settings.stock_price, dec("11.4"));
    }

    #[test]
    fn test_with_field_rejects_zero_stock_price() {
        let settings = CompensationSettings::default();
        let result = settings.with_field(SettingsField::StockPrice, Decimal::ZERO);
        match result {
            Err(EngineError::InvalidValue { field, .. }) => assert_eq!(field, "stockPrice"),
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_field_rejects_negative_hourly_rate() {
        let settings = CompensationSettings::default();
        let result = settings.with_field(SettingsField::HourlyRate, dec("-1"));
        assert!(matches!(result, Err(EngineError::InvalidValue { .. })));
    }

    #[test]
    fn test_with_field_rejects_out_of_order_bound() {
        let settings = CompensationSettings::default();
        let field = SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Min);
        match settings.with_field(field, dec("44")) {
            Err(EngineError::InvalidBounds { field, message }) => {
                assert_eq!(field, "minWeeksPerYear");
                assert_eq!(message, "min 44 exceeds default 43");
            }
            other => panic!("Expected InvalidBounds error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_field_rejects_weeks_above_52() {
        let settings = CompensationSettings::default();
        let field = SettingsField::Bound(SelectionField::WeeksPerYear, BoundPart::Max);
        match settings.with_field(field, dec("53")) {
            Err(EngineError::InvalidValue { field, message }) => {
                assert_eq!(field, "maxWeeksPerYear");
                assert_eq!(message, "must not exceed 52, got 53");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_field_rejects_hours_above_a_week() {
        let settings = CompensationSettings::default();
        let field = SettingsField::Bound(SelectionField::HoursPerWeek, BoundPart::Max);
        assert!(settings.with_field(field, dec("168")).is_ok());
        match settings.with_field(field, dec("169")) {
            Err(EngineError::InvalidValue { message, .. }) => {
                assert_eq!(message, "must not exceed 168, got 169");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_field_caps_hourly_rate() {
        let settings = CompensationSettings::default();
        assert!(settings.with_field(SettingsField::HourlyRate, MAX_AMOUNT).is_ok());
        match settings.with_field(SettingsField::HourlyRate, dec("1e27")) {
            Err(EngineError::InvalidValue { field, message }) => {
                assert_eq!(field, "hourlyRate");
                assert!(message.starts_with("must not exceed 1000000000000"));
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_record_with_oversized_rate_is_rejected() {
        let json = DEFAULT_RECORD.replace("\"hourlyRate\": 150", "\"hourlyRate\": 79000000000000000000000000000");
        let result: Result<CompensationSettings, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_field_rejects_equity_above_100() {
        let settings = CompensationSettings::default();
        let field = SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Max);
        assert!(settings.with_field(field, dec("100")).is_ok());
        assert!(settings.with_field(field, dec("100.5")).is_err());
    }

    #[test]
    fn test_with_field_rejects_negative_bound() {
        let settings = CompensationSettings::default();
        let field = SettingsField::Bound(SelectionField::EquitySwap, BoundPart::Min);
        assert!(matches!(
            settings.with_field(field, dec("-5")),
            Err(EngineError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_get_reads_every_field() {
        let settings = CompensationSettings::default();
        let values: Vec<Decimal> = SettingsField::ALL.iter().map(|f| settings.get(*f)).collect();
        assert_eq!(
            values,
            vec![
                dec("11.4"),
                dec("150"),
                dec("0"),
                dec("80"),
                dec("0"),
                dec("10"),
                dec("35"),
                dec("21"),
                dec("20"),
                dec("44"),
                dec("43"),
            ]
        );
    }
}
