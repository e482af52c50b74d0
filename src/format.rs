//! Display formatting for calculation results.
//!
//! Currency figures are shown with a leading `$`, thousands separators and
//! exactly two decimal places; share counts with thousands separators and no
//! decimal places. Half-way values round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::CompensationResult;

/// Suffix appended to every displayed result row.
pub const PER_YEAR_SUFFIX: &str = " / year";

/// Formats a currency amount, e.g. `$93,121.88` or `-$1,234.50`.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(93121875, 3)), "$93,121.88");
/// assert_eq!(format_currency(Decimal::new(-12345, 1)), "-$1,234.50");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Formats a share count, e.g. `5,941`.
pub fn format_share_count(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.0}", rounded.abs());
    format!("{}{}", sign, group_thousands(&text))
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One displayed row of the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    /// Row caption.
    pub label: &'static str,
    /// Formatted figure.
    pub value: String,
    /// Text after the figure.
    pub suffix: &'static str,
}

/// Builds the four result rows in display order.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::calculation::compute;
/// use equity_swap_calculator::format::result_lines;
/// use equity_swap_calculator::models::{CompensationSettings, WorkingSelection};
///
/// let settings = CompensationSettings::default();
/// let result = compute(&settings, &WorkingSelection::from_defaults(&settings))?;
/// let lines = result_lines(&result);
///
/// assert_eq!(lines[3].label, "Total Compensation");
/// assert_eq!(lines[3].value, "$135,450.00");
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
pub fn result_lines(result: &CompensationResult) -> [ResultLine; 4] {
    [
        ResultLine {
            label: "Stock Options",
            value: format_share_count(result.number_of_options),
            suffix: PER_YEAR_SUFFIX,
        },
        ResultLine {
            label: "Cash",
            value: format_currency(result.cash_compensation),
            suffix: PER_YEAR_SUFFIX,
        },
        ResultLine {
            label: "Cash bonus to exercise options",
            value: format_currency(result.cash_bonus),
            suffix: PER_YEAR_SUFFIX,
        },
        ResultLine {
            label: "Total Compensation",
            value: format_currency(result.total_compensation),
            suffix: PER_YEAR_SUFFIX,
        },
    ]
}
