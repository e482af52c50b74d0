//! Parsing of free-text numeric input.
//!
//! Calculator inputs arrive as display text such as `$11.40`, `1,500` or
//! `35 hours`. This module turns that text into a `Decimal` limited to the
//! field's input scale.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places accepted for settings fields.
pub const SETTINGS_INPUT_SCALE: u32 = 2;

/// Decimal places accepted for working-selection fields.
pub const SELECTION_INPUT_SCALE: u32 = 0;

/// Parses display text into a number with at most `scale` decimal places.
///
/// A leading `$`, thousands separators and a trailing `suffix` (the field's
/// own unit, such as `%` or ` hours`) are ignored. Any other unit makes the
/// text unparsable. Extra decimal places are cut off. Empty or unparsable
/// text yields zero.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::input::parse_numeric_input;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_numeric_input("$1,250.509", "", 2), Decimal::new(125050, 2));
/// assert_eq!(parse_numeric_input("35 hours", " hours", 0), Decimal::from(35));
/// assert_eq!(parse_numeric_input("35%", " hours", 0), Decimal::ZERO);
/// assert_eq!(parse_numeric_input("", "", 2), Decimal::ZERO);
/// ```
pub fn parse_numeric_input(text: &str, suffix: &str, scale: u32) -> Decimal {
    let mut body = text.trim();

    if let Some(stripped) = body.strip_suffix(suffix.trim()) {
        body = stripped.trim_end();
    }

    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, body),
    };
    let body = body.strip_prefix('$').unwrap_or(body);

    let digits: String = body.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    let value = match Decimal::from_str(&digits) {
        Ok(value) => value,
        Err(_) => return Decimal::ZERO,
    };
    let value = if negative { -value } else { value };

    value.round_dp_with_strategy(scale, RoundingStrategy::ToZero)
}
