//! Bound triples for the selectable quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BoundPart;

/// A `{min, max, default}` triple constraining one selection quantity.
///
/// A well-formed triple satisfies `min <= default <= max`. Edits go through
/// [`Bounds::with_part`], which refuses to produce an out-of-order triple.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::models::Bounds;
/// use rust_decimal::Decimal;
///
/// let hours = Bounds::new(Decimal::from(10), Decimal::from(35), Decimal::from(21));
/// assert!(hours.is_ordered());
/// assert_eq!(hours.clamp(Decimal::from(40)), Decimal::from(35));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// The lowest selectable value.
    pub min: Decimal,
    /// The highest selectable value.
    pub max: Decimal,
    /// The value used when nothing valid has been persisted.
    pub default: Decimal,
}

impl Bounds {
    /// Creates a bound triple without checking its ordering.
    pub fn new(min: Decimal, max: Decimal, default: Decimal) -> Self {
        Self { min, max, default }
    }

    /// Returns true if `min <= default <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.default && self.default <= self.max
    }

    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: Decimal) -> Decimal {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns the value of one part of the triple.
    pub fn get(&self, part: BoundPart) -> Decimal {
        match part {
            BoundPart::Min => self.min,
            BoundPart::Max => self.max,
            BoundPart::Default => self.default,
        }
    }

    /// Returns a copy with one part replaced.
    ///
    /// Fails with a description of the broken ordering if the result would
    /// not satisfy `min <= default <= max`. `self` is never modified.
    pub fn with_part(&self, part: BoundPart, value: Decimal) -> Result<Self, String> {
        let mut updated = *self;
        match part {
            BoundPart::Min => updated.min = value,
            BoundPart::Max => updated.max = value,
            BoundPart::Default => updated.default = value,
        }

        if updated.min > updated.default {
            return Err(format!(
                "min {} exceeds default {}",
                updated.min.normalize(),
                updated.default.normalize()
            ));
        }
        if updated.default > updated.max {
            return Err(format!(
                "default {} exceeds max {}",
                updated.default.normalize(),
                updated.max.normalize()
            ));
        }

        Ok(updated)
    }
}
