//! # Discounts
//!
//! The `Discount` value and the `DiscountResult` report produced by rules.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Largest allowed percentage.
pub const MAX_PERCENTAGE: u32 = 100;

// =============================================================================
// Discount
// =============================================================================

/// A named percentage reduction.
///
/// ## Invariant
/// `percentage` is always within `0..=100`; [`Discount::new`] is the only
/// way to build one with a custom percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    name: String,
    percentage: u32,
    description: String,
}

/// The neutral discount returned when a rule does not apply.
pub const NO_DISCOUNT_NAME: &str = "No Discount";

impl Discount {
    /// Creates a discount, rejecting percentages above 100.
    ///
    /// ## Example
    /// ```rust
    /// use dvd_core::Discount;
    ///
    /// assert!(Discount::new("Trilogy", 20, "20% off").is_ok());
    /// assert!(Discount::new("Broken", 101, "oops").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        percentage: u32,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        if percentage > MAX_PERCENTAGE {
            return Err(CoreError::InvalidDiscountPercentage { percentage });
        }

        Ok(Discount {
            name: name.into(),
            percentage,
            description: description.into(),
        })
    }

    /// Builds a discount from a percentage known to be in range.
    pub(crate) fn trusted(name: &str, percentage: u32, description: &str) -> Self {
        debug_assert!(percentage <= MAX_PERCENTAGE);
        Discount {
            name: name.to_string(),
            percentage,
            description: description.to_string(),
        }
    }

    /// The zero-percent discount.
    pub fn none() -> Self {
        Discount {
            name: NO_DISCOUNT_NAME.to_string(),
            percentage: 0,
            description: "No discount applied".to_string(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks if this discount changes nothing.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.percentage == 0
    }

    /// Applies this discount to a price.
    pub fn apply(&self, price: Money) -> Money {
        price.apply_percentage_discount(self.percentage)
    }

    /// `"10%"` style label.
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

// =============================================================================
// Discount Result
// =============================================================================

/// What a rule would do to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResult {
    pub rule_name: String,
    pub discount: Discount,
    #[ts(type = "number")]
    pub original_price: Money,
    #[ts(type = "number")]
    pub discounted_price: Money,
    #[ts(type = "number")]
    pub savings: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bounds() {
        assert!(Discount::new("zero", 0, "").is_ok());
        assert!(Discount::new("full", 100, "").is_ok());

        let err = Discount::new("too much", 150, "").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidDiscountPercentage { percentage: 150 }
        ));
    }

    #[test]
    fn test_apply() {
        let discount = Discount::new("ten", 10, "10% off").unwrap();
        assert_eq!(discount.apply(Money::from_major(100)), Money::from_major(90));
        assert_eq!(discount.label(), "10%");
    }

    #[test]
    fn test_no_discount_is_neutral() {
        let none = Discount::none();
        assert!(none.is_none());
        assert_eq!(none.name(), NO_DISCOUNT_NAME);
        assert_eq!(none.apply(Money::from_major(42)), Money::from_major(42));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let result = DiscountResult {
            rule_name: "r".to_string(),
            discount: Discount::none(),
            original_price: Money::from_major(30),
            discounted_price: Money::from_major(27),
            savings: Money::from_major(3),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["ruleName"], "r");
        assert_eq!(json["discountedPrice"], 27);
        assert_eq!(json["discount"]["percentage"], 0);
    }
}
