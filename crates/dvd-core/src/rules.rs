//! # Discount Rules
//!
//! Pluggable pricing rules evaluated by the [`crate::Calculator`].
//!
//! ## Rule Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  trait DiscountRule                                                     │
//! │                                                                         │
//! │  applies(cart)               → does this rule fire at all?             │
//! │  discount_for(cart)          → which Discount (0% when not applicable) │
//! │  applicable_base_price(cart) → sum of targeted items, dupes included   │
//! │  discounted_price(cart)      → base × (100 − pct) / 100   (provided)   │
//! │  result(cart)                → DiscountResult             (provided)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are held in an ordered list and the first one that applies wins.
//! Rules never stack.

use std::fmt::Debug;

use crate::cart::Cart;
use crate::discount::{Discount, DiscountResult};
use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Rule Trait
// =============================================================================

/// A discount policy over one category of cart items.
pub trait DiscountRule: Debug + Send + Sync {
    /// Human-readable rule name, reported in [`DiscountResult::rule_name`].
    fn name(&self) -> &str;

    fn applies(&self, cart: &Cart) -> bool;

    /// The discount earned by `cart`, or [`Discount::none`].
    fn discount_for(&self, cart: &Cart) -> Discount;

    /// Price of every item this rule targets, before discount.
    fn applicable_base_price(&self, cart: &Cart) -> Money;

    fn discounted_price(&self, cart: &Cart) -> Money {
        self.discount_for(cart).apply(self.applicable_base_price(cart))
    }

    fn result(&self, cart: &Cart) -> DiscountResult {
        let discount = self.discount_for(cart);
        let original_price = self.applicable_base_price(cart);
        let discounted_price = discount.apply(original_price);

        DiscountResult {
            rule_name: self.name().to_string(),
            discount,
            original_price,
            discounted_price,
            savings: original_price - discounted_price,
        }
    }
}

// =============================================================================
// Collection-Completion Rule
// =============================================================================

/// Default percentage for two distinct collection indices.
pub const TWO_INDICES_PERCENTAGE: u32 = 10;

/// Default percentage for three or more distinct collection indices.
pub const THREE_INDICES_PERCENTAGE: u32 = 20;

/// Rewards carts holding several different parts of the collection.
///
/// ## Tiers
/// ```text
/// distinct indices   discount   applied to
/// ────────────────   ────────   ─────────────────────────────────
///        0-1            0%      nothing
///         2            10%      every special item, dupes included
///        3+            20%      every special item, dupes included
/// ```
///
/// The tier is picked from the number of *distinct* indices but charged on
/// *all* special units: `{1, 2, 1}` earns 10% on three items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDiscountRule {
    two_indices: Discount,
    three_indices: Discount,
}

impl CollectionDiscountRule {
    pub const NAME: &'static str = "Back to the Future Discount";

    /// Builds the rule with custom tier percentages.
    ///
    /// Fails if either percentage is above 100.
    pub fn with_tiers(two_indices_pct: u32, three_indices_pct: u32) -> CoreResult<Self> {
        Ok(CollectionDiscountRule {
            two_indices: Discount::new(
                "BTTF 2 Episodes",
                two_indices_pct,
                format!(
                    "{two_indices_pct}% discount for having 2 different Back to the Future episodes"
                ),
            )?,
            three_indices: Discount::new(
                "BTTF Complete Trilogy",
                three_indices_pct,
                format!(
                    "{three_indices_pct}% discount for having all 3 Back to the Future episodes"
                ),
            )?,
        })
    }

    fn distinct_indices(cart: &Cart) -> usize {
        cart.unique_special_indices().len()
    }
}

impl Default for CollectionDiscountRule {
    fn default() -> Self {
        CollectionDiscountRule {
            two_indices: Discount::trusted(
                "BTTF 2 Episodes",
                TWO_INDICES_PERCENTAGE,
                "10% discount for having 2 different Back to the Future episodes",
            ),
            three_indices: Discount::trusted(
                "BTTF Complete Trilogy",
                THREE_INDICES_PERCENTAGE,
                "20% discount for having all 3 Back to the Future episodes",
            ),
        }
    }
}

impl DiscountRule for CollectionDiscountRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn applies(&self, cart: &Cart) -> bool {
        Self::distinct_indices(cart) >= 2
    }

    fn discount_for(&self, cart: &Cart) -> Discount {
        match Self::distinct_indices(cart) {
            n if n >= 3 => self.three_indices.clone(),
            2 => self.two_indices.clone(),
            _ => Discount::none(),
        }
    }

    fn applicable_base_price(&self, cart: &Cart) -> Money {
        cart.special_subtotal()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionIndex, PricedItem};

    fn cart_with(indices: &[u8], standard: usize) -> Cart {
        let specials = indices.iter().map(|&i| {
            PricedItem::special(
                format!("BTTF {i}"),
                Money::from_major(15),
                CollectionIndex::new(i).unwrap(),
            )
        });
        let others = (0..standard)
            .map(|n| PricedItem::standard(format!("Film {n}"), Money::from_major(20)));
        specials.chain(others).collect()
    }

    #[test]
    fn test_not_applicable_below_two_distinct() {
        let rule = CollectionDiscountRule::default();
        for cart in [cart_with(&[], 2), cart_with(&[1], 0), cart_with(&[2, 2, 2], 1)] {
            assert!(!rule.applies(&cart));
            assert!(rule.discount_for(&cart).is_none());
            assert_eq!(rule.discounted_price(&cart), rule.applicable_base_price(&cart));
        }
    }

    #[test]
    fn test_two_distinct_tier() {
        let rule = CollectionDiscountRule::default();
        let cart = cart_with(&[1, 2], 0);
        assert!(rule.applies(&cart));
        assert_eq!(rule.discount_for(&cart).percentage(), 10);
        assert_eq!(rule.applicable_base_price(&cart), Money::from_major(30));
        assert_eq!(rule.discounted_price(&cart), Money::from_major(27));
    }

    #[test]
    fn test_three_distinct_tier() {
        let rule = CollectionDiscountRule::default();
        let cart = cart_with(&[1, 2, 3], 1);
        assert_eq!(rule.discount_for(&cart).percentage(), 20);
        // Standard items are not targeted
        assert_eq!(rule.applicable_base_price(&cart), Money::from_major(45));
        assert_eq!(rule.discounted_price(&cart), Money::from_major(36));
    }

    #[test]
    fn test_duplicates_share_the_distinct_tier() {
        let rule = CollectionDiscountRule::default();
        let cart = cart_with(&[1, 2, 1], 0);
        assert_eq!(rule.discount_for(&cart).percentage(), 10);
        assert_eq!(rule.applicable_base_price(&cart), Money::from_major(45));
        assert_eq!(rule.discounted_price(&cart), Money::from_cents(4050));

        let cart = cart_with(&[1, 2, 3, 3], 0);
        assert_eq!(rule.discount_for(&cart).percentage(), 20);
        assert_eq!(rule.discounted_price(&cart), Money::from_major(48));
    }

    #[test]
    fn test_result_reports_savings() {
        let rule = CollectionDiscountRule::default();
        let result = rule.result(&cart_with(&[1, 2, 3], 0));
        assert_eq!(result.rule_name, CollectionDiscountRule::NAME);
        assert_eq!(result.original_price, Money::from_major(45));
        assert_eq!(result.discounted_price, Money::from_major(36));
        assert_eq!(result.savings, Money::from_major(9));
        assert_eq!(result.discount.name(), "BTTF Complete Trilogy");
    }

    #[test]
    fn test_custom_tiers() {
        let rule = CollectionDiscountRule::with_tiers(25, 50).unwrap();
        assert_eq!(rule.discounted_price(&cart_with(&[1, 3], 0)), Money::from_cents(2250));
        assert_eq!(rule.discounted_price(&cart_with(&[1, 2, 3], 0)), Money::from_cents(2250));

        assert!(CollectionDiscountRule::with_tiers(10, 120).is_err());
    }

    #[test]
    fn test_default_matches_explicit_tiers() {
        let explicit =
            CollectionDiscountRule::with_tiers(TWO_INDICES_PERCENTAGE, THREE_INDICES_PERCENTAGE)
                .unwrap();
        assert_eq!(CollectionDiscountRule::default(), explicit);
    }
}
