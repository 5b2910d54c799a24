//! # Calculator
//!
//! Prices a [`Cart`] and produces the [`CalculationResult`] that leaves the
//! core.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart                                                                   │
//! │   ├── other items ────────► sum ───────────────────────► other_price   │
//! │   │                                (never discounted)                   │
//! │   └── special items ──────► sum ──► special_base_price                 │
//! │                                         │                               │
//! │            for rule in rules:           ▼                               │
//! │              if rule.applies(cart) ─► rule.discounted_price(cart)      │
//! │                 break                   (first match only)             │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                              special_discounted_price                  │
//! │                                                                         │
//! │  total = special_discounted_price + other_price   (no rounding)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::cart::Cart;
use crate::config::PricingConfig;
use crate::money::Money;
use crate::rules::{CollectionDiscountRule, DiscountRule};
use crate::DEFAULT_CURRENCY;

// =============================================================================
// Result Types
// =============================================================================

/// Outcome of pricing one cart. The only value exposed across the core
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[ts(type = "number")]
    pub total_price: Money,
    pub currency: String,
    pub items_count: usize,
    /// `"10%"` when a rule applied, `null` otherwise.
    pub discount_applied: Option<String>,
    pub breakdown: PriceBreakdown,
}

/// Split of the total between the special collection and everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub special_count: usize,
    #[ts(type = "number")]
    pub special_base_price: Money,
    #[ts(type = "number")]
    pub special_discounted_price: Money,
    pub other_count: usize,
    #[ts(type = "number")]
    pub other_price: Money,
}

impl CalculationResult {
    /// Money saved by the applied discount (zero when none applied).
    pub fn savings(&self) -> Money {
        self.breakdown.special_base_price - self.breakdown.special_discounted_price
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Calculator configuration.
#[derive(Debug)]
pub struct CalculatorConfig {
    pub currency: String,
    /// Evaluated in order; the first rule that applies is the only one used.
    pub rules: Vec<Box<dyn DiscountRule>>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            currency: DEFAULT_CURRENCY.to_string(),
            rules: vec![Box::new(CollectionDiscountRule::default())],
        }
    }
}

impl From<&PricingConfig> for CalculatorConfig {
    fn from(pricing: &PricingConfig) -> Self {
        CalculatorConfig {
            currency: pricing.currency.clone(),
            ..CalculatorConfig::default()
        }
    }
}

/// Computes cart totals with at most one discount rule applied.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across threads.
#[derive(Debug)]
pub struct Calculator {
    currency: String,
    rules: Vec<Box<dyn DiscountRule>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Calculator {
            currency: config.currency,
            rules: config.rules,
        }
    }

    /// Default rules with a different currency code.
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Calculator::new(CalculatorConfig {
            currency: currency.into(),
            ..CalculatorConfig::default()
        })
    }

    /// Appends a rule at the lowest priority.
    pub fn with_rule(mut self, rule: impl DiscountRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn rules(&self) -> &[Box<dyn DiscountRule>] {
        &self.rules
    }

    /// Convenience wrapper returning only the total.
    pub fn calculate_total(&self, cart: &Cart) -> Money {
        self.calculate(cart).total_price
    }

    /// Prices the cart.
    ///
    /// ## Example
    /// ```rust
    /// use dvd_core::{Calculator, CartParser, Money};
    ///
    /// let cart = CartParser::default().parse("Back to the Future 1\nBack to the Future 2");
    /// let result = Calculator::default().calculate(&cart);
    ///
    /// assert_eq!(result.total_price, Money::from_major(27));
    /// assert_eq!(result.discount_applied.as_deref(), Some("10%"));
    /// ```
    pub fn calculate(&self, cart: &Cart) -> CalculationResult {
        let special_items = cart.special_items();
        let other_items = cart.other_items();

        let other_price: Money = other_items.iter().map(|item| item.price()).sum();
        let special_base_price: Money = special_items.iter().map(|item| item.price()).sum();

        let mut special_discounted_price = special_base_price;
        let mut discount_applied = None;

        if let Some(rule) = self.rules.iter().find(|rule| rule.applies(cart)) {
            special_discounted_price = rule.discounted_price(cart);
            discount_applied = Some(rule.discount_for(cart).label());
            debug!(rule = rule.name(), discount = ?discount_applied, "Discount rule applied");
        }

        let total_price = special_discounted_price + other_price;

        debug!(
            items = cart.item_count(),
            total = %total_price,
            "Cart priced"
        );

        CalculationResult {
            total_price,
            currency: self.currency.clone(),
            items_count: cart.item_count(),
            discount_applied,
            breakdown: PriceBreakdown {
                special_count: special_items.len(),
                special_base_price,
                special_discounted_price,
                other_count: other_items.len(),
                other_price,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;
    use crate::types::{CollectionIndex, PricedItem};

    fn special(index: u8) -> PricedItem {
        PricedItem::special(
            format!("Back to the Future {index}"),
            Money::from_major(15),
            CollectionIndex::new(index).unwrap(),
        )
    }

    fn standard() -> PricedItem {
        PricedItem::standard("La chèvre", Money::from_major(20))
    }

    /// Always applies, charges a flat percentage on the whole cart.
    #[derive(Debug)]
    struct FlatRule(u32);

    impl DiscountRule for FlatRule {
        fn name(&self) -> &str {
            "flat"
        }

        fn applies(&self, _cart: &Cart) -> bool {
            true
        }

        fn discount_for(&self, _cart: &Cart) -> Discount {
            Discount::new("flat", self.0, "flat").unwrap()
        }

        fn applicable_base_price(&self, cart: &Cart) -> Money {
            cart.special_subtotal()
        }
    }

    #[test]
    fn test_empty_cart() {
        let result = Calculator::default().calculate(&Cart::empty());
        assert_eq!(result.total_price, Money::zero());
        assert_eq!(result.items_count, 0);
        assert_eq!(result.discount_applied, None);
        assert_eq!(result.currency, "EUR");
    }

    #[test]
    fn test_single_special_item() {
        let result = Calculator::default().calculate(&Cart::new(vec![special(1)]));
        assert_eq!(result.total_price, Money::from_major(15));
        assert_eq!(result.discount_applied, None);
    }

    #[test]
    fn test_two_distinct() {
        let result = Calculator::default().calculate(&Cart::new(vec![special(1), special(2)]));
        assert_eq!(result.breakdown.special_base_price, Money::from_major(30));
        assert_eq!(result.total_price, Money::from_major(27));
        assert_eq!(result.discount_applied.as_deref(), Some("10%"));
    }

    #[test]
    fn test_trilogy_plus_standard() {
        let cart = Cart::new(vec![special(1), special(2), special(3), standard()]);
        let result = Calculator::default().calculate(&cart);

        assert_eq!(
            result.breakdown,
            PriceBreakdown {
                special_count: 3,
                special_base_price: Money::from_major(45),
                special_discounted_price: Money::from_major(36),
                other_count: 1,
                other_price: Money::from_major(20),
            }
        );
        assert_eq!(result.total_price, Money::from_major(56));
        assert_eq!(result.discount_applied.as_deref(), Some("20%"));
        assert_eq!(result.items_count, 4);
        assert_eq!(result.savings(), Money::from_major(9));
    }

    #[test]
    fn test_duplicate_single_index_gets_nothing() {
        let result = Calculator::default().calculate(&Cart::new(vec![special(1), special(1)]));
        assert_eq!(result.total_price, Money::from_major(30));
        assert_eq!(result.discount_applied, None);
        assert!(result.savings().is_zero());
    }

    #[test]
    fn test_duplicates_discounted_at_distinct_tier() {
        let cart = Cart::new(vec![special(1), special(2), special(1)]);
        let result = Calculator::default().calculate(&cart);
        assert_eq!(result.breakdown.special_base_price, Money::from_major(45));
        assert_eq!(result.total_price, Money::from_cents(4050));
        assert_eq!(result.discount_applied.as_deref(), Some("10%"));
    }

    #[test]
    fn test_first_applicable_rule_wins() {
        let calculator = Calculator::new(CalculatorConfig {
            currency: "EUR".to_string(),
            rules: vec![
                Box::new(CollectionDiscountRule::default()),
                Box::new(FlatRule(50)),
            ],
        });

        // Collection rule applies first; the flat rule is never consulted.
        let cart = Cart::new(vec![special(1), special(2)]);
        let result = calculator.calculate(&cart);
        assert_eq!(result.discount_applied.as_deref(), Some("10%"));
        assert_eq!(result.total_price, Money::from_major(27));

        // Collection rule does not apply; the flat rule is next in line.
        let cart = Cart::new(vec![special(1)]);
        let result = calculator.calculate(&cart);
        assert_eq!(result.discount_applied.as_deref(), Some("50%"));
        assert_eq!(result.total_price, Money::from_cents(750));
    }

    #[test]
    fn test_no_rules_means_no_discount() {
        let calculator = Calculator::new(CalculatorConfig {
            currency: "USD".to_string(),
            rules: Vec::new(),
        });
        let result = calculator.calculate(&Cart::new(vec![special(1), special(2), special(3)]));
        assert_eq!(result.total_price, Money::from_major(45));
        assert_eq!(result.discount_applied, None);
        assert_eq!(result.currency, "USD");
    }

    #[test]
    fn test_with_rule_appends() {
        let calculator = Calculator::with_currency("GBP").with_rule(FlatRule(5));
        assert_eq!(calculator.rules().len(), 2);
        assert_eq!(calculator.currency(), "GBP");
        assert_eq!(calculator.rules()[0].name(), CollectionDiscountRule::NAME);
    }

    #[test]
    fn test_result_serializes_for_transport() {
        let cart = Cart::new(vec![special(1), special(2), special(1)]);
        let json = serde_json::to_value(Calculator::default().calculate(&cart)).unwrap();

        assert_eq!(json["totalPrice"], 40.5);
        assert_eq!(json["itemsCount"], 3);
        assert_eq!(json["discountApplied"], "10%");
        assert_eq!(json["breakdown"]["specialBasePrice"], 45);

        let json = serde_json::to_value(Calculator::default().calculate(&Cart::empty())).unwrap();
        assert!(json["discountApplied"].is_null());
    }

    #[test]
    fn test_calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
        assert_send_sync::<crate::CartParser>();
        assert_send_sync::<CollectionDiscountRule>();
    }
}
