//! # Pricing Configuration
//!
//! Explicit pricing values handed to [`crate::CartParser`] and
//! [`crate::Calculator`] at construction.
//!
//! The core never reads files or environment variables; the CLI builds a
//! `PricingConfig` from its own config sources and passes it down. Several
//! configurations can therefore live side by side in one process.
//!
//! ## Example Config Section
//! ```toml
//! [pricing]
//! standard_price = 20
//! special_price = "15.00"
//! currency = "EUR"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{DEFAULT_CURRENCY, DEFAULT_SPECIAL_PRICE, DEFAULT_STANDARD_PRICE};

/// Largest accepted unit price. Keeps cart sums far from `i64` overflow.
pub const MAX_UNIT_PRICE: Money = Money::from_major(1_000_000);

/// Unit prices and currency for one shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of any title outside the special collection.
    #[serde(default = "default_standard_price")]
    pub standard_price: Money,

    /// Price of a special-collection title.
    #[serde(default = "default_special_price")]
    pub special_price: Money,

    /// ISO 4217 currency code reported in results.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_standard_price() -> Money {
    DEFAULT_STANDARD_PRICE
}

fn default_special_price() -> Money {
    DEFAULT_SPECIAL_PRICE
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            standard_price: default_standard_price(),
            special_price: default_special_price(),
            currency: default_currency(),
        }
    }
}

impl PricingConfig {
    /// Validates the configuration.
    ///
    /// ## Rules
    /// - Both unit prices must be within `0..=`[`MAX_UNIT_PRICE`] (zero is a free item)
    /// - Currency must be three ASCII letters
    pub fn validate(&self) -> CoreResult<()> {
        for (field, price) in [
            ("standard price", self.standard_price),
            ("special price", self.special_price),
        ] {
            if price.is_negative() || price > MAX_UNIT_PRICE {
                return Err(CoreError::InvalidPrice {
                    field: field.to_string(),
                    value: price.to_string(),
                });
            }
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCurrency(self.currency.clone()));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
