//! # Cart
//!
//! An immutable, ordered collection of classified items.
//!
//! ## Derived Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [BTTF 1, BTTF 2, Amélie, BTTF 1]                                │
//! │                                                                         │
//! │  item_count()              → 4                                          │
//! │  special_items()           → [BTTF 1, BTTF 2, BTTF 1]  (dupes kept)    │
//! │  other_items()             → [Amélie]                                   │
//! │  unique_special_indices()  → {1, 2}                    (dupes merged)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached: every query is recomputed from `items`, so repeated
//! calls always agree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::money::Money;
use crate::types::PricedItem;

/// A read-only shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<PricedItem>,
}

impl Cart {
    /// Creates a cart holding the given items in order.
    pub fn new(items: Vec<PricedItem>) -> Self {
        Cart { items }
    }

    /// Creates an empty cart.
    pub fn empty() -> Self {
        Cart::default()
    }

    #[inline]
    pub fn items(&self) -> &[PricedItem] {
        &self.items
    }

    /// Total number of items, duplicates included.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Special-collection items in cart order, duplicates retained.
    pub fn special_items(&self) -> Vec<&PricedItem> {
        self.items.iter().filter(|item| item.is_special()).collect()
    }

    /// Everything that is not in the special collection.
    pub fn other_items(&self) -> Vec<&PricedItem> {
        self.items.iter().filter(|item| !item.is_special()).collect()
    }

    /// Distinct collection indices present in the cart.
    pub fn unique_special_indices(&self) -> BTreeSet<u8> {
        self.items.iter().filter_map(PricedItem::special_index).collect()
    }

    /// Sum of special item prices, duplicates included.
    pub fn special_subtotal(&self) -> Money {
        self.special_items().iter().map(|item| item.price()).sum()
    }

    /// Sum of other item prices.
    pub fn other_subtotal(&self) -> Money {
        self.other_items().iter().map(|item| item.price()).sum()
    }

    /// Item titles in cart order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(PricedItem::title).collect()
    }
}

impl FromIterator<PricedItem> for Cart {
    fn from_iter<I: IntoIterator<Item = PricedItem>>(iter: I) -> Self {
        Cart::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
