//! # Domain Types
//!
//! Core domain types used throughout the DVD shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PricedItem    │   │  ItemCategory   │   │ CollectionIndex │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  title          │──►│  Standard       │   │  1 | 2 | 3      │       │
//! │  │  price (Money)  │   │  Special(idx) ──┼──►│  (validated)    │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A special item always carries its index and a standard item never does:
//! the enum makes the other combinations unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Collection Index
// =============================================================================

/// Position of an item within the special collection (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CollectionIndex(u8);

impl CollectionIndex {
    /// Smallest valid index.
    pub const MIN: u8 = 1;

    /// Largest valid index.
    pub const MAX: u8 = 3;

    /// Returns the index if it belongs to the collection.
    ///
    /// ## Example
    /// ```rust
    /// use dvd_core::CollectionIndex;
    ///
    /// assert!(CollectionIndex::new(2).is_some());
    /// assert!(CollectionIndex::new(0).is_none());
    /// assert!(CollectionIndex::new(4).is_none());
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        if index >= Self::MIN && index <= Self::MAX {
            Some(CollectionIndex(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CollectionIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CollectionIndex::new(value).ok_or_else(|| {
            format!(
                "collection index must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )
        })
    }
}

impl From<CollectionIndex> for u8 {
    fn from(index: CollectionIndex) -> Self {
        index.0
    }
}

impl fmt::Display for CollectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item Category
// =============================================================================

/// Pricing category decided by the title classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Any title outside the special collection.
    Standard,
    /// Member of the special collection at the given index.
    Special(CollectionIndex),
}

// =============================================================================
// Priced Item
// =============================================================================

/// A classified title with its unit price.
///
/// Built once by [`crate::classifier::classify`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    title: String,
    price: Money,
    category: ItemCategory,
}

impl PricedItem {
    /// Creates a standard-category item.
    pub fn standard(title: impl Into<String>, price: Money) -> Self {
        PricedItem {
            title: title.into(),
            price,
            category: ItemCategory::Standard,
        }
    }

    /// Creates a special-collection item.
    pub fn special(title: impl Into<String>, price: Money, index: CollectionIndex) -> Self {
        PricedItem {
            title: title.into(),
            price,
            category: ItemCategory::Special(index),
        }
    }

    /// The trimmed title as entered.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Checks if the item belongs to the special collection.
    #[inline]
    pub fn is_special(&self) -> bool {
        matches!(self.category, ItemCategory::Special(_))
    }

    /// Collection index; `Some` exactly when [`Self::is_special`] is true.
    pub fn special_index(&self) -> Option<u8> {
        match self.category {
            ItemCategory::Special(index) => Some(index.get()),
            ItemCategory::Standard => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
