//! # Title Classifier
//!
//! Turns a raw title into a [`PricedItem`].
//!
//! ## Matching Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "  back to the future 2 "                                              │
//! │         │ trim                                                          │
//! │         ▼                                                               │
//! │  "back to the future 2"                                                 │
//! │         │ try each TITLE_PATTERNS entry in order (case-insensitive)     │
//! │         ▼                                                               │
//! │  FullName ──► captured "2" ──► CollectionIndex::new(2) ──► Special(2)  │
//! │                                                                         │
//! │  no match, or digit outside 1..=3  ──────────────────────► Standard    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding a new alias is a one-line change to [`TITLE_PATTERNS`].

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

use crate::money::Money;
use crate::types::{CollectionIndex, PricedItem};
use crate::{DEFAULT_SPECIAL_PRICE, DEFAULT_STANDARD_PRICE};

// =============================================================================
// Pattern Table
// =============================================================================

/// Which spelling of the collection name matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleVariant {
    /// "Back to the Future 1"
    FullName,
    /// "Back to Future 1"
    ShortName,
    /// "BTTF 1"
    Acronym,
    /// "Retour vers le futur 1"
    Localized,
}

/// Ordered `(variant, pattern)` pairs. Each pattern captures one digit.
pub const TITLE_PATTERNS: &[(TitleVariant, &str)] = &[
    (TitleVariant::FullName, r"(?i)^back to the future\s*([0-9])$"),
    (TitleVariant::ShortName, r"(?i)^back to future\s*([0-9])$"),
    (TitleVariant::Acronym, r"(?i)^bttf\s*([0-9])$"),
    (TitleVariant::Localized, r"(?i)^retour vers le futur\s*([0-9])$"),
];

fn compiled_patterns() -> &'static [(TitleVariant, Regex)] {
    static PATTERNS: OnceLock<Vec<(TitleVariant, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        TITLE_PATTERNS
            .iter()
            .map(|(variant, pattern)| {
                (
                    *variant,
                    Regex::new(pattern).expect("title patterns are valid regexes"),
                )
            })
            .collect()
    })
}

/// Finds the collection index of a trimmed title, if any.
///
/// A pattern that matches with an out-of-range digit does not stop the
/// search; later patterns still get their turn.
pub fn match_collection_index(title: &str) -> Option<(TitleVariant, CollectionIndex)> {
    compiled_patterns().iter().find_map(|(variant, regex)| {
        let digit = regex.captures(title)?.get(1)?.as_str();
        let index = digit.parse::<u8>().ok().and_then(CollectionIndex::new)?;
        Some((*variant, index))
    })
}

// =============================================================================
// Classification
// =============================================================================

/// Classifies a title into a priced item.
///
/// ## Rules
/// - Surrounding whitespace is trimmed before matching and stored trimmed
/// - Matching is case-insensitive
/// - Index 1..=3 → special at `special_price`; anything else → standard
///
/// Never fails: unknown titles are simply standard items.
///
/// ## Example
/// ```rust
/// use dvd_core::classifier::classify;
/// use dvd_core::Money;
///
/// let item = classify(" BTTF 3 ", Money::from_major(20), Money::from_major(15));
/// assert_eq!(item.title(), "BTTF 3");
/// assert_eq!(item.special_index(), Some(3));
/// assert_eq!(item.price(), Money::from_major(15));
///
/// let item = classify("Back to the Future 4", Money::from_major(20), Money::from_major(15));
/// assert!(!item.is_special());
/// ```
pub fn classify(title: &str, standard_price: Money, special_price: Money) -> PricedItem {
    let title = title.trim();

    match match_collection_index(title) {
        Some((variant, index)) => {
            trace!(title, ?variant, index = index.get(), "Classified as special");
            PricedItem::special(title, special_price, index)
        }
        None => {
            trace!(title, "Classified as standard");
            PricedItem::standard(title, standard_price)
        }
    }
}

/// A classifier bound to a pair of unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleClassifier {
    standard_price: Money,
    special_price: Money,
}

impl TitleClassifier {
    pub const fn new(standard_price: Money, special_price: Money) -> Self {
        TitleClassifier {
            standard_price,
            special_price,
        }
    }

    #[inline]
    pub fn classify(&self, title: &str) -> PricedItem {
        classify(title, self.standard_price, self.special_price)
    }
}

impl Default for TitleClassifier {
    fn default() -> Self {
        TitleClassifier::new(DEFAULT_STANDARD_PRICE, DEFAULT_SPECIAL_PRICE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
