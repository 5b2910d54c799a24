//! # Cart Parser
//!
//! Entry adapter turning raw text or a list of titles into a [`Cart`].
//!
//! ```text
//! "Back to the Future 1\n\n  Amélie  \n"
//!        │ split on '\n'
//!        ▼
//! ["Back to the Future 1", "", "  Amélie  ", ""]
//!        │ trim, drop blanks
//!        ▼
//! ["Back to the Future 1", "Amélie"]
//!        │ classify with configured prices
//!        ▼
//! Cart [Special(1) @15, Standard @20]
//! ```

use crate::cart::Cart;
use crate::classifier::TitleClassifier;
use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_input, validate_titles};
use crate::{DEFAULT_SPECIAL_PRICE, DEFAULT_STANDARD_PRICE};

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub standard_price: Money,
    pub special_price: Money,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            standard_price: DEFAULT_STANDARD_PRICE,
            special_price: DEFAULT_SPECIAL_PRICE,
        }
    }
}

impl From<&PricingConfig> for ParserConfig {
    fn from(pricing: &PricingConfig) -> Self {
        ParserConfig {
            standard_price: pricing.standard_price,
            special_price: pricing.special_price,
        }
    }
}

/// Builds carts from raw input. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartParser {
    classifier: TitleClassifier,
}

impl CartParser {
    pub fn new(config: ParserConfig) -> Self {
        CartParser {
            classifier: TitleClassifier::new(config.standard_price, config.special_price),
        }
    }

    /// Parses newline-delimited titles.
    ///
    /// `\r\n` line endings work too: the `\r` is trimmed with the rest of the
    /// surrounding whitespace.
    pub fn parse(&self, input: &str) -> Cart {
        self.parse_iter(input.split('\n'))
    }

    /// Parses an array of titles.
    pub fn parse_titles<S: AsRef<str>>(&self, titles: &[S]) -> Cart {
        self.parse_iter(titles.iter().map(AsRef::as_ref))
    }

    fn parse_iter<'a>(&self, titles: impl Iterator<Item = &'a str>) -> Cart {
        titles
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(|title| self.classifier.classify(title))
            .collect()
    }

    /// Structural checks on raw input; see [`validate_input`].
    ///
    /// Advisory only: [`Self::parse`] works whether or not this was called.
    pub fn validate(&self, input: &str) -> Vec<ValidationError> {
        validate_input(input)
    }

    /// Same checks as [`Self::validate`] for the title-list shape accepted
    /// by [`Self::parse_titles`]; `line` is the 1-based list position.
    pub fn validate_titles<S: AsRef<str>>(&self, titles: &[S]) -> Vec<ValidationError> {
        validate_titles(titles)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
