//! # dvd-core: Pure Pricing Logic for the DVD Shop
//!
//! This crate is the **heart** of the DVD shop. It classifies titles, decides
//! which discount applies and adds everything up, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DVD Shop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 dvd-shop CLI (apps/cli)                         │   │
//! │  │     stdin / prompt ──► config ──► receipt | simple | json       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &str / &[String]                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dvd-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  parser  │─►│   cart   │─►│calculator│─►│ Calculation  │   │   │
//! │  │   │classifier│  │          │  │  rules   │  │   Result     │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENV VARS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`classifier`] - Title → priced item (standard or special collection)
//! - [`cart`] - Immutable cart with derived queries
//! - [`discount`] - Discount value and per-rule results
//! - [`rules`] - `DiscountRule` trait and the collection-completion rule
//! - [`calculator`] - Orchestrates rules into a `CalculationResult`
//! - [`parser`] - Raw text / title list → `Cart`
//! - [`validation`] - Structural input checks (advisory)
//! - [`money`] - Fixed-point money (no floating point arithmetic)
//! - [`config`] - Explicit pricing configuration
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use dvd_core::{Calculator, CartParser, Money};
//!
//! let parser = CartParser::default();
//! let calculator = Calculator::default();
//!
//! let cart = parser.parse("Back to the Future 1\nBack to the Future 2\nBack to the Future 3\nLa chèvre");
//! let result = calculator.calculate(&cart);
//!
//! // (3 × 15 × 0.8) + 20
//! assert_eq!(result.total_price, Money::from_major(56));
//! assert_eq!(result.discount_applied.as_deref(), Some("20%"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod cart;
pub mod classifier;
pub mod config;
pub mod discount;
pub mod error;
pub mod money;
pub mod parser;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{CalculationResult, Calculator, CalculatorConfig, PriceBreakdown};
pub use cart::Cart;
pub use classifier::{classify, TitleClassifier};
pub use config::{PricingConfig, MAX_UNIT_PRICE};
pub use discount::{Discount, DiscountResult};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use parser::{CartParser, ParserConfig};
pub use rules::{CollectionDiscountRule, DiscountRule};
pub use types::{CollectionIndex, ItemCategory, PricedItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Unit price of a title outside the special collection.
pub const DEFAULT_STANDARD_PRICE: Money = Money::from_major(20);

/// Unit price of a special-collection title.
pub const DEFAULT_SPECIAL_PRICE: Money = Money::from_major(15);

/// ISO 4217 code reported when none is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Longest accepted title, in characters, after trimming.
pub const MAX_TITLE_LENGTH: usize = 200;
