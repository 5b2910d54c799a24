//! # Error Types
//!
//! Domain-specific error types for dvd-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dvd-core errors (this file)                                           │
//! │  ├── CoreError        - Invalid configuration (discounts, prices)      │
//! │  └── ValidationError  - Structural input issues (advisory)             │
//! │                                                                         │
//! │  dvd-shop errors (CLI crate)                                           │
//! │  └── AppError         - Config file, I/O, rendering failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! An unrecognized title is never an error: it is simply priced as a standard
//! item. `CartParser::parse` and `Calculator::calculate` cannot fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Configuration errors raised while setting up pricing.
///
/// These signal a programming or setup mistake (a rule built with a bogus
/// percentage, a negative unit price) and are raised at construction time.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Discount percentage outside `0..=100`.
    #[error("Invalid discount percentage: {percentage}. Must be between 0 and 100.")]
    InvalidDiscountPercentage { percentage: u32 },

    /// A price could not be parsed or is out of range.
    ///
    /// ## When This Occurs
    /// - `"abc"` or `"1.999"` given as a unit price in the config file
    /// - Negative standard or special unit price
    #[error("Invalid {field}: '{value}'")]
    InvalidPrice { field: String, value: String },

    /// Currency code is not a three-letter ISO 4217 code.
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural input problems found by [`crate::validation`].
///
/// These are reported as a list, never thrown. Callers decide whether to
/// reject the input or carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The whole input is empty or whitespace.
    #[error("Input is empty")]
    EmptyInput,

    /// A single title exceeds the maximum length.
    ///
    /// `line` is 1-based and counts blank lines too.
    #[error("Line {line}: Title too long (max {max} characters)")]
    TitleTooLong { line: usize, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
