//! # Validation Module
//!
//! Structural checks on raw cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (structural, advisory)                           │
//! │  ├── Empty input                                                        │
//! │  └── Over-long titles                                                  │
//! │           │                                                             │
//! │           ▼  caller decides: reject or carry on                         │
//! │  Layer 2: CartParser::parse                                            │
//! │  └── Never fails; blank lines dropped, unknown titles → standard       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Problems are collected into a list instead of returned as `Err`, so the
//! caller can show them all at once.

use crate::error::ValidationError;
use crate::MAX_TITLE_LENGTH;

/// Checks newline-delimited input.
///
/// ## Rules
/// - Empty or whitespace-only input → [`ValidationError::EmptyInput`] (and
///   nothing else is checked)
/// - Each trimmed line longer than [`MAX_TITLE_LENGTH`] characters →
///   [`ValidationError::TitleTooLong`] with its 1-based line number
///
/// ## Example
/// ```rust
/// use dvd_core::validation::validate_input;
///
/// assert!(validate_input("Back to the Future 1\nAmélie").is_empty());
/// assert_eq!(validate_input("   ").len(), 1);
/// ```
pub fn validate_input(input: &str) -> Vec<ValidationError> {
    if input.trim().is_empty() {
        return vec![ValidationError::EmptyInput];
    }

    input
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| validate_title(line).err().map(|_| index + 1))
        .map(|line| ValidationError::TitleTooLong {
            line,
            max: MAX_TITLE_LENGTH,
        })
        .collect()
}

/// Checks a list of titles, numbering them from 1.
pub fn validate_titles<S: AsRef<str>>(titles: &[S]) -> Vec<ValidationError> {
    if titles.iter().all(|title| title.as_ref().trim().is_empty()) {
        return vec![ValidationError::EmptyInput];
    }

    titles
        .iter()
        .enumerate()
        .filter(|(_, title)| validate_title(title.as_ref()).is_err())
        .map(|(index, _)| ValidationError::TitleTooLong {
            line: index + 1,
            max: MAX_TITLE_LENGTH,
        })
        .collect()
}

/// Checks that one trimmed title fits within [`MAX_TITLE_LENGTH`] characters.
///
/// Blank titles pass; they are dropped by the parser.
pub fn validate_title(title: &str) -> Result<(), usize> {
    let length = title.trim().chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(length);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
