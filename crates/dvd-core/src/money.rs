//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Fixed-Point?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  3 × 15.00 × 0.9 in f64 = 40.50000000000001  ❌                         │
//! │                                                                         │
//! │  OUR SOLUTION: ten-thousandths of the major unit                       │
//! │    15.00 = 150_000 units                                               │
//! │    450_000 × (100 - 10) / 100 = 405_000 units = 40.5  ✅               │
//! │                                                                         │
//! │  Prices are cent-precise (multiples of 100 units), so applying any     │
//! │  whole percentage lands exactly on a unit. No rounding ever happens    │
//! │  inside the core; presentation decides how many digits to show.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dvd_core::money::Money;
//!
//! let unit = Money::from_major(15);
//! let base = unit * 3;
//! let discounted = base.apply_percentage_discount(10);
//! assert_eq!(discounted.to_string(), "40.5");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::CoreError;

/// Units per major currency unit (1.00 EUR = 10 000 units).
const SCALE: i64 = 10_000;

/// Units per cent.
const UNITS_PER_CENT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in ten-thousandths of the major currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: savings and differences can be negative in tests
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a plain number**: `40.5`, never `"40.50"` or `{...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole major units.
    ///
    /// ## Example
    /// ```rust
    /// use dvd_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(20), Money::from_cents(2000));
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * SCALE)
    }

    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * UNITS_PER_CENT)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the value as a float, for serialization and display only.
    ///
    /// Never feed the result back into arithmetic.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Whole cents, rounded half away from zero. Display use only.
    ///
    /// ```rust
    /// use dvd_core::money::Money;
    ///
    /// let odd = Money::from_cents(1599).apply_percentage_discount(10); // 14.391
    /// assert_eq!(odd.rounded_cents(), 1439);
    /// ```
    pub fn rounded_cents(&self) -> i64 {
        let half = UNITS_PER_CENT / 2;
        if self.0 >= 0 {
            (self.0 + half) / UNITS_PER_CENT
        } else {
            (self.0 - half) / UNITS_PER_CENT
        }
    }

    /// Applies a percentage discount and returns the remaining amount.
    ///
    /// `amount × (100 − percentage) / 100`. Exact for cent-precise amounts.
    /// Callers guarantee `percentage <= 100` (see [`crate::Discount::new`]).
    ///
    /// ## Example
    /// ```rust
    /// use dvd_core::money::Money;
    ///
    /// let base = Money::from_major(45);
    /// assert_eq!(base.apply_percentage_discount(20), Money::from_major(36));
    /// assert_eq!(base.apply_percentage_discount(0), base);
    /// ```
    pub fn apply_percentage_discount(&self, percentage: u32) -> Money {
        let remaining = 100_i128 - i128::from(percentage.min(100));
        Money((self.0 as i128 * remaining / 100) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal with trailing zeros removed: `56`, `40.5`, `15.99`.
///
/// This is what ends up in JSON and logs; currency symbols and locale
/// separators are a presentation concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let frac = abs % SCALE as u64;

        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }

        let digits = format!("{frac:04}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

/// Parses `"15"`, `"15.5"`, `"15.99"` or `"-3.50"`.
///
/// At most two fractional digits are accepted so that every configured
/// price is cent-precise.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidPrice {
            field: "price".to_string(),
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty()
            || frac.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .and_then(|c| c.checked_mul(UNITS_PER_CENT))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % SCALE == 0 {
            serializer.serialize_i64(self.0 / SCALE)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

/// Accepts a JSON/TOML number or a decimal string.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Int(major) => {
                return major.checked_mul(SCALE).map(Money).ok_or_else(|| {
                    serde::de::Error::custom(CoreError::InvalidPrice {
                        field: "price".to_string(),
                        value: major.to_string(),
                    })
                });
            }
            Raw::Float(value) => value.to_string(),
            Raw::Text(text) => text,
        };

        text.parse().map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_agree() {
        assert_eq!(Money::from_major(15), Money::from_cents(1500));
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(1).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(56).to_string(), "56");
        assert_eq!(Money::from_cents(4050).to_string(), "40.5");
        assert_eq!(Money::from_cents(1599).to_string(), "15.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.5");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("20".parse::<Money>().unwrap(), Money::from_major(20));
        assert_eq!("15.5".parse::<Money>().unwrap(), Money::from_cents(1550));
        assert_eq!(" 15.99 ".parse::<Money>().unwrap(), Money::from_cents(1599));
        assert_eq!("-3.50".parse::<Money>().unwrap(), Money::from_cents(-350));

        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.999".parse::<Money>().is_err());
        assert!(".5".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!(a + b, Money::from_major(15));
        assert_eq!(a - b, Money::from_major(5));
        assert_eq!(a * 3, Money::from_major(30));

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_major(15), Money::from_major(15), Money::from_major(20)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_major(50));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_discount_is_exact() {
        assert_eq!(
            Money::from_major(30).apply_percentage_discount(10),
            Money::from_major(27)
        );
        assert_eq!(
            Money::from_major(45).apply_percentage_discount(10),
            Money::from_cents(4050)
        );
        // 15.99 × 0.9 = 14.391, kept to the unit
        let odd = Money::from_cents(1599).apply_percentage_discount(10);
        assert_eq!(odd.to_string(), "14.391");
        assert_eq!(Money::from_major(45).apply_percentage_discount(100), Money::zero());
    }

    #[test]
    fn test_rounded_cents() {
        assert_eq!(Money::from_cents(4050).rounded_cents(), 4050);
        assert_eq!(Money(144_950).rounded_cents(), 1450);
        assert_eq!(Money(144_949).rounded_cents(), 1449);
        assert_eq!(Money(-144_950).rounded_cents(), -1450);
    }

    #[test]
    fn test_serialize_as_plain_number() {
        assert_eq!(serde_json::to_string(&Money::from_major(56)).unwrap(), "56");
        assert_eq!(serde_json::to_string(&Money::from_cents(4050)).unwrap(), "40.5");
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let m: Money = serde_json::from_str("20").unwrap();
        assert_eq!(m, Money::from_major(20));

        let m: Money = serde_json::from_str("15.5").unwrap();
        assert_eq!(m, Money::from_cents(1550));

        let m: Money = serde_json::from_str("\"15.99\"").unwrap();
        assert_eq!(m, Money::from_cents(1599));

        assert!(serde_json::from_str::<Money>("\"cheap\"").is_err());
    }

    #[test]
    fn test_deserialize_huge_integer_is_an_error() {
        // 10^15 major units does not fit in i64 ten-thousandths
        let err = serde_json::from_str::<Money>("1000000000000000").unwrap_err();
        assert!(err.to_string().contains("Invalid price"));

        let err = serde_json::from_str::<Money>("\"1000000000000000\"").unwrap_err();
        assert!(err.to_string().contains("Invalid price"));
    }
}
