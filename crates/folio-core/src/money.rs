//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, line total, and grand total is an i64 cent count.       │
//! │    Decimal strings exist only at the table-file and display boundary.   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Table Boundary
//! The inventory and sales tables store prices as plain decimal text
//! (`499.00`). `Money` serializes to exactly that form and parses `499`,
//! `499.0`, and `499.00` back to the same cent count.
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! let price: Money = "499.00".parse().unwrap();
//! assert_eq!(price.cents(), 49900);
//!
//! // Arithmetic operations
//! let two = price * 2;                         // $998.00
//! assert_eq!(two, Money::from_cents(99800));
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: lets arithmetic underflow be observed rather than wrap
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Custom serde**: the on-disk form is a two-decimal string (`499.00`),
///   never a raw cent count, because the table columns are the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion.
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Formats the value as a bare decimal string, the table-file form.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(49900).to_decimal_string(), "499.00");
    /// assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major_units().abs(), self.minor_units())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when a decimal money string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount: {input:?}")]
pub struct ParseMoneyError {
    input: String,
}

impl ParseMoneyError {
    fn new(input: &str) -> Self {
        ParseMoneyError {
            input: input.to_string(),
        }
    }
}

/// Parses decimal money strings: `499`, `499.0`, `499.00`, `-5.50`.
///
/// At most two fraction digits are accepted; one digit means tenths
/// (`499.5` is $499.50). Anything else is rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (major_part, minor_part) = match body.split_once('.') {
            // A bare trailing dot ("12.") is rejected, not read as "12".
            Some((_, "")) => return Err(ParseMoneyError::new(s)),
            Some((major, minor)) => (major, minor),
            None => (body, ""),
        };

        if major_part.is_empty() || !major_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::new(s));
        }
        if minor_part.len() > 2 || !minor_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::new(s));
        }

        let major: i64 = major_part.parse().map_err(|_| ParseMoneyError::new(s))?;
        let minor: i64 = match minor_part.len() {
            0 => 0,
            // One fraction digit is tenths: "499.5" means 50 cents
            1 => minor_part.parse::<i64>().map_err(|_| ParseMoneyError::new(s))? * 10,
            _ => minor_part.parse().map_err(|_| ParseMoneyError::new(s))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| ParseMoneyError::new(s))?;

        Ok(if negative {
            Money(-cents)
        } else {
            Money(cents)
        })
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Serializes as the bare decimal string (`499.00`).
///
/// The tables are read by humans and spreadsheets; a raw cent count in the
/// Price column would silently change the file contract.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal money amount")
    }

    fn visit_str<E>(self, value: &str) -> Result<Money, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    // Numeric cells: the CSV deserializer infers field types, and hand-edited
    // files or JSON sources may carry prices as numbers.
    fn visit_f64<E>(self, value: f64) -> Result<Money, E>
    where
        E: de::Error,
    {
        Ok(Money::from_cents((value * 100.0).round() as i64))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Money, E>
    where
        E: de::Error,
    {
        Ok(Money::from_major_minor(value, 0))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Money, E>
    where
        E: de::Error,
    {
        Ok(Money::from_major_minor(value as i64, 0))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with the fixed currency symbol.
///
/// ## Note
/// Locale handling is out of scope; `$X.YY` is the fixed display form used
/// on cart summaries and receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.major_units().abs(),
            self.minor_units()
        )
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation (for grand totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major_units(), 10);
        assert_eq!(money.minor_units(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(49900).to_decimal_string(), "499.00");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("499".parse::<Money>().unwrap().cents(), 49900);
        assert_eq!("499.0".parse::<Money>().unwrap().cents(), 49900);
        assert_eq!("499.00".parse::<Money>().unwrap().cents(), 49900);
        assert_eq!("499.5".parse::<Money>().unwrap().cents(), 49950);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!(" 12.34 ".parse::<Money>().unwrap().cents(), 1234);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12.".parse::<Money>().is_err());
        assert!("$12.00".parse::<Money>().is_err());
        assert!("1,200".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_roundtrip() {
        for cents in [0, 5, 99, 100, 49900, 1_000_000] {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_decimal_string().parse().unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.cents(), 500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 49900]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 50250);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
