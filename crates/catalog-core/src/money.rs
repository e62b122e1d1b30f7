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
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.99" parses to 1099 cents, arithmetic is exact,                   │
//! │    and only the UI formats it back to "10.99" for display.             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Or parse from form text
//! let typed = Money::parse("10.99").unwrap();
//! assert_eq!(price, typed);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when text cannot be read as a money amount.
///
/// Parsing is deliberately strict: digits, an optional sign, and at most
/// two fraction digits. Anything else is rejected here and surfaces to
/// the form as "not a valid number".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid money amount")]
pub struct ParseMoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative amounts must survive parsing so that
///   validation can tell "not a number" apart from "negative price"
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for snapshot serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99, absolute value).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Parses decimal text into a Money value.
    ///
    /// ## Accepted Forms
    /// - `"10"` → 1000 cents
    /// - `"10.5"` → 1050 cents
    /// - `"10.99"` → 1099 cents
    /// - `"-5"` → -500 cents (negative amounts PARSE; validation rejects them)
    /// - `".5"` / `"5."` → 50 / 500 cents
    ///
    /// ## Rejected Forms
    /// - Empty or whitespace-only text
    /// - Non-digit characters (`"abc"`, `"1,50"`, `"1.2.3"`)
    /// - More than two fraction digits (`"10.999"`) - money has cents
    ///   precision, nothing finer
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseMoneyError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseMoneyError);
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        // A bare sign, ".", or "" carries no digits at all
        if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
            return Err(ParseMoneyError);
        }

        let mut cents: i64 = 0;
        if !int_part.is_empty() {
            if !int_part.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseMoneyError);
            }
            let major: i64 = int_part.parse().map_err(|_| ParseMoneyError)?;
            cents = major.checked_mul(100).ok_or(ParseMoneyError)?;
        }

        if let Some(frac) = frac_part {
            if !frac.is_empty() {
                if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ParseMoneyError);
                }
                let minor: i64 = frac.parse().map_err(|_| ParseMoneyError)?;
                // One fraction digit means tens of cents: "10.5" = 10.50
                cents += if frac.len() == 1 { minor * 10 } else { minor };
            }
        }

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    /// Formats as `major.minor` with two fraction digits, e.g. `10.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Arithmetic Operations
// =============================================================================

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    /// Multiplies by a quantity (e.g., unit price × stock on hand).
    #[inline]
    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * rhs as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amount() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
        assert_eq!(Money::parse("1000").unwrap().cents(), 100_000);
    }

    #[test]
    fn test_parse_fractional_amount() {
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("5.").unwrap().cents(), 500);
        assert_eq!(Money::parse("0.01").unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_negative_amount() {
        // Negative values must parse so validation can name the failure
        assert_eq!(Money::parse("-5").unwrap().cents(), -500);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
        assert!(Money::parse("-5").unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1,50").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("10.999").is_err()); // finer than cents
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(99);
        assert_eq!((a + b).cents(), 1099);

        let mut c = Money::zero();
        c += a;
        assert_eq!(c.cents(), 1000);

        assert_eq!((b * 3).cents(), 297);
    }

    #[test]
    fn test_from_str_round_trip() {
        let price: Money = "19.99".parse().unwrap();
        assert_eq!(price.to_string(), "19.99");
    }
}
