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
//! │  Basket totals drift a penny at a time and no longer match the          │
//! │  prices written to the stock file.                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    "24.99" parses to 2499 pence; arithmetic is exact; formatting        │
//! │    always prints two decimal places.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cas_core::money::Money;
//!
//! // Parse from decimal text (rounds half-up to 2 places)
//! let price: Money = "24.99".parse().unwrap();
//! assert_eq!(price.pence(), 2499);
//!
//! // Exact arithmetic
//! let total = price.multiply_quantity(3);
//! assert_eq!(total.to_string(), "74.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate results (e.g. margins) may go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Two-decimal-place semantics**: parsing rounds half-up to 2 places,
///   display always prints 2 places — the stock-file representation
///
/// Every price in the system flows through this type; non-negativity of
/// product prices is enforced by [`crate::validation::validate_price`]
/// at product construction, not here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cas_core::money::Money;
    ///
    /// let price = Money::from_pence(2499); // 24.99
    /// assert_eq!(price.pence(), 2499);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cas_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(299); // 2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.pence(), 897); // 8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"24.99"` into pence.
///
/// ## Normalization
/// Values are normalized to exactly two decimal places using round-half-up,
/// so `"4.125"` parses to 413 pence and `"4.1249"` to 412. This is the one
/// place rounding happens; all later arithmetic is exact.
///
/// ## Accepted Forms
/// - `"24"`      → 2400
/// - `"24.9"`    → 2490
/// - `"24.99"`   → 2499
/// - `"-1.50"`   → -150
///
/// Anything else (empty string, stray characters, missing digits) is an
/// invalid-format error.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "price",
            reason: "expected a decimal number such as 24.99",
        };

        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut pence: i64 = whole.parse::<i64>().map_err(|_| invalid())? * 100;

        let mut frac_bytes = frac.bytes();
        pence += i64::from(frac_bytes.next().map_or(0, |b| b - b'0')) * 10;
        pence += i64::from(frac_bytes.next().map_or(0, |b| b - b'0'));

        // Round half-up on the third decimal digit.
        if frac_bytes.next().is_some_and(|b| b >= b'5') {
            pence += 1;
        }

        Ok(Money(if negative { -pence } else { pence }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display prints the stock-file representation: two decimal places,
/// no currency symbol (`"24.99"`, `"0.00"`, `"-1.50"`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.pounds().abs(), self.pence_part())
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

/// Addition assignment (+=), used when summing basket lines.
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
