//! # Money Module
//!
//! `cost_per_night` is an INTEGER column holding cents. Price filters are
//! compared against it directly, so they are expressed in cents too.
//!
//! ## Usage
//! ```rust
//! use lightbnb_core::money::Money;
//!
//! let nightly = Money::from_dollars(85);
//! assert_eq!(nightly.cents(), 8_500);
//! assert_eq!(nightly.to_string(), "$85.00");
//!
//! let stay = nightly * 3;
//! assert_eq!(stay.cents(), 25_500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Serializes as a bare integer, so `{"minimum_price_per_night": 5000}`
/// deserializes to $50.00.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// ## Example
    /// ```rust
    /// use lightbnb_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(50).cents(), 5_000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Like [`Money::from_dollars`], but `None` when the cents overflow.
    #[inline]
    pub const fn checked_from_dollars(dollars: i64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns the value in cents. This is what gets bound to SQL.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display, e.g. `$85.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Rows store cents as INTEGER (`i32`).
impl From<i32> for Money {
    #[inline]
    fn from(cents: i32) -> Self {
        Money(cents as i64)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by a number of nights.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: i64) -> Self {
        Money(self.0 * nights)
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
        let money = Money::from_cents(8_599);
        assert_eq!(money.cents(), 8_599);
        assert_eq!(money.dollars(), 85);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_checked_from_dollars() {
        assert_eq!(Money::checked_from_dollars(50), Some(Money::from_cents(5_000)));
        assert_eq!(Money::checked_from_dollars(92_233_720_368_547_759), None);
        assert_eq!(Money::checked_from_dollars(i64::MIN), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_dollars(5).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let nightly = Money::from_cents(12_000);
        assert_eq!((nightly * 4).cents(), 48_000);
        assert_eq!((nightly + Money::from_cents(500)).cents(), 12_500);
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let json = serde_json::to_string(&Money::from_cents(5_000)).unwrap();
        assert_eq!(json, "5000");

        let back: Money = serde_json::from_str("7500").unwrap();
        assert_eq!(back, Money::from_dollars(75));
    }

    #[test]
    fn test_from_row_integer() {
        let money: Money = 9_900_i32.into();
        assert_eq!(money, Money::from_dollars(99));
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }
}
