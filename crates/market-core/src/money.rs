//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A basket of $1.50 x 2 and $0.75 x 1 must total exactly $3.75,         │
//! │  and 5% tax on it must settle to exactly $3.94 against the balance.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    375 cents + 19 cents = 394 cents, every time, on every machine      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use market_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(150); // $1.50
//!
//! // Arithmetic operations
//! let doubled: Money = price * 2;                 // $3.00
//! let total = doubled + Money::from_cents(75);    // $3.75
//! assert_eq!(total.cents(), 375);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction must be closed so shortfalls can be
///   computed without underflow gymnastics
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
///
/// Every monetary value in the system flows through this type: unit prices,
/// line totals, tax, checkout totals, and the session balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    ///
    /// let price = Money::from_cents(150); // Represents $1.50
    /// assert_eq!(price.cents(), 150);
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

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounded to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds the
    /// half-cent case up instead of truncating, so 5% of $3.75 ($0.1875)
    /// becomes $0.19 and the receipt total lands on $3.94 exactly.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    /// use market_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(375); // $3.75
    /// let rate = TaxRate::from_bps(500);     // 5%
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// assert_eq!(tax.cents(), 19);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 500 = 5%
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(150); // $1.50
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 300); // $3.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the presentation-boundary rounding point: internal values are
/// exact cents, and `Display` is the only place they become `$D.CC` text.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(394)), "$3.94");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $10.00 at 5% = $0.50
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(500);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 50);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $3.75 at 5% = $0.1875 → $0.19 after cent rounding
        let amount = Money::from_cents(375);
        let rate = TaxRate::from_bps(500);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 19);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(150);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.cents(), 300);
    }
}
