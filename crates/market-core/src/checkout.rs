//! # Checkout Module
//!
//! Computes basket totals and settles them against the session balance.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Decision                                 │
//! │                                                                         │
//! │  checkout(basket, balance)                                              │
//! │       │                                                                 │
//! │       ├── basket empty? ──────────────► EmptyBasket (no side effects)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ(frozen price × qty)                                       │
//! │  tax      = subtotal × 5%  (rounded to the cent)                        │
//! │  total    = subtotal + tax                                              │
//! │       │                                                                 │
//! │       ├── balance >= total ───► deduct, clear basket,                  │
//! │       │                         Success{subtotal, tax, total, balance} │
//! │       │                                                                 │
//! │       └── balance <  total ───► InsufficientFunds{shortfall}           │
//! │                                 balance and basket UNTOUCHED;          │
//! │                                 caller may top up and retry, or        │
//! │                                 go back to shopping                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no automatic retry and no retry limit: InsufficientFunds is a
//! recoverable state the caller drives out of. Stock is not touched in any
//! branch because reservations were committed when items were added.

use serde::{Deserialize, Serialize};

use crate::basket::Basket;
use crate::money::Money;
use crate::types::TaxRate;
use crate::STARTING_BALANCE;

// =============================================================================
// Balance
// =============================================================================

/// A customer session's spending balance.
///
/// Session-scoped and never persisted. It can only move through `deposit`
/// (top-up) and a successful checkout settlement, so a settled balance is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance(Money);

impl Balance {
    /// Opens a balance at the fixed session starting value ($300.00).
    pub const fn starting() -> Self {
        Balance(STARTING_BALANCE)
    }

    /// Opens a balance at an explicit amount (tests, mostly).
    pub const fn new(amount: Money) -> Self {
        Balance(amount)
    }

    /// Current amount.
    #[inline]
    pub const fn amount(&self) -> Money {
        self.0
    }

    /// Adds funds to the balance (the "add more money" flow).
    pub fn deposit(&mut self, amount: Money) {
        self.0 += amount;
    }

    /// Checks whether the balance covers `total`.
    #[inline]
    pub fn covers(&self, total: Money) -> bool {
        self.0 >= total
    }

    /// Removes settled funds. Only the checkout engine calls this, and only
    /// after `covers` has passed.
    fn settle(&mut self, total: Money) {
        self.0 -= total;
    }
}

impl Default for Balance {
    fn default() -> Self {
        Balance::starting()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Totals from a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Sum of frozen line prices, before tax.
    pub subtotal: Money,

    /// Tax on the subtotal, rounded to the cent.
    pub tax: Money,

    /// subtotal + tax; the amount actually settled.
    pub total: Money,

    /// Balance remaining after settlement.
    pub new_balance: Money,
}

// =============================================================================
// Checkout Outcome
// =============================================================================

/// Result of a checkout attempt.
///
/// Every variant is recoverable by the caller; none of them ends the session
/// or touches the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum CheckoutOutcome {
    /// Nothing to check out; no side effects.
    EmptyBasket,

    /// Settled: balance deducted, basket cleared.
    Success(Receipt),

    /// Balance cannot cover the total; balance and basket are unchanged.
    InsufficientFunds {
        /// How much more money the customer needs: total - balance.
        shortfall: Money,
    },
}

// =============================================================================
// Checkout Engine
// =============================================================================

/// Computes totals for a basket and settles them against a balance.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutEngine {
    tax_rate: TaxRate,
}

impl CheckoutEngine {
    /// Creates an engine with an explicit tax rate.
    pub const fn new(tax_rate: TaxRate) -> Self {
        CheckoutEngine { tax_rate }
    }

    /// Creates an engine with the store's fixed 5% rate.
    pub const fn standard() -> Self {
        CheckoutEngine::new(crate::TAX_RATE)
    }

    /// Returns the engine's tax rate.
    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Attempts to settle the basket against the balance.
    ///
    /// On success the basket is cleared and the balance reduced by the
    /// total. On `EmptyBasket` or `InsufficientFunds` nothing is mutated, so
    /// the caller can top up and call again, or walk away with the basket
    /// (and its reservations) intact.
    pub fn checkout(&self, basket: &mut Basket, balance: &mut Balance) -> CheckoutOutcome {
        if basket.is_empty() {
            return CheckoutOutcome::EmptyBasket;
        }

        let subtotal = basket.subtotal();
        let tax = subtotal.calculate_tax(self.tax_rate);
        let total = subtotal + tax;

        if !balance.covers(total) {
            return CheckoutOutcome::InsufficientFunds {
                shortfall: total - balance.amount(),
            };
        }

        balance.settle(total);
        basket.clear();

        CheckoutOutcome::Success(Receipt {
            subtotal,
            tax,
            total,
            new_balance: balance.amount(),
        })
    }
}

impl Default for CheckoutEngine {
    fn default() -> Self {
        CheckoutEngine::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::LineItem;
    use crate::types::{Category, StockRecord};
    use chrono::Utc;

    fn record(code: i64, name: &str, price_cents: i64) -> StockRecord {
        StockRecord {
            code,
            name: name.to_string(),
            price_cents,
            category: Category::Dairy,
            quantity: 100,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// The reference basket: $1.50 x 2 + $0.75 x 1.
    fn reference_basket() -> Basket {
        let mut basket = Basket::new();
        basket.push(LineItem::reserved(&record(1643, "Milk", 150), 2));
        basket.push(LineItem::reserved(&record(1648, "Apple", 75), 1));
        basket
    }

    #[test]
    fn test_empty_basket_has_no_side_effects() {
        let mut basket = Basket::new();
        let mut balance = Balance::starting();

        let outcome = CheckoutEngine::standard().checkout(&mut basket, &mut balance);

        assert_eq!(outcome, CheckoutOutcome::EmptyBasket);
        assert_eq!(balance.amount().cents(), 30_000);
    }

    #[test]
    fn test_checkout_math_to_the_cent() {
        // subtotal $3.75, tax $0.19 (5% of 3.75 rounded), total $3.94
        let mut basket = reference_basket();
        let mut balance = Balance::starting();

        match CheckoutEngine::standard().checkout(&mut basket, &mut balance) {
            CheckoutOutcome::Success(receipt) => {
                assert_eq!(receipt.subtotal.cents(), 375);
                assert_eq!(receipt.tax.cents(), 19);
                assert_eq!(receipt.total.cents(), 394);
                assert_eq!(format!("{}", receipt.total), "$3.94");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_success_settles_and_clears() {
        // balance $300.00, total $3.94 → new balance $296.06, basket empty
        let mut basket = reference_basket();
        let mut balance = Balance::starting();

        let outcome = CheckoutEngine::standard().checkout(&mut basket, &mut balance);

        match outcome {
            CheckoutOutcome::Success(receipt) => {
                assert_eq!(receipt.new_balance.cents(), 29_606);
                assert_eq!(format!("{}", receipt.new_balance), "$296.06");
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert!(basket.is_empty());
        assert_eq!(balance.amount().cents(), 29_606);
    }

    #[test]
    fn test_insufficient_funds_leaves_everything_unchanged() {
        // balance $2.00, total $3.94 → shortfall $1.94
        let mut basket = reference_basket();
        let mut balance = Balance::new(Money::from_cents(200));

        let outcome = CheckoutEngine::standard().checkout(&mut basket, &mut balance);

        assert_eq!(
            outcome,
            CheckoutOutcome::InsufficientFunds {
                shortfall: Money::from_cents(194)
            }
        );
        assert_eq!(balance.amount().cents(), 200);
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_top_up_then_retry_succeeds() {
        let mut basket = reference_basket();
        let mut balance = Balance::new(Money::from_cents(200));
        let engine = CheckoutEngine::standard();

        assert!(matches!(
            engine.checkout(&mut basket, &mut balance),
            CheckoutOutcome::InsufficientFunds { .. }
        ));

        balance.deposit(Money::from_cents(500));

        match engine.checkout(&mut basket, &mut balance) {
            CheckoutOutcome::Success(receipt) => {
                // $2.00 + $5.00 - $3.94 = $3.06
                assert_eq!(receipt.new_balance.cents(), 306);
            }
            other => panic!("expected success after top-up, got {:?}", other),
        }
        assert!(basket.is_empty());
    }

    #[test]
    fn test_exact_balance_settles_to_zero() {
        let mut basket = reference_basket();
        let mut balance = Balance::new(Money::from_cents(394));

        match CheckoutEngine::standard().checkout(&mut basket, &mut balance) {
            CheckoutOutcome::Success(receipt) => {
                assert!(receipt.new_balance.is_zero());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_settled_balance_never_negative() {
        // A handful of basket/balance shapes; a successful settlement must
        // never leave the balance below zero.
        let cases = [(394, 394), (394, 395), (100, 30_000)];
        for (subtotal_cents, balance_cents) in cases {
            let mut basket = Basket::new();
            basket.push(LineItem::reserved(
                &record(1643, "Milk", subtotal_cents),
                1,
            ));
            let mut balance = Balance::new(Money::from_cents(balance_cents));

            if let CheckoutOutcome::Success(receipt) =
                CheckoutEngine::standard().checkout(&mut basket, &mut balance)
            {
                assert!(!receipt.new_balance.is_negative());
            }
        }
    }
}
