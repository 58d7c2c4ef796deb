//! # Basket Module
//!
//! The per-session basket and its frozen-price line items.
//!
//! ## Reservation Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reserve-then-Commit                                  │
//! │                                                                         │
//! │  add to basket ──► ledger decrements stock NOW (the reservation)       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                 LineItem appended (name + price frozen at add time)    │
//! │                          │                                              │
//! │       ┌──────────────────┴──────────────────┐                           │
//! │       ▼                                     ▼                           │
//! │  checkout succeeds                   checkout fails / session ends     │
//! │  basket clears; stock stays          reservation stays held            │
//! │  decremented (already committed)     (release is a policy hook in      │
//! │                                       the session layer, not here)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The basket itself never talks to the ledger. The session layer performs
//! the reservation and then records it here, so this type stays pure and the
//! totals math is testable without a database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::StockRecord;

// =============================================================================
// Line Item
// =============================================================================

/// A reserved line in the basket.
///
/// ## Price Freezing
/// Name and unit price are captured when the item is added. If an admin
/// changes the ledger price afterwards, this line keeps the price the
/// customer saw at reservation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product code the reservation was taken against.
    pub code: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Units reserved. Always > 0.
    pub quantity: i64,

    /// When this item was added to the basket.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Snapshots a ledger record into a basket line.
    ///
    /// Called by the session layer after the ledger has already decremented
    /// stock by `quantity`.
    pub fn reserved(record: &StockRecord, quantity: i64) -> Self {
        LineItem {
            code: record.code,
            name: record.name.clone(),
            unit_price_cents: record.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Basket
// =============================================================================

/// The customer's basket: an ordered sequence of reserved line items.
///
/// ## Invariants
/// - Items appear in the order they were added (each add appends; adding the
///   same code twice produces two lines, each with its own snapshot)
/// - Every line's quantity is > 0
/// - `clear` never touches the ledger; reserved stock was already committed
///   at add time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    items: Vec<LineItem>,

    /// When the basket was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Basket {
    /// Creates a new empty basket.
    pub fn new() -> Self {
        Basket {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Records a reservation that has already been taken from the ledger.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Read-only view of the line items, in add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Empties the basket. The ledger is not involved: stock was decremented
    /// at reservation time and stays decremented.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of lines in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before tax) in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Calculates the subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }
}

impl Default for Basket {
    fn default() -> Self {
        Basket::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
