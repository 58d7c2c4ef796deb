//! # Domain Types
//!
//! Core domain types used throughout the market engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockRecord   │   │    Category     │   │   ProductSpec   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (i64 PK)  │   │  Dairy          │   │  name           │       │
//! │  │  name           │   │  Fruits         │   │  price_cents    │       │
//! │  │  price_cents    │   │  Meats          │   │  category       │       │
//! │  │  category       │   │  Other(String)  │   └─────────────────┘       │
//! │  │  quantity       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    TaxRate      │                                                   │
//! │  │  ─────────────  │                                                   │
//! │  │  bps (u32)      │                                                   │
//! │  │  500 = 5%       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A `StockRecord` is identified by its integer `code` for the life of the
//! ledger. There is no secondary UUID: the store hands codes out itself and
//! the ledger rejects duplicates at create time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (this store's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// A store section a product is shelved under.
///
/// The three seeded sections get their own variants; `Other` keeps the set
/// open so an admin can introduce a new section without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dairy,
    Fruits,
    Meats,
    Other(String),
}

impl Category {
    /// The seeded sections, in the order the store displays them.
    pub const SECTIONS: [Category; 3] = [Category::Dairy, Category::Fruits, Category::Meats];

    /// Returns the category's canonical label (also its storage form).
    pub fn as_str(&self) -> &str {
        match self {
            Category::Dairy => "Dairy",
            Category::Fruits => "Fruits",
            Category::Meats => "Meats",
            Category::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a storage label back into a category.
///
/// Unknown labels become `Other`, never an error: the ledger must round-trip
/// whatever section names admins have created.
impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Dairy" => Category::Dairy,
            "Fruits" => Category::Fruits,
            "Meats" => Category::Meats,
            other => Category::Other(other.to_string()),
        }
    }
}

// =============================================================================
// Stock Record
// =============================================================================

/// A product entry in the stock ledger.
///
/// ## Invariants
/// - `quantity` is never negative (enforced by the ledger and by a storage
///   CHECK constraint)
/// - `code` uniquely identifies the record for the life of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product code - primary identity, assigned at create time.
    pub code: i64,

    /// Display name shown to customers and admins.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Store section this product is shelved under.
    pub category: Category,

    /// Units currently on hand.
    pub quantity: i64,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl StockRecord {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units could be taken without going negative.
    #[inline]
    pub fn can_cover(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

// =============================================================================
// Product Spec
// =============================================================================

/// The fields needed to create a brand-new stock record.
///
/// Admin add-or-restock only requires these when the code is not already in
/// the ledger; restocking an existing code needs just a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub price_cents: i64,
    pub category: Category,
}

impl ProductSpec {
    /// Creates a spec for a new product.
    pub fn new(name: impl Into<String>, price_cents: i64, category: Category) -> Self {
        ProductSpec {
            name: name.into(),
            price_cents,
            category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_category_round_trip() {
        for section in Category::SECTIONS {
            let label = section.as_str().to_string();
            assert_eq!(Category::from(label.as_str()), section);
        }

        let bakery = Category::from("Bakery");
        assert_eq!(bakery, Category::Other("Bakery".to_string()));
        assert_eq!(bakery.as_str(), "Bakery");
    }

    #[test]
    fn test_section_display_order() {
        let labels: Vec<&str> = Category::SECTIONS.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["Dairy", "Fruits", "Meats"]);
    }

    #[test]
    fn test_stock_record_can_cover() {
        let record = StockRecord {
            code: 1643,
            name: "Milk".to_string(),
            price_cents: 150,
            category: Category::Dairy,
            quantity: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(record.can_cover(5));
        assert!(!record.can_cover(6));
        assert_eq!(record.price().cents(), 150);
    }
}
