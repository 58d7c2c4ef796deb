//! # market-core: Pure Business Logic for the Market Engine
//!
//! This crate is the **heart** of the market engine. It contains all business
//! rules for a single-store retail operation as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Market Engine Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               UserInteraction boundary (external)               │   │
//! │  │       supplies typed inputs, displays typed outputs             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                market-engine (orchestration)                    │   │
//! │  │    Storefront, Session, AdminService, InventoryAdminOps        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ market-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  basket   │  │ checkout  │  │   │
//! │  │   │StockRecord│  │   Money   │  │  Basket   │  │  Balance  │  │   │
//! │  │   │ Category  │  │  TaxCalc  │  │ LineItem  │  │  Receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  market-db (storage layer)                      │   │
//! │  │          SQLite ledger, migrations, admin directory             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StockRecord, Category, TaxRate, ProductSpec)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`basket`] - Basket and frozen-price line items
//! - [`checkout`] - Balance settlement and checkout totals
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use market_core::money::Money;
//! use market_core::TAX_RATE;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(375); // $3.75
//!
//! // Tax on $3.75 at the fixed 5% store rate = $0.19 (rounded to the cent)
//! let tax = subtotal.calculate_tax(TAX_RATE);
//! assert_eq!(tax.cents(), 19);
//! assert_eq!((subtotal + tax).cents(), 394); // $3.94 on the receipt
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use market_core::Money` instead of
// `use market_core::money::Money`

pub use basket::{Basket, LineItem};
pub use checkout::{Balance, CheckoutEngine, CheckoutOutcome, Receipt};
pub use error::ValidationError;
pub use money::Money;
pub use types::{Category, ProductSpec, StockRecord, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The store's fixed sales tax rate: 5% (500 basis points).
///
/// A single flat rate applies to the whole basket; there are no per-product
/// rates in a single-store operation.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(500);

/// Starting balance for every fresh customer session: $300.00.
///
/// The balance is session-scoped and never persisted; a new session always
/// begins here regardless of what previous sessions spent.
pub const STARTING_BALANCE: Money = Money::from_cents(30_000);
