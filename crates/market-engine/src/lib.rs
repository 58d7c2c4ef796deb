//! # market-engine: Session Orchestration
//!
//! Ties the pure domain logic (market-core) to the storage layer (market-db):
//! customer shopping sessions, checkout settlement, and authenticated admin
//! stock operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Market Engine Layers                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  market-engine (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐              ┌───────────────────────────┐ │   │
//! │  │   │  Storefront   │              │  AdminService             │ │   │
//! │  │   │               │              │    └─ login ──►           │ │   │
//! │  │   │ shelves       │              │  InventoryAdminOps        │ │   │
//! │  │   │ add_to_basket │              │    add_or_restock         │ │   │
//! │  │   │ top_up        │              │    remove_stock           │ │   │
//! │  │   │ checkout      │              │                           │ │   │
//! │  │   │ end_session   │              │                           │ │   │
//! │  │   └───────┬───────┘              └─────────────┬─────────────┘ │   │
//! │  └───────────┼────────────────────────────────────┼───────────────┘   │
//! │              ▼                                    ▼                    │
//! │   market-core (Basket, CheckoutEngine)   market-db (ledger, admins)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use market_db::{Database, DbConfig};
//! use market_engine::{AdminService, Storefront};
//!
//! let db = Database::new(DbConfig::new("market.db").reset_on_start(true)).await?;
//!
//! // Customer side
//! let store = Storefront::new(db.clone());
//! let mut session = store.open_session();
//! store.add_to_basket(&mut session, 1643, 2).await?;
//! let outcome = store.checkout(&mut session);
//!
//! // Admin side
//! let admin = AdminService::new(db.admins(), db);
//! let ops = admin.login("admin1", "pass123").await?;
//! ops.add_or_restock(1643, 50, None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod error;
pub mod session;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use admin::{AdminService, InventoryAdminOps, StockUpdate};
pub use error::{EngineError, EngineResult};
pub use session::{AbandonPolicy, Session};
pub use storefront::{ShelfSection, Storefront};
