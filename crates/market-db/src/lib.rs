//! # market-db: Storage Layer for the Market Engine
//!
//! This crate provides database access for the market engine.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Market Engine Data Flow                           │
//! │                                                                         │
//! │  Session operation (add_to_basket, add_or_restock, ...)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     market-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │InventoryLedger│    │              │  │   │
//! │  │   │ SqlitePool    │◄───│AdminDirectory │    │ 001_init.sql │  │   │
//! │  │   │ reset_on_start│    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │                      SQLite database file                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - The fixed compatibility catalog and reset routine
//! - [`error`] - Ledger and storage error types
//! - [`repository`] - InventoryLedger and the AdminDirectory capability
//!
//! ## Usage
//!
//! ```rust,ignore
//! use market_db::{Database, DbConfig};
//!
//! // Create database, run migrations, seed the fixed catalog
//! let config = DbConfig::new("path/to/market.db").reset_on_start(true);
//! let db = Database::new(config).await?;
//!
//! // Use the ledger
//! let milk = db.inventory().get(1643).await?;
//! db.inventory().reserve(1643, 2).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::admin::{AdminDirectory, SqliteAdminDirectory};
pub use repository::inventory::InventoryLedger;
