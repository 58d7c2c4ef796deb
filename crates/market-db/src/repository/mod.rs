//! # Repository Layer
//!
//! Data access types for the market engine, one struct per aggregate.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Repository Design                                   │
//! │                                                                         │
//! │  ┌──────────────────┐      ┌──────────────────┐                        │
//! │  │ InventoryLedger  │      │ AdminDirectory   │                        │
//! │  │                  │      │ (trait)          │                        │
//! │  │ find / get       │      │                  │                        │
//! │  │ list_by_category │      │ verify           │                        │
//! │  │ reserve / deduct │      │        ▲         │                        │
//! │  │ restock / create │      │        │         │                        │
//! │  └────────┬─────────┘      │ SqliteAdmin-     │                        │
//! │           │                │ Directory        │                        │
//! │           │                └────────┬─────────┘                        │
//! │           └───────────┬─────────────┘                                  │
//! │                       ▼                                                 │
//! │                  SqlitePool (shared, cloned per repository)            │
//! │                                                                         │
//! │  Each repository owns a pool clone; clones are cheap Arc handles.      │
//! │  Stock mutations are single conditional statements, so two sessions    │
//! │  racing for the last unit cannot both win.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod inventory;
