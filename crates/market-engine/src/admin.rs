//! # Admin Operations
//!
//! Authenticated stock management: add-or-restock and remove.
//!
//! ## Access Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Capability Handoff                                  │
//! │                                                                         │
//! │  AdminService::login(username, password)                                │
//! │       │                                                                 │
//! │       ├── directory.verify ── false ──► Err(AuthFailure)               │
//! │       │                                                                 │
//! │       └── true ──► InventoryAdminOps (the capability)                  │
//! │                         │                                               │
//! │                         ├── add_or_restock(code, qty, details?)        │
//! │                         │     existing code → restock (details ignored)│
//! │                         │     new code + details → create              │
//! │                         │     new code, no details → MissingProductSpec│
//! │                         │                                               │
//! │                         └── remove_stock(code, qty)                    │
//! │                                                                         │
//! │  Stock ops exist only on the handle login returns, so an               │
//! │  unauthenticated caller has no path to them.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use market_core::{ProductSpec, StockRecord};
use market_db::{AdminDirectory, Database};

use crate::error::{EngineError, EngineResult};

// =============================================================================
// Stock Update
// =============================================================================

/// What an add-or-restock actually did.
#[derive(Debug, Clone, PartialEq)]
pub enum StockUpdate {
    /// The code existed; its quantity was increased.
    Restocked(StockRecord),

    /// The code was new; a product was created with the given details.
    Created(StockRecord),
}

impl StockUpdate {
    /// The record after the update, whichever path was taken.
    pub fn record(&self) -> &StockRecord {
        match self {
            StockUpdate::Restocked(record) | StockUpdate::Created(record) => record,
        }
    }
}

// =============================================================================
// Admin Service
// =============================================================================

/// Authentication gate in front of the stock operations.
///
/// Generic over the credential directory so tests (or a future hashed-
/// password store) can swap the verification backend.
#[derive(Debug, Clone)]
pub struct AdminService<D: AdminDirectory> {
    directory: D,
    db: Database,
}

impl<D: AdminDirectory> AdminService<D> {
    /// Creates a service over the given directory and database.
    pub fn new(directory: D, db: Database) -> Self {
        AdminService { directory, db }
    }

    /// Verifies credentials and, on success, hands back the stock-operation
    /// capability.
    ///
    /// ## Errors
    /// - [`EngineError::AuthFailure`] on any credential mismatch; unknown
    ///   username and wrong password are indistinguishable
    pub async fn login(&self, username: &str, password: &str) -> EngineResult<InventoryAdminOps> {
        if !self.directory.verify(username, password).await? {
            warn!(username, "admin login rejected");
            return Err(EngineError::AuthFailure);
        }

        info!(username, "admin logged in");
        Ok(InventoryAdminOps {
            db: self.db.clone(),
        })
    }
}

// =============================================================================
// Inventory Admin Ops
// =============================================================================

/// Stock operations, only obtainable through [`AdminService::login`].
#[derive(Debug, Clone)]
pub struct InventoryAdminOps {
    db: Database,
}

impl InventoryAdminOps {
    /// Adds stock for a code, creating the product if it is new.
    ///
    /// ## Rules
    /// - Existing code: quantity is increased; `details` is ignored even if
    ///   provided (the existing name/price/category win)
    /// - New code with `details`: the product is created with `quantity`
    ///   units on the shelf
    /// - New code without `details`: [`EngineError::MissingProductSpec`],
    ///   and nothing is written
    pub async fn add_or_restock(
        &self,
        code: i64,
        quantity: i64,
        details: Option<ProductSpec>,
    ) -> EngineResult<StockUpdate> {
        let ledger = self.db.inventory();

        if ledger.find(code).await?.is_some() {
            let record = ledger.restock(code, quantity).await?;
            info!(code, quantity, on_shelf = record.quantity, "restocked");
            return Ok(StockUpdate::Restocked(record));
        }

        let spec = details.ok_or(EngineError::MissingProductSpec(code))?;
        let record = ledger.create(code, &spec, quantity).await?;
        info!(code, name = %record.name, quantity, "product created");
        Ok(StockUpdate::Created(record))
    }

    /// Removes units from the shelf (spoilage, damage, corrections).
    ///
    /// Refused if it would take stock below zero; the ledger is then left
    /// untouched.
    pub async fn remove_stock(&self, code: i64, quantity: i64) -> EngineResult<StockRecord> {
        let record = self.db.inventory().deduct(code, quantity).await?;
        info!(code, quantity, on_shelf = record.quantity, "stock removed");
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::Category;
    use market_db::{DbConfig, DbError};

    async fn service() -> AdminService<market_db::SqliteAdminDirectory> {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AdminService::new(db.admins(), db)
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = service().await;
        assert!(service.login("admin1", "pass123").await.is_ok());
        assert!(service.login("manager", "manager-pass").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_failure_is_uniform() {
        let service = service().await;

        let wrong_password = service.login("admin1", "nope").await.unwrap_err();
        let unknown_user = service.login("ghost", "pass123").await.unwrap_err();

        assert!(matches!(wrong_password, EngineError::AuthFailure));
        assert!(matches!(unknown_user, EngineError::AuthFailure));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_add_or_restock_existing_code() {
        let service = service().await;
        let ops = service.login("admin1", "pass123").await.unwrap();

        // Cheese starts at 50
        let update = ops.add_or_restock(1644, 25, None).await.unwrap();
        match update {
            StockUpdate::Restocked(record) => assert_eq!(record.quantity, 75),
            other => panic!("expected restock, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_or_restock_ignores_details_for_existing_code() {
        let service = service().await;
        let ops = service.login("admin1", "pass123").await.unwrap();

        let details = ProductSpec::new("Not Cheese", 9_999, Category::Meats);
        let update = ops.add_or_restock(1644, 10, Some(details)).await.unwrap();

        let record = update.record();
        assert_eq!(record.name, "Cheese");
        assert_eq!(record.price_cents, 200);
        assert_eq!(record.category, Category::Dairy);
        assert_eq!(record.quantity, 60);
    }

    #[tokio::test]
    async fn test_add_or_restock_creates_new_product() {
        let service = service().await;
        let ops = service.login("admin1", "pass123").await.unwrap();

        let details = ProductSpec::new("Yogurt", 125, Category::Dairy);
        let update = ops.add_or_restock(1700, 40, Some(details)).await.unwrap();

        match update {
            StockUpdate::Created(record) => {
                assert_eq!(record.code, 1700);
                assert_eq!(record.name, "Yogurt");
                assert_eq!(record.quantity, 40);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_or_restock_new_code_without_details() {
        let service = service().await;
        let ops = service.login("admin1", "pass123").await.unwrap();

        let err = ops.add_or_restock(1700, 40, None).await.unwrap_err();
        assert!(matches!(err, EngineError::MissingProductSpec(1700)));
    }

    #[tokio::test]
    async fn test_remove_stock() {
        let service = service().await;
        let ops = service.login("admin1", "pass123").await.unwrap();

        // Ice cream starts at 30
        let record = ops.remove_stock(1646, 10).await.unwrap();
        assert_eq!(record.quantity, 20);

        let err = ops.remove_stock(1646, 21).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Ledger(DbError::InsufficientStock {
                available: 20,
                requested: 21,
                ..
            })
        ));
    }
}
