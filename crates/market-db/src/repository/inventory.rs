//! # Inventory Ledger
//!
//! The authoritative record of what is on the shelves. All stock movement
//! goes through this type; nothing else writes the `inventory` table.
//!
//! ## Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Reserve: check and decrement in one statement              │
//! │                                                                         │
//! │  UPDATE inventory                                                       │
//! │     SET quantity = quantity - ?2                                        │
//! │   WHERE code = ?1 AND quantity >= ?2                                    │
//! │                                                                         │
//! │  rows_affected == 1  →  reservation succeeded, fetch updated record    │
//! │  rows_affected == 0  →  follow-up SELECT classifies the miss:          │
//! │                          no row        → NotFound                      │
//! │                          row exists    → InsufficientStock             │
//! │                                                                         │
//! │  Two sessions racing for the last unit: SQLite serializes writers,    │
//! │  so exactly one UPDATE matches and the other reports the shortage.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use market_core::validation::{
    validate_code, validate_price_cents, validate_product_name, validate_quantity,
};
use market_core::{Category, ProductSpec, StockRecord};

use crate::error::{DbError, DbResult};

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw row shape as stored; converted to [`StockRecord`] at the boundary.
#[derive(Debug, sqlx::FromRow)]
struct StockRow {
    code: i64,
    name: String,
    price_cents: i64,
    category: String,
    quantity: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StockRow> for StockRecord {
    fn from(row: StockRow) -> Self {
        StockRecord {
            code: row.code,
            name: row.name,
            price_cents: row.price_cents,
            category: Category::from(row.category.as_str()),
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// Repository over the `inventory` table.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    pool: SqlitePool,
}

impl InventoryLedger {
    /// Creates a ledger over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Looks up a product by code. Returns `None` if no such code exists.
    pub async fn find(&self, code: i64) -> DbResult<Option<StockRecord>> {
        debug!(code, "finding product");

        let row = sqlx::query_as::<_, StockRow>(
            "SELECT code, name, price_cents, category, quantity, created_at, updated_at
             FROM inventory WHERE code = ?1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StockRecord::from))
    }

    /// Looks up a product by code, failing with [`DbError::NotFound`] if
    /// the code is unknown.
    pub async fn get(&self, code: i64) -> DbResult<StockRecord> {
        self.find(code).await?.ok_or(DbError::NotFound { code })
    }

    /// Lists every product in a section, in the order products were first
    /// added to the ledger.
    pub async fn list_by_category(&self, category: &Category) -> DbResult<Vec<StockRecord>> {
        debug!(category = %category, "listing section");

        let rows = sqlx::query_as::<_, StockRow>(
            "SELECT code, name, price_cents, category, quantity, created_at, updated_at
             FROM inventory WHERE category = ?1 ORDER BY seq",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StockRecord::from).collect())
    }

    /// Lists the distinct store sections, ordered by when each section
    /// first received a product. The seeded catalog yields Dairy, Fruits,
    /// Meats; sections created later by admins append after them.
    pub async fn list_sections(&self) -> DbResult<Vec<Category>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT category FROM inventory GROUP BY category ORDER BY MIN(seq)",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(label,)| Category::from(label.as_str()))
            .collect())
    }

    /// Counts products in the ledger.
    pub async fn count(&self) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Stock Movement
    // =========================================================================

    /// Reserves `quantity` units for a basket, decrementing shelf stock.
    ///
    /// Check and decrement happen in one conditional statement, so stock
    /// can never go negative and a race for the last unit has exactly one
    /// winner. Returns the record as it stands after the reservation.
    ///
    /// ## Errors
    /// - [`DbError::Validation`] if `quantity` is not positive
    /// - [`DbError::NotFound`] if the code is unknown
    /// - [`DbError::InsufficientStock`] if fewer than `quantity` units remain
    pub async fn reserve(&self, code: i64, quantity: i64) -> DbResult<StockRecord> {
        debug!(code, quantity, "reserving stock");
        self.decrement(code, quantity).await
    }

    /// Removes `quantity` units from the shelf outright (admin operation,
    /// e.g. spoilage or damage). Same rules as [`reserve`](Self::reserve).
    pub async fn deduct(&self, code: i64, quantity: i64) -> DbResult<StockRecord> {
        debug!(code, quantity, "deducting stock");
        self.decrement(code, quantity).await
    }

    /// Shared conditional decrement used by reserve and deduct.
    async fn decrement(&self, code: i64, quantity: i64) -> DbResult<StockRecord> {
        validate_quantity(quantity)?;

        let result = sqlx::query(
            "UPDATE inventory
             SET quantity = quantity - ?2, updated_at = ?3
             WHERE code = ?1 AND quantity >= ?2",
        )
        .bind(code)
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Classify the miss: unknown code vs not enough on hand.
            let record = self.get(code).await?;
            return Err(DbError::InsufficientStock {
                code,
                available: record.quantity,
                requested: quantity,
            });
        }

        self.get(code).await
    }

    /// Adds `quantity` units to an existing product's shelf stock.
    /// Returns the record as it stands after the restock.
    ///
    /// ## Errors
    /// - [`DbError::Validation`] if `quantity` is not positive
    /// - [`DbError::NotFound`] if the code is unknown
    pub async fn restock(&self, code: i64, quantity: i64) -> DbResult<StockRecord> {
        debug!(code, quantity, "restocking");

        validate_quantity(quantity)?;

        let result = sqlx::query(
            "UPDATE inventory
             SET quantity = quantity + ?2, updated_at = ?3
             WHERE code = ?1",
        )
        .bind(code)
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { code });
        }

        self.get(code).await
    }

    /// Creates a new product with an initial quantity.
    ///
    /// First writer wins: if the code already exists, nothing is written
    /// and [`DbError::DuplicateCode`] is returned. The `seq` column records
    /// insertion order so section listings stay stable.
    ///
    /// ## Errors
    /// - [`DbError::Validation`] on a non-positive code or quantity, a
    ///   negative price, or a blank name
    /// - [`DbError::DuplicateCode`] if the code is taken
    pub async fn create(
        &self,
        code: i64,
        spec: &ProductSpec,
        quantity: i64,
    ) -> DbResult<StockRecord> {
        debug!(code, name = %spec.name, quantity, "creating product");

        validate_code(code)?;
        validate_product_name(&spec.name)?;
        validate_price_cents(spec.price_cents)?;
        validate_quantity(quantity)?;

        let result = sqlx::query(
            "INSERT INTO inventory (code, name, price_cents, category, quantity, seq, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5,
                     (SELECT COALESCE(MAX(seq), 0) + 1 FROM inventory),
                     ?6, ?6)
             ON CONFLICT(code) DO NOTHING",
        )
        .bind(code)
        .bind(spec.name.trim())
        .bind(spec.price_cents)
        .bind(spec.category.as_str())
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::DuplicateCode { code });
        }

        self.get(code).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
