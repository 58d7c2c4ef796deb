//! # Seed Data
//!
//! The fixed product catalog and admin roster, plus the reset routine that
//! restores them.
//!
//! Codes, names, prices, and quantities are load-bearing: downstream tooling
//! and the acceptance tests address products by these exact codes, so the
//! catalog must not drift.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

// =============================================================================
// Fixed Catalog
// =============================================================================

/// The 15-product catalog: (code, name, price_cents, category, quantity).
pub const SEED_PRODUCTS: &[(i64, &str, i64, &str, i64)] = &[
    // Dairy section
    (1643, "Milk", 150, "Dairy", 100),
    (1644, "Cheese", 200, "Dairy", 50),
    (1645, "Butter", 175, "Dairy", 75),
    (1646, "Ice cream", 350, "Dairy", 30),
    (1647, "Cream", 250, "Dairy", 40),
    // Fruits section
    (1648, "Apple", 75, "Fruits", 150),
    (1649, "Banana", 60, "Fruits", 120),
    (1650, "Orange", 80, "Fruits", 80),
    (1651, "Strawberry", 220, "Fruits", 60),
    (1652, "Grapes", 250, "Fruits", 70),
    // Meats section
    (1653, "Chicken", 500, "Meats", 90),
    (1654, "Beef", 600, "Meats", 40),
    (1655, "Pork", 550, "Meats", 50),
    (1656, "Lamb", 750, "Meats", 25),
    (1657, "Turkey", 575, "Meats", 35),
];

/// The admin roster: (username, password).
///
/// Credentials are stored and compared as plain text. The directory sits
/// behind the `AdminDirectory` trait so a hashing implementation can be
/// swapped in without touching callers.
pub const SEED_ADMINS: &[(&str, &str)] = &[
    ("admin1", "pass123"),
    ("admin2", "admin-pass"),
    ("manager", "manager-pass"),
    ("supervisor", "sup123"),
    ("user1", "userpass"),
];

// =============================================================================
// Reset Routine
// =============================================================================

/// Wipes both tables and re-inserts the fixed catalog and admin roster.
///
/// Runs in a single transaction: observers never see a half-seeded store.
pub async fn reset(pool: &SqlitePool) -> DbResult<()> {
    info!("resetting database to seeded state");

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM inventory").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM admins").execute(&mut *tx).await?;

    let now = Utc::now();

    for (i, (code, name, price_cents, category, quantity)) in SEED_PRODUCTS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO inventory (code, name, price_cents, category, quantity, seq, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        )
        .bind(code)
        .bind(name)
        .bind(price_cents)
        .bind(category)
        .bind(quantity)
        .bind((i + 1) as i64)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    for (username, password) in SEED_ADMINS {
        sqlx::query("INSERT INTO admins (username, password) VALUES (?1, ?2)")
            .bind(username)
            .bind(password)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        products = SEED_PRODUCTS.len(),
        admins = SEED_ADMINS.len(),
        "seed complete"
    );

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use market_core::Category;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(SEED_PRODUCTS.len(), 15);
        assert_eq!(SEED_ADMINS.len(), 5);

        // Codes are unique and contiguous from 1643
        for (i, (code, ..)) in SEED_PRODUCTS.iter().enumerate() {
            assert_eq!(*code, 1643 + i as i64);
        }

        // Five products per section
        for section in Category::SECTIONS {
            let n = SEED_PRODUCTS
                .iter()
                .filter(|(_, _, _, cat, _)| *cat == section.as_str())
                .count();
            assert_eq!(n, 5, "section {section} should hold 5 products");
        }
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Seeded once by Database::new; reset twice more
        reset(db.pool()).await.unwrap();
        reset(db.pool()).await.unwrap();

        assert_eq!(db.inventory().count().await.unwrap(), 15);

        let lamb = db.inventory().get(1656).await.unwrap();
        assert_eq!(lamb.name, "Lamb");
        assert_eq!(lamb.price_cents, 750);
        assert_eq!(lamb.quantity, 25);
        db.close().await;
    }
}
