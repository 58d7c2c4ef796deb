//! # Database Migrations
//!
//! Embedded schema migrations, compiled into the binary at build time.
//! No SQL files ship alongside the executable; `sqlx::migrate!` pulls them
//! from `migrations/sqlite/` at the workspace root.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// All schema migrations, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any pending migrations.
///
/// Idempotent: already-applied migrations are skipped via the
/// `_sqlx_migrations` bookkeeping table.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("running database migrations");

    MIGRATOR.run(pool).await?;

    info!("migrations complete");
    Ok(())
}

/// Returns the (version, description) of every applied migration.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<Vec<(i64, String)>> {
    let rows: Vec<(i64, String)> =
        sqlx::query_as("SELECT version, description FROM _sqlx_migrations ORDER BY version")
            .fetch_all(pool)
            .await?;

    Ok(rows)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Database::new already ran them once; run again
        run_migrations(db.pool()).await.unwrap();

        let status = migration_status(db.pool()).await.unwrap();
        assert!(!status.is_empty());
        db.close().await;
    }
}
