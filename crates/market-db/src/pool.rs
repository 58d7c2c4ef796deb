//! # Database Connection Pool
//!
//! Connection pool creation and configuration for the SQLite store.
//!
//! ## Pool Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Connection Pool Design                              │
//! │                                                                         │
//! │  ┌────────────────┐                                                    │
//! │  │   DbConfig     │  path, pool sizing, timeouts,                      │
//! │  │                │  run_migrations, reset_on_start                    │
//! │  └───────┬────────┘                                                    │
//! │          │ Database::new(config)                                       │
//! │          ▼                                                              │
//! │  ┌────────────────┐     ┌──────────────────────────────────────────┐  │
//! │  │   Database     │────►│  SqlitePool                              │  │
//! │  │                │     │  • WAL journal mode                      │  │
//! │  │ .inventory()   │     │  • NORMAL synchronous                    │  │
//! │  │ .admins()      │     │  • foreign keys ON                       │  │
//! │  │ .pool()        │     │  • create_if_missing                     │  │
//! │  └────────────────┘     └──────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Startup order: connect → migrate → (reset + seed if configured)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use crate::migrations;
use crate::repository::admin::SqliteAdminDirectory;
use crate::repository::inventory::InventoryLedger;
use crate::seed;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("market.db")
///     .max_connections(10)
///     .reset_on_start(true);
/// let db = Database::new(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file, or ":memory:".
    pub database_path: String,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum number of idle connections to keep.
    pub min_connections: u32,

    /// How long to wait for a connection before giving up.
    pub connect_timeout: Duration,

    /// How long a connection may sit idle before being closed.
    pub idle_timeout: Duration,

    /// Run embedded migrations on startup.
    pub run_migrations: bool,

    /// Wipe both tables and re-insert the fixed catalog and admin roster
    /// on startup. Gives every run the same known-good starting state.
    pub reset_on_start: bool,
}

impl DbConfig {
    /// Creates a new config pointing at a database file.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
            reset_on_start: false,
        }
    }

    /// Creates a config for an in-memory database.
    ///
    /// A single connection is required: each connection to `:memory:` gets
    /// its own private database, so a larger pool would see empty tables.
    /// Always seeded, since the database starts blank.
    pub fn in_memory() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
            reset_on_start: true,
        }
    }

    /// Sets the maximum number of pool connections.
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Enables or disables the startup reset + reseed.
    pub fn reset_on_start(mut self, reset: bool) -> Self {
        self.reset_on_start = reset;
        self
    }

    /// Enables or disables running migrations on startup.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new("market.db")
    }
}

// =============================================================================
// Database Handle
// =============================================================================

/// Handle to the database.
///
/// Cheap to clone; all clones share the same underlying pool. Repositories
/// are constructed on demand from a pool clone.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the database, runs migrations, and optionally
    /// resets it to the seeded state.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path, "opening database");

        let options = if config.database_path == ":memory:" {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| crate::error::DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
        };

        // WAL allows concurrent readers while a writer is active; NORMAL
        // sync is durable enough for a single-store ledger.
        let options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .connect_with(options)
            .await
            .map_err(|e| crate::error::DbError::ConnectionFailed(e.to_string()))?;

        if config.run_migrations {
            migrations::run_migrations(&pool).await?;
        }

        if config.reset_on_start {
            seed::reset(&pool).await?;
        }

        debug!("database ready");

        Ok(Self { pool })
    }

    /// Returns the inventory ledger repository.
    pub fn inventory(&self) -> InventoryLedger {
        InventoryLedger::new(self.pool.clone())
    }

    /// Returns the admin credential directory.
    pub fn admins(&self) -> SqliteAdminDirectory {
        SqliteAdminDirectory::new(self.pool.clone())
    }

    /// Returns a reference to the raw pool for ad-hoc queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs a trivial query to confirm the database is reachable.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Closes the pool, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_is_seeded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let count = db.inventory().count().await.unwrap();
        assert_eq!(count, 15);

        db.health_check().await.unwrap();
        db.close().await;
    }

    #[tokio::test]
    async fn test_config_builders() {
        let config = DbConfig::new("test.db")
            .max_connections(10)
            .reset_on_start(true);

        assert_eq!(config.database_path, "test.db");
        assert_eq!(config.max_connections, 10);
        assert!(config.reset_on_start);
        assert!(config.run_migrations);
    }

    #[tokio::test]
    async fn test_reset_restores_seed_quantities() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Drain some stock, then reset
        db.inventory().reserve(1643, 10).await.unwrap();
        seed::reset(db.pool()).await.unwrap();

        let milk = db.inventory().get(1643).await.unwrap();
        assert_eq!(milk.quantity, 100);
        db.close().await;
    }
}
