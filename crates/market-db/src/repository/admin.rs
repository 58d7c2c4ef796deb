//! # Admin Credential Directory
//!
//! Username/password verification for administrative access.
//!
//! Credentials are compared by exact match against the `admins` table.
//! The trait seam exists so a hashed-password directory (or an external
//! identity provider) can replace the SQLite implementation without any
//! caller changes.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Capability to verify admin credentials.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Returns `true` when the username/password pair matches a known admin.
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller; both simply fail verification.
    async fn verify(&self, username: &str, password: &str) -> DbResult<bool>;
}

/// SQLite-backed directory with plain-text equality matching.
#[derive(Debug, Clone)]
pub struct SqliteAdminDirectory {
    pool: SqlitePool,
}

impl SqliteAdminDirectory {
    /// Creates a directory over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminDirectory for SqliteAdminDirectory {
    async fn verify(&self, username: &str, password: &str) -> DbResult<bool> {
        debug!(username, "verifying admin credentials");

        let row: Option<(String,)> =
            sqlx::query_as("SELECT username FROM admins WHERE username = ?1 AND password = ?2")
                .bind(username)
                .bind(password)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.is_some())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
