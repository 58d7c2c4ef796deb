//! # Ledger Error Types
//!
//! Error types for ledger and storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module)                                                 │
//! │   ├── domain outcomes: NotFound, DuplicateCode, InsufficientStock      │
//! │   │   (constructed explicitly by the ledger, recoverable by caller)   │
//! │   └── storage failures: ConnectionFailed, QueryFailed, ...            │
//! │       (fatal to the triggering operation, propagated, never ignored)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EngineError (market-engine) → caller decides: prompt, retry, abort   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use market_core::ValidationError;

/// Ledger and storage operation errors.
///
/// The first four variants are recoverable business outcomes of ledger
/// operations; the rest wrap infrastructure failures from sqlx.
#[derive(Debug, Error)]
pub enum DbError {
    /// No stock record exists for the given product code.
    #[error("no product with code {code}")]
    NotFound { code: i64 },

    /// Create was called with a code that is already in the ledger.
    /// First writer wins; the existing record is never overwritten.
    #[error("product code {code} already exists")]
    DuplicateCode { code: i64 },

    /// Reserve/deduct asked for more units than are on hand. The ledger is
    /// left exactly as it was.
    #[error("insufficient stock for code {code}: available {available}, requested {requested}")]
    InsufficientStock {
        code: i64,
        available: i64,
        requested: i64,
    },

    /// A business-rule validation failed before anything was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a product code.
    pub fn not_found(code: i64) -> Self {
        DbError::NotFound { code }
    }

    /// Checks whether the error is one of the recoverable business outcomes
    /// (as opposed to a storage failure).
    pub fn is_business_outcome(&self) -> bool {
        matches!(
            self,
            DbError::NotFound { .. }
                | DbError::DuplicateCode { .. }
                | DbError::InsufficientStock { .. }
                | DbError::Validation(_)
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// Only infrastructure variants come from here: the ledger constructs the
/// domain variants itself (conditional UPDATEs and ON CONFLICT clauses tell
/// it exactly which outcome occurred, no message parsing required).
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for ledger and storage operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
