//! # Engine Error Types
//!
//! Orchestration-level errors. Validation and ledger errors pass through
//! transparently; only failures that originate at this layer (authentication,
//! a missing product spec) get their own variants.

use thiserror::Error;

use market_core::ValidationError;
use market_db::DbError;

/// Errors from session and admin orchestration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Username/password pair did not match any admin. Deliberately carries
    /// no detail: an unknown username and a wrong password look identical.
    #[error("invalid credentials")]
    AuthFailure,

    /// Add-or-restock hit an unknown code but was given no product details
    /// to create it with.
    #[error("product {0} does not exist and no product details were provided")]
    MissingProductSpec(i64),

    /// Input validation failed before any state changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ledger or storage layer failed.
    #[error(transparent)]
    Ledger(#[from] DbError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_reveals_nothing() {
        assert_eq!(EngineError::AuthFailure.to_string(), "invalid credentials");
    }

    #[test]
    fn test_ledger_errors_pass_through() {
        let err: EngineError = DbError::NotFound { code: 1643 }.into();
        assert_eq!(err.to_string(), "no product with code 1643");
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let err: EngineError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "quantity must be positive");
    }
}
