//! # Error Types
//!
//! Validation error types for market-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  market-core errors (this file)                                        │
//! │  └── ValidationError  - Input/business-rule validation failures        │
//! │                                                                         │
//! │  market-db errors (separate crate)                                     │
//! │  └── DbError          - Ledger + storage failures                      │
//! │                         (NotFound, DuplicateCode, InsufficientStock)   │
//! │                                                                         │
//! │  market-engine errors (separate crate)                                 │
//! │  └── EngineError      - Session/admin orchestration failures           │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → EngineError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, limits)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable by the caller; nothing here aborts

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// A non-positive quantity, a negative price, a blank name. These are raised
/// before any state changes, so a rejected call is always a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive. A quantity of zero is rejected,
    /// never treated as a no-op success.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
