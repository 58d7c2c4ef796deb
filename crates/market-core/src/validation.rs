//! # Validation Module
//!
//! Business rule validation for the market engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UserInteraction boundary (external)                          │
//! │  └── Parses raw text into typed inputs; "invalid input" retries       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  └── quantity > 0, price >= 0, non-empty names, positive codes        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storage (SQLite)                                             │
//! │  └── NOT NULL, PRIMARY KEY, CHECK (quantity >= 0)                     │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity for reserve/restock/deduct operations.
///
/// ## Rules
/// - Must be strictly positive. `restock(code, 0)` is an error, not a no-op.
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a product code.
///
/// ## Rules
/// - Must be strictly positive (codes in the seed catalog run 1643-1657,
///   but any positive integer identifies a product)
pub fn validate_code(code: i64) -> ValidationResult<()> {
    if code <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "code".to_string(),
        });
    }

    Ok(())
}

/// Validates a top-up amount in cents.
///
/// ## Rules
/// - Must be strictly positive; depositing nothing is a caller mistake
pub fn validate_deposit_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "deposit".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Ice cream").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(150).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code(1643).is_ok());
        assert!(validate_code(0).is_err());
        assert!(validate_code(-5).is_err());
    }

    #[test]
    fn test_validate_deposit_cents() {
        assert!(validate_deposit_cents(500).is_ok());
        assert!(validate_deposit_cents(0).is_err());
        assert!(validate_deposit_cents(-500).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Ice cream").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }
}
