//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  folio-store errors (separate crate)                                    │
//! │  └── StoreError       - Table file operation failures                   │
//! │                                                                         │
//! │  Console errors (in app)                                                │
//! │  └── StatusError      - What the operator sees (one line of text)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → StatusError → screen  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is local and recoverable; nothing here is fatal

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are caught at the
/// operation boundary and translated to a status message for the operator.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No book with the given title exists in inventory.
    ///
    /// ## When This Occurs
    /// - Adding an unknown title to the cart
    /// - Editing or removing a title that was never added
    /// - Checkout validation, when a carted title was removed before checkout
    #[error("Book not found: {title}")]
    BookNotFound { title: String },

    /// A book with the given title already exists.
    ///
    /// Titles are the table's unique key; the match is case-sensitive and
    /// exact.
    #[error("Book '{title}' already exists")]
    DuplicateTitle { title: String },

    /// A non-positive quantity was supplied to a cart operation.
    #[error("Invalid quantity: {quantity} (must be positive)")]
    InvalidQuantity { quantity: i64 },

    /// The cart requests more units of a title than inventory holds.
    ///
    /// ## When This Occurs
    /// Checkout validation sums the requested quantity per title across all
    /// cart lines, so two lines of 3 and 4 against a stock of 5 fail here
    /// with `requested: 7`.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout
    ///      │
    ///      ▼
    /// Validate cart: Dune needs 7, stock has 5
    ///      │
    ///      ▼
    /// InsufficientStock { title: "Dune", available: 5, requested: 7 }
    ///      │
    ///      ▼
    /// Console shows: "Not enough stock for 'Dune': available 5, requested 7"
    /// ```
    #[error("Not enough stock for '{title}': available {available}, requested {requested}")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
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
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            title: "Dune".to_string(),
            available: 5,
            requested: 7,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for 'Dune': available 5, requested 7"
        );

        let err = CoreError::DuplicateTitle {
            title: "Dune".to_string(),
        };
        assert_eq!(err.to_string(), "Book 'Dune' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("stock must be between 0"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
