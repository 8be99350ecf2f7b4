//! # Validation Module
//!
//! Input validation rules for Folio POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console command parsing                                       │
//! │  ├── Argument counts, numeric parsing                                   │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field rules                                     │
//! │  ├── Titles non-empty and bounded                                       │
//! │  └── Stock and prices non-negative                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (inventory, cart, checkout)                    │
//! │  ├── Title uniqueness                                                   │
//! │  └── Stock sufficiency                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use folio_core::validation::validate_title;
///
/// assert!(validate_title("Dune").is_ok());
/// assert!(validate_title("").is_err());
/// assert!(validate_title(&"A".repeat(300)).is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (sold out, still listed)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (giveaways)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
