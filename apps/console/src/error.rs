//! # Status Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Folio POS                              │
//! │                                                                         │
//! │  Operator                        Rust Backend                           │
//! │  ────────                        ────────────                           │
//! │                                                                         │
//! │  folio> add Dune 7                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<String, StatusError>                                     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage error? ── StoreError::Table("...") ──────┐              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Domain error? ─── CoreError::InsufficientStock ─ StatusError ──►│  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄─────────────────────────────────────────────────────────────────────│
//! │                                                                         │
//! │  "Not enough stock for 'Dune': available 5, requested 7"                │
//! │                                                                         │
//! │  Every error becomes one printable line; the loop never exits on one.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_core::CoreError;
use folio_store::StoreError;

/// Error returned from console commands.
///
/// Carries a machine-readable `code` and the human-readable `message`
/// the prompt loop prints.
#[derive(Debug, Clone)]
pub struct StatusError {
    /// Machine-readable error code for tests and future scripting
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Referenced title doesn't exist
    NotFound,

    /// Title already present in inventory
    Duplicate,

    /// Input validation failed
    Validation,

    /// Cart limits exceeded
    Cart,

    /// Checkout quantity exceeds stock
    InsufficientStock,

    /// Table file or receipt operation failed
    Storage,

    /// Command line could not be parsed
    Usage,
}

impl StatusError {
    /// Creates a new status error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StatusError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error (bad arguments or unknown command).
    pub fn usage(message: impl Into<String>) -> Self {
        StatusError::new(ErrorCode::Usage, message)
    }
}

/// Converts domain errors to status errors.
impl From<CoreError> for StatusError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::BookNotFound { .. } => ErrorCode::NotFound,
            CoreError::DuplicateTitle { .. } => ErrorCode::Duplicate,
            CoreError::InvalidQuantity { .. } => ErrorCode::Validation,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => ErrorCode::Cart,
            CoreError::Validation(_) => ErrorCode::Validation,
        };
        StatusError::new(code, err.to_string())
    }
}

/// Converts storage errors to status errors.
impl From<StoreError> for StatusError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => StatusError::from(core),
            other => {
                // Log the full error; the operator gets the short form.
                tracing::error!(error = %other, "storage operation failed");
                StatusError::new(ErrorCode::Storage, other.to_string())
            }
        }
    }
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StatusError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = StatusError::from(CoreError::InsufficientStock {
            title: "Dune".to_string(),
            available: 5,
            requested: 7,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(
            err.message,
            "Not enough stock for 'Dune': available 5, requested 7"
        );
    }

    #[test]
    fn test_store_error_unwraps_domain_errors() {
        let err = StatusError::from(StoreError::Core(CoreError::BookNotFound {
            title: "Dune".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Book not found: Dune");
    }
}
