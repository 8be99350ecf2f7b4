//! # Storage Error Types
//!
//! Error types for table file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StatusError (in console app) ← One line of text for the operator      │
//! │                                                                         │
//! │  Domain failures (duplicate title, missing book, short stock) stay      │
//! │  typed as CoreError and travel inside StoreError::Core.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use folio_core::CoreError;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A business rule was violated.
    ///
    /// ## When This Occurs
    /// - Adding a duplicate title
    /// - Editing or removing an unknown title
    /// - Checkout validation failures
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Raw file I/O failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - Receipt file cannot be written
    /// - Disk full, permissions
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file could not be read or written.
    ///
    /// ## When This Occurs
    /// - Malformed rows in a hand-edited table file
    /// - Type mismatch in a cell (e.g. text in the Stock column)
    #[error("Table file error: {0}")]
    Table(#[from] csv::Error),

    /// The receipt document could not be written.
    #[error("Failed to write receipt to {path}: {source}")]
    Receipt {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through_transparently() {
        let err: StoreError = CoreError::BookNotFound {
            title: "Dune".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Book not found: Dune");
    }

    #[test]
    fn test_receipt_error_names_the_path() {
        let err = StoreError::Receipt {
            path: PathBuf::from("/data/receipt.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/receipt.txt"));
    }
}
