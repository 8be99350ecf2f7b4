//! # Receipt Generator
//!
//! Renders a finalized purchase into a text document at a fixed path.
//!
//! No business logic lives here: formatting is a pure function from
//! (store name, timestamp, lines, total) to text, and the writer just puts
//! that text on disk, overwriting the previous receipt.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use folio_core::{CartLine, Money, TABLE_TIME_FORMAT};

use crate::error::{StoreError, StoreResult};

/// Formats a receipt document.
///
/// ## Layout
/// ```text
/// Folio Books Receipt
/// Date: 2026-08-05 14:03:22
///
/// 2 x Dune @ $499.00
/// 1 x Emma @ $120.00
///
/// Total: $1118.00
/// ```
pub fn format_receipt(
    store_name: &str,
    generated_at: DateTime<Utc>,
    lines: &[CartLine],
    total: Money,
) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("{store_name} Receipt\n"));
    doc.push_str(&format!(
        "Date: {}\n\n",
        generated_at.format(TABLE_TIME_FORMAT)
    ));

    for line in lines {
        doc.push_str(&format!(
            "{} x {} @ {}\n",
            line.quantity, line.title, line.unit_price
        ));
    }

    doc.push_str(&format!("\nTotal: {total}\n"));
    doc
}

/// Writes receipts to the fixed well-known path.
#[derive(Debug)]
pub struct ReceiptWriter {
    path: PathBuf,
    store_name: String,
}

impl ReceiptWriter {
    /// Creates a writer targeting `path`, branding receipts with `store_name`.
    pub fn new(path: impl Into<PathBuf>, store_name: impl Into<String>) -> Self {
        ReceiptWriter {
            path: path.into(),
            store_name: store_name.into(),
        }
    }

    /// Returns the receipt path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders and writes the receipt, overwriting any prior one.
    pub fn write(
        &self,
        lines: &[CartLine],
        total: Money,
        generated_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let doc = format_receipt(&self.store_name, generated_at, lines, total);
        fs::write(&self.path, doc).map_err(|source| StoreError::Receipt {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), lines = lines.len(), "receipt written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample_lines() -> Vec<CartLine> {
        vec![
            CartLine {
                title: "Dune".to_string(),
                quantity: 2,
                unit_price: Money::from_cents(49900),
            },
            CartLine {
                title: "Emma".to_string(),
                quantity: 1,
                unit_price: Money::from_cents(12000),
            },
        ]
    }

    #[test]
    fn test_format_receipt() {
        let generated_at = Utc.with_ymd_and_hms(2026, 8, 5, 14, 3, 22).unwrap();
        let doc = format_receipt(
            "Folio Books",
            generated_at,
            &sample_lines(),
            Money::from_cents(111800),
        );

        assert_eq!(
            doc,
            "Folio Books Receipt\n\
             Date: 2026-08-05 14:03:22\n\
             \n\
             2 x Dune @ $499.00\n\
             1 x Emma @ $120.00\n\
             \n\
             Total: $1118.00\n"
        );
    }

    #[test]
    fn test_write_overwrites_previous_receipt() {
        let dir = TempDir::new().unwrap();
        let writer = ReceiptWriter::new(dir.path().join("receipt.txt"), "Folio Books");
        let generated_at = Utc.with_ymd_and_hms(2026, 8, 5, 14, 3, 22).unwrap();

        writer
            .write(&sample_lines(), Money::from_cents(111800), generated_at)
            .unwrap();

        let lines = vec![CartLine {
            title: "Zazie".to_string(),
            quantity: 1,
            unit_price: Money::from_cents(9900),
        }];
        writer
            .write(&lines, Money::from_cents(9900), generated_at)
            .unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert!(contents.contains("1 x Zazie @ $99.00"));
        assert!(!contents.contains("Dune"));
    }
}
