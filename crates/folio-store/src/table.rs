//! # Table Store
//!
//! Generic load/save of a typed row set to a CSV file.
//!
//! ## File Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Table File Layout                                    │
//! │                                                                         │
//! │  Title,Author,Publisher,Stock,Price        ◄── header row, fixed order  │
//! │  Dune,Frank Herbert,Ace,5,499.00           ◄── one row per record       │
//! │  Emma,Jane Austen,Penguin,3,120.00                                      │
//! │                                                                         │
//! │  • Missing file at startup → created with the header row, zero rows     │
//! │  • Pre-existing files load as-is (no schema migration)                  │
//! │  • Every save is a whole-file rewrite; there is no journal or diff      │
//! │  • Concurrent external modification is undefined behavior               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Whole-File Rewrite?
//! The tables are small (one store's inventory and history). Rewriting the
//! file keeps the persistence semantics trivially last-write-wins and the
//! files diff-able; an indexed store would change the contract.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreResult;

// =============================================================================
// Table Row
// =============================================================================

/// A type that maps to one row of a table file.
///
/// `HEADERS` pins the column names and their order; serde field order on the
/// implementing type must match, because rows are written headerless after
/// the explicit header record.
pub trait TableRow: Serialize + DeserializeOwned {
    /// Column names, in table order.
    const HEADERS: &'static [&'static str];
}

// =============================================================================
// Table File
// =============================================================================

/// Handle to one table file.
///
/// ## Usage
/// ```rust,ignore
/// let table: TableFile<Book> = TableFile::new(dir.join("books_inventory.csv"));
/// let rows = table.load_or_init()?;
/// table.save(&rows)?;
/// ```
#[derive(Debug, Clone)]
pub struct TableFile<T> {
    path: PathBuf,
    _row: PhantomData<T>,
}

impl<T: TableRow> TableFile<T> {
    /// Creates a handle for the table at `path`. No file access happens yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TableFile {
            path: path.into(),
            _row: PhantomData,
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all rows, creating a header-only file if none exists.
    pub fn load_or_init(&self) -> StoreResult<Vec<T>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "table file missing, creating empty table");
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }

        debug!(path = %self.path.display(), rows = rows.len(), "table loaded");
        Ok(rows)
    }

    /// Rewrites the whole file: header row first, then every row in order.
    pub fn save(&self, rows: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Headers are written explicitly so an empty table still carries the
        // column contract; rows then serialize headerless.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(T::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), rows = rows.len(), "table saved");
        Ok(())
    }
}

// =============================================================================
// Row Implementations
// =============================================================================

impl TableRow for folio_core::Book {
    const HEADERS: &'static [&'static str] = &["Title", "Author", "Publisher", "Stock", "Price"];
}

impl TableRow for folio_core::SaleRecord {
    const HEADERS: &'static [&'static str] =
        &["Date", "Title", "Quantity", "PricePerUnit", "Total"];
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use folio_core::{Book, Money, SaleRecord};
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let table: TableFile<Book> = TableFile::new(dir.path().join("books_inventory.csv"));

        let rows = table.load_or_init().unwrap();
        assert!(rows.is_empty());

        let contents = fs::read_to_string(table.path()).unwrap();
        assert_eq!(contents, "Title,Author,Publisher,Stock,Price\n");
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let table: TableFile<Book> = TableFile::new(dir.path().join("books_inventory.csv"));

        let rows = vec![
            Book::new("Dune", "Frank Herbert", "Ace", 5, Money::from_cents(49900)),
            Book::new("Emma", "Jane Austen", "Penguin", 3, Money::from_cents(12000)),
        ];
        table.save(&rows).unwrap();

        let contents = fs::read_to_string(table.path()).unwrap();
        assert_eq!(
            contents,
            "Title,Author,Publisher,Stock,Price\n\
             Dune,Frank Herbert,Ace,5,499.00\n\
             Emma,Jane Austen,Penguin,3,120.00\n"
        );

        let reloaded = table.load_or_init().unwrap();
        assert_eq!(reloaded, rows);
    }

    #[test]
    fn test_loads_preexisting_file_as_is() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books_inventory.csv");
        fs::write(
            &path,
            "Title,Author,Publisher,Stock,Price\nDune,Frank Herbert,Ace,5,499.0\n",
        )
        .unwrap();

        let table: TableFile<Book> = TableFile::new(&path);
        let rows = table.load_or_init().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Dune");
        // "499.0" and "499.00" parse to the same cent count.
        assert_eq!(rows[0].price, Money::from_cents(49900));
    }

    #[test]
    fn test_titles_with_commas_survive_quoting() {
        let dir = TempDir::new().unwrap();
        let table: TableFile<Book> = TableFile::new(dir.path().join("books_inventory.csv"));

        let rows = vec![Book::new(
            "Dune, Messiah",
            "Frank Herbert",
            "Ace",
            2,
            Money::from_cents(39900),
        )];
        table.save(&rows).unwrap();

        let reloaded = table.load_or_init().unwrap();
        assert_eq!(reloaded, rows);
    }

    #[test]
    fn test_sales_table_roundtrip() {
        let dir = TempDir::new().unwrap();
        let table: TableFile<SaleRecord> = TableFile::new(dir.path().join("sales_history.csv"));

        let rows = vec![SaleRecord {
            date: Utc.with_ymd_and_hms(2026, 8, 5, 14, 3, 22).unwrap(),
            title: "Dune".to_string(),
            quantity: 2,
            price_per_unit: Money::from_cents(49900),
            total: Money::from_cents(99800),
        }];
        table.save(&rows).unwrap();

        let contents = fs::read_to_string(table.path()).unwrap();
        assert_eq!(
            contents,
            "Date,Title,Quantity,PricePerUnit,Total\n\
             2026-08-05 14:03:22,Dune,2,499.00,998.00\n"
        );

        let reloaded = table.load_or_init().unwrap();
        assert_eq!(reloaded, rows);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books_inventory.csv");
        fs::write(
            &path,
            "Title,Author,Publisher,Stock,Price\nDune,Frank Herbert,Ace,lots,499.00\n",
        )
        .unwrap();

        let table: TableFile<Book> = TableFile::new(&path);
        assert!(table.load_or_init().is_err());
    }
}
