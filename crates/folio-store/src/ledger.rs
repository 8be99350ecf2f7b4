//! # Sales Ledger
//!
//! Append-only log of completed sale line items, backed by the sales table.
//!
//! ## Append-Only Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sales Ledger Rules                                   │
//! │                                                                         │
//! │  record() ──► append one row ──► rewrite sales_history.csv              │
//! │                                                                         │
//! │  ✅ EXISTS                            ❌ DOES NOT EXIST                 │
//! │  ──────────                           ─────────────────                 │
//! │  • record(title, qty, unit price)     • update                          │
//! │  • list_all()                         • delete                          │
//! │                                       • reorder                         │
//! │                                                                         │
//! │  History is immutable once written. The row count never decreases.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file itself is still rewritten whole on every append (the table
//! store's only write primitive); append-only is a property of this API,
//! not of the file syscall.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info};

use folio_core::{Money, SaleRecord};

use crate::error::StoreResult;
use crate::table::TableFile;

/// The sales ledger: owns the loaded sale rows and their table file.
#[derive(Debug)]
pub struct SalesLedger {
    table: TableFile<SaleRecord>,
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    /// Opens the ledger at `path`, creating an empty table if missing.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let table = TableFile::new(path);
        let records = table.load_or_init()?;
        debug!(records = records.len(), "sales ledger opened");
        Ok(SalesLedger { table, records })
    }

    /// Appends one sale row stamped with the current time and persists the
    /// full table.
    ///
    /// The in-memory list is updated only after the write succeeds, so a
    /// failed append leaves the ledger exactly as it was.
    pub fn record(
        &mut self,
        title: &str,
        quantity: i64,
        price_per_unit: Money,
    ) -> StoreResult<SaleRecord> {
        let record = SaleRecord {
            date: Utc::now(),
            title: title.to_string(),
            quantity,
            price_per_unit,
            total: price_per_unit * quantity,
        };

        let mut records = self.records.clone();
        records.push(record.clone());
        self.table.save(&records)?;
        self.records = records;

        info!(title = %title, quantity, total = %record.total, "sale recorded");
        Ok(record)
    }

    /// Returns the backing table file path.
    pub fn path(&self) -> &std::path::Path {
        self.table.path()
    }

    /// Returns all rows in insertion order.
    pub fn list_all(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Returns the number of recorded sales.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether any sale has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_ledger(dir: &TempDir) -> SalesLedger {
        SalesLedger::open(dir.path().join("sales_history.csv")).unwrap()
    }

    #[test]
    fn test_record_computes_total() {
        let dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&dir);

        let record = ledger
            .record("Dune", 2, Money::from_cents(49900))
            .unwrap();

        assert_eq!(record.quantity, 2);
        assert_eq!(record.total, Money::from_cents(99800));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&dir);

        ledger.record("Dune", 1, Money::from_cents(49900)).unwrap();
        ledger.record("Emma", 3, Money::from_cents(12000)).unwrap();
        ledger.record("Dune", 2, Money::from_cents(49900)).unwrap();

        let titles: Vec<&str> = ledger.list_all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma", "Dune"]);
    }

    #[test]
    fn test_records_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut ledger = open_ledger(&dir);
            ledger.record("Dune", 2, Money::from_cents(49900)).unwrap();
        }

        let reopened = open_ledger(&dir);
        assert_eq!(reopened.len(), 1);
        let record = &reopened.list_all()[0];
        assert_eq!(record.title, "Dune");
        assert_eq!(record.price_per_unit, Money::from_cents(49900));
        assert_eq!(record.total, Money::from_cents(99800));
    }

    #[test]
    fn test_existing_rows_survive_new_appends() {
        let dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&dir);

        let first = ledger.record("Dune", 1, Money::from_cents(49900)).unwrap();
        ledger.record("Emma", 1, Money::from_cents(12000)).unwrap();

        // The first row is byte-for-byte what was appended.
        assert_eq!(ledger.list_all()[0], first);
        assert_eq!(ledger.len(), 2);
    }
}
