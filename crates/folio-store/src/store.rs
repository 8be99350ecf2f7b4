//! # Store Facade
//!
//! Bundles the inventory, sales ledger, and receipt writer behind one
//! handle, opened from a single data directory.
//!
//! ## Usage
//! ```rust,ignore
//! let config = StoreConfig::new("/path/to/data").with_store_name("Folio Books");
//! let mut store = Store::open(config)?;
//!
//! store.inventory_mut().add_book(book)?;
//! let outcome = store.checkout(&mut cart)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StoreResult;
use crate::inventory::Inventory;
use crate::ledger::SalesLedger;
use crate::receipt::ReceiptWriter;

/// Inventory table file name.
pub const INVENTORY_FILE: &str = "books_inventory.csv";

/// Sales table file name.
pub const SALES_FILE: &str = "sales_history.csv";

/// Receipt document file name. Overwritten on every successful checkout.
pub const RECEIPT_FILE: &str = "receipt.txt";

/// Default store name shown on receipts.
pub const DEFAULT_STORE_NAME: &str = "Folio Books";

// =============================================================================
// Store Config
// =============================================================================

/// Where the store keeps its files and how it brands receipts.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: PathBuf,
    store_name: String,
}

impl StoreConfig {
    /// Creates a config rooted at `data_dir` with the default store name.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }

    /// Overrides the store name used on receipts.
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// Returns the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the inventory table file.
    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILE)
    }

    /// Path of the sales table file.
    pub fn sales_path(&self) -> PathBuf {
        self.data_dir.join(SALES_FILE)
    }

    /// Path of the receipt document.
    pub fn receipt_path(&self) -> PathBuf {
        self.data_dir.join(RECEIPT_FILE)
    }
}

// =============================================================================
// Store
// =============================================================================

/// One bookstore: inventory, sales history, receipt output.
///
/// Opening the store creates the data directory and both tables (with
/// header rows) if they don't exist yet; pre-existing files load as-is.
#[derive(Debug)]
pub struct Store {
    pub(crate) inventory: Inventory,
    pub(crate) ledger: SalesLedger,
    pub(crate) receipt: ReceiptWriter,
}

impl Store {
    /// Opens (or initializes) the store described by `config`.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(config.data_dir())?;
        info!(data_dir = %config.data_dir().display(), "opening store");

        Ok(Store {
            inventory: Inventory::open(config.inventory_path())?,
            ledger: SalesLedger::open(config.sales_path())?,
            receipt: ReceiptWriter::new(config.receipt_path(), config.store_name),
        })
    }

    /// Read access to the inventory service.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Write access to the inventory service.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Read access to the sales ledger.
    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// The receipt writer (its path is the fixed receipt location).
    pub fn receipt(&self) -> &ReceiptWriter {
        &self.receipt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
