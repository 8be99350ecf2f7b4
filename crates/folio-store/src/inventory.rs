//! # Inventory Service
//!
//! CRUD over the inventory table.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Ownership                                  │
//! │                                                                         │
//! │  books_inventory.csv  ◄──── load once at open ────┐                     │
//! │         ▲                                         │                     │
//! │         │                                  ┌──────┴──────┐              │
//! │         └── whole-table save after ───────│  Inventory   │              │
//! │             every mutation                │  Vec<Book>   │              │
//! │                                           └─────────────┘              │
//! │                                                                         │
//! │  The process is the table's only writer, so the in-memory rows ARE      │
//! │  the table; the file is a mirror refreshed on every mutation.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use folio_core::validation::{validate_price, validate_stock, validate_title};
use folio_core::{Book, CoreError, Money};

use crate::error::StoreResult;
use crate::table::TableFile;

/// The inventory service: owns the loaded book rows and their table file.
///
/// ## Usage
/// ```rust,ignore
/// let mut inventory = Inventory::open(dir.join("books_inventory.csv"))?;
///
/// inventory.add_book(Book::new("Dune", "Frank Herbert", "Ace", 5, price))?;
/// let dune = inventory.get_book("Dune");
/// ```
#[derive(Debug)]
pub struct Inventory {
    table: TableFile<Book>,
    books: Vec<Book>,
}

impl Inventory {
    /// Opens the inventory at `path`, creating an empty table if missing.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let table = TableFile::new(path);
        let books = table.load_or_init()?;
        debug!(books = books.len(), "inventory opened");
        Ok(Inventory { table, books })
    }

    /// Adds a new book and persists the table.
    ///
    /// ## Errors
    /// - `Validation` if the title is empty/overlong or stock/price negative
    /// - `DuplicateTitle` if the title already exists (case-sensitive match)
    pub fn add_book(&mut self, book: Book) -> StoreResult<()> {
        validate_title(&book.title).map_err(CoreError::from)?;
        validate_stock(book.stock).map_err(CoreError::from)?;
        validate_price(book.price).map_err(CoreError::from)?;

        if self.get_book(&book.title).is_some() {
            return Err(CoreError::DuplicateTitle { title: book.title }.into());
        }

        let title = book.title.clone();
        let stock = book.stock;
        self.books.push(book);
        self.table.save(&self.books)?;

        info!(title = %title, stock, "book added");
        Ok(())
    }

    /// Updates a book's stock and/or price and persists the table.
    ///
    /// `None` means "leave unchanged". (The console still accepts the
    /// operator's `-1` shorthand and maps it to `None` before calling in.)
    ///
    /// ## Errors
    /// - `Validation` if a present value is negative
    /// - `BookNotFound` if the title is absent
    pub fn edit_book(
        &mut self,
        title: &str,
        new_stock: Option<i64>,
        new_price: Option<Money>,
    ) -> StoreResult<()> {
        if let Some(stock) = new_stock {
            validate_stock(stock).map_err(CoreError::from)?;
        }
        if let Some(price) = new_price {
            validate_price(price).map_err(CoreError::from)?;
        }

        let book = self
            .books
            .iter_mut()
            .find(|b| b.title == title)
            .ok_or_else(|| CoreError::BookNotFound {
                title: title.to_string(),
            })?;

        if let Some(stock) = new_stock {
            book.stock = stock;
        }
        if let Some(price) = new_price {
            book.price = price;
        }

        self.table.save(&self.books)?;
        info!(title = %title, ?new_stock, ?new_price, "book updated");
        Ok(())
    }

    /// Removes a book and persists the table.
    ///
    /// ## Errors
    /// - `BookNotFound` if the title is absent
    pub fn remove_book(&mut self, title: &str) -> StoreResult<()> {
        let before = self.books.len();
        self.books.retain(|b| b.title != title);

        if self.books.len() == before {
            return Err(CoreError::BookNotFound {
                title: title.to_string(),
            }
            .into());
        }

        self.table.save(&self.books)?;
        info!(title = %title, "book removed");
        Ok(())
    }

    /// Returns the backing table file path.
    pub fn path(&self) -> &std::path::Path {
        self.table.path()
    }

    /// Looks up a book by exact title.
    pub fn get_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Returns every book in table order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns all titles in table order.
    pub fn list_titles(&self) -> Vec<String> {
        self.books.iter().map(|b| b.title.clone()).collect()
    }

    /// Returns distinct authors, sorted, with unset/empty authors excluded.
    pub fn list_authors(&self) -> Vec<String> {
        let mut authors: Vec<String> = self
            .books
            .iter()
            .filter(|b| b.has_author())
            .map(|b| b.author.clone())
            .collect();
        authors.sort();
        authors.dedup();
        authors
    }

    // -------------------------------------------------------------------------
    // Checkout support (crate-internal)
    // -------------------------------------------------------------------------
    // Checkout mutates stock across several rows and persists once at the
    // end; these hooks keep that sequencing in checkout.rs without making
    // unpersisted mutation part of the public API.

    /// Adjusts a book's in-memory stock by `delta` without persisting.
    pub(crate) fn adjust_stock(&mut self, title: &str, delta: i64) -> StoreResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.title == title)
            .ok_or_else(|| CoreError::BookNotFound {
                title: title.to_string(),
            })?;
        book.stock += delta;
        Ok(())
    }

    /// Writes the current rows to the table file.
    pub(crate) fn persist(&self) -> StoreResult<()> {
        self.table.save(&self.books)
    }

    /// Copies the current rows for a rollback point.
    pub(crate) fn snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Restores rows from a snapshot and mirrors them back to the file.
    ///
    /// The re-save is best effort: restore runs on a failure path, and a
    /// second failure here must not mask the original error.
    pub(crate) fn restore(&mut self, snapshot: Vec<Book>) {
        self.books = snapshot;
        if let Err(err) = self.table.save(&self.books) {
            tracing::error!(error = %err, "failed to re-save inventory after rollback");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
