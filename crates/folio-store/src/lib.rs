//! # folio-store: Storage Layer for Folio POS
//!
//! This crate provides file-backed storage for the Folio POS system.
//! Two CSV table files are the durable system of record; a text receipt is
//! the checkout's document output.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio POS Data Flow                              │
//! │                                                                         │
//! │  Console command (checkout)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    folio-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │   Services    │    │  Table Store │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (table.rs)  │  │   │
//! │  │   │               │    │  Inventory    │    │              │  │   │
//! │  │   │ open, paths,  │◄───│  SalesLedger  │◄───│ TableFile<T> │  │   │
//! │  │   │ checkout      │    │  Receipt      │    │ load / save  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Data Directory                              │   │
//! │  │   books_inventory.csv • sales_history.csv • receipt.txt         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - Generic table file load/save (the Table Store)
//! - [`inventory`] - Inventory Service (CRUD over book rows)
//! - [`ledger`] - Sales Ledger (append-only sale rows)
//! - [`receipt`] - Receipt Generator (pure formatting + file write)
//! - [`checkout`] - Checkout Transaction (two-phase validate/apply)
//! - [`store`] - `Store` facade and `StoreConfig`
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_store::{Store, StoreConfig};
//!
//! let mut store = Store::open(StoreConfig::new(data_dir))?;
//! store.inventory_mut().add_book(book)?;
//!
//! let mut cart = Cart::new();
//! cart.add_line(store.inventory().get_book("Dune").unwrap(), 2)?;
//! let outcome = store.checkout(&mut cart)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod receipt;
pub mod store;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::{CheckoutComplete, CheckoutOutcome};
pub use error::{StoreError, StoreResult};
pub use inventory::Inventory;
pub use ledger::SalesLedger;
pub use receipt::ReceiptWriter;
pub use store::{Store, StoreConfig};
