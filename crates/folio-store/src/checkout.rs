//! # Checkout Transaction
//!
//! Turns a cart into stock deductions, sale records, and a receipt - as one
//! logical operation with no observable partial state.
//!
//! ## Two-Phase Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Phases                                      │
//! │                                                                         │
//! │  Phase 1: VALIDATE (read-only)                                          │
//! │  ────────────────────────────                                           │
//! │  For every cart line, in order:                                         │
//! │    • title still in inventory?            → else BookNotFound           │
//! │    • running per-title total ≤ stock?     → else InsufficientStock      │
//! │                                                                         │
//! │  First failure aborts: inventory table, sales table, and cart are       │
//! │  untouched - byte-identical on disk.                                    │
//! │                                                                         │
//! │  Phase 2: APPLY (only if every line validated)                          │
//! │  ─────────────────────────────────────────────                          │
//! │  For each line, in cart order:                                          │
//! │    1. decrement the book's stock (in memory)                            │
//! │    2. append a SaleRecord to the ledger (persists per call)             │
//! │    3. accumulate the grand total                                        │
//! │  Then: persist the inventory table once, write the receipt,             │
//! │        clear the cart.                                                  │
//! │                                                                         │
//! │  Phase 2 storage failure: roll back the in-memory stock mutation so     │
//! │  no partial decrements survive; persistence is one whole-table write.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Per-Title Running Totals?
//! Lines are never merged in the cart, so one title can span several lines.
//! Validating each line against the full stock independently would pass two
//! lines of 3 and 4 against a stock of 5 and drive it negative on apply.
//! The running total catches the combination on the line that breaks it.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use folio_core::{Cart, CartLine, CoreError, Money};

use crate::error::{StoreError, StoreResult};
use crate::inventory::Inventory;
use crate::store::Store;

// =============================================================================
// Outcome Types
// =============================================================================

/// Result of a checkout attempt that did not error.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The cart had no lines; nothing was validated, written, or cleared.
    EmptyCart,

    /// Every line was applied.
    Completed(CheckoutComplete),
}

/// Details of a completed checkout.
#[derive(Debug)]
pub struct CheckoutComplete {
    /// The purchased lines, in cart order.
    pub lines: Vec<CartLine>,

    /// Sum of all line totals; equals the sum of the appended sale rows.
    pub grand_total: Money,

    /// When the purchase completed.
    pub completed_at: DateTime<Utc>,

    /// Where the receipt was written.
    pub receipt_path: PathBuf,
}

// =============================================================================
// Checkout
// =============================================================================

impl Store {
    /// Runs the two-phase checkout over `cart`.
    ///
    /// On success the cart is cleared and `CheckoutOutcome::Completed`
    /// carries the purchase details. An empty cart short-circuits to
    /// `CheckoutOutcome::EmptyCart` with zero side effects.
    ///
    /// ## Errors
    /// - `BookNotFound` if a carted title left inventory before checkout
    /// - `InsufficientStock` if the cart requests more of a title than is
    ///   in stock (summed across its lines)
    /// - storage errors from the apply phase, after stock rollback
    pub fn checkout(&mut self, cart: &mut Cart) -> StoreResult<CheckoutOutcome> {
        if cart.is_empty() {
            debug!("checkout requested with empty cart");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        // Phase 1: validate the whole cart before any mutation.
        validate_lines(&self.inventory, cart.lines())?;

        // Phase 2: apply. Stock mutations stay in memory until the single
        // table write at the end; the snapshot is the rollback point.
        let snapshot = self.inventory.snapshot();
        match self.apply_lines(cart.lines()) {
            Ok(complete) => {
                cart.clear();
                info!(
                    lines = complete.lines.len(),
                    total = %complete.grand_total,
                    "checkout completed"
                );
                Ok(CheckoutOutcome::Completed(complete))
            }
            Err(err) => {
                error!(error = %err, "checkout apply failed, rolling back stock");
                self.inventory.restore(snapshot);
                Err(err)
            }
        }
    }

    fn apply_lines(&mut self, lines: &[CartLine]) -> StoreResult<CheckoutComplete> {
        let mut grand_total = Money::zero();

        for line in lines {
            self.inventory.adjust_stock(&line.title, -line.quantity)?;
            self.ledger
                .record(&line.title, line.quantity, line.unit_price)?;
            grand_total += line.line_total();
        }

        self.inventory.persist()?;

        let completed_at = Utc::now();
        self.receipt.write(lines, grand_total, completed_at)?;

        Ok(CheckoutComplete {
            lines: lines.to_vec(),
            grand_total,
            completed_at,
            receipt_path: self.receipt.path().to_path_buf(),
        })
    }
}

/// Validates every cart line against current inventory.
///
/// Quantities are summed per title across lines as the walk proceeds, so
/// the error reports the cumulative requested amount for the failing title.
fn validate_lines(inventory: &Inventory, lines: &[CartLine]) -> Result<(), StoreError> {
    let mut requested: HashMap<&str, i64> = HashMap::new();

    for line in lines {
        let book = inventory
            .get_book(&line.title)
            .ok_or_else(|| CoreError::BookNotFound {
                title: line.title.clone(),
            })?;

        let total = requested.entry(line.title.as_str()).or_insert(0);
        *total += line.quantity;

        if *total > book.stock {
            return Err(CoreError::InsufficientStock {
                title: line.title.clone(),
                available: book.stock,
                requested: *total,
            }
            .into());
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
