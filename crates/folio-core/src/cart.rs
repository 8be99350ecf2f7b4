//! # Cart
//!
//! The shopping cart: an ordered list of pending purchase lines for one
//! operator session.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌───────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Lines   │────►│ Checkout  │────►│  Empty   │       │
//! │  │ (session │     │ pending  │     │ validate+ │     │  again   │       │
//! │  │  start)  │     │          │     │ apply     │     │          │       │
//! │  └──────────┘     └──────────┘     └───────────┘     └──────────┘       │
//! │                        │                  │                             │
//! │                   add_line           failed validation                  │
//! │                   summary                 │                             │
//! │                        │                  ▼                             │
//! │                        └──────── lines kept, nothing cleared            │
//! │                                                                         │
//! │  The cart is transient session state: never persisted, reset only on    │
//! │  session start and successful checkout.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Snapshots
//! A line freezes the book's price when it is added. Editing the book's
//! price afterwards does not touch pending lines; the snapshot is what the
//! customer was quoted and is what checkout charges. This is deliberate,
//! not a staleness bug.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Book;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A pending purchase line.
///
/// Lines are append-only within the cart: adding the same title twice
/// produces two lines, each with its own quantity and snapshot price.
/// Checkout validation sums them per title.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Title of the book to purchase.
    pub title: String,

    /// Units requested. Always positive.
    pub quantity: i64,

    /// Price frozen at add time.
    pub unit_price: Money,
}

impl CartLine {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one session.
///
/// ## Invariants
/// - Every line has a positive quantity
/// - Lines keep insertion order; duplicates are never merged
/// - At most `MAX_CART_LINES` lines, `MAX_LINE_QUANTITY` units per line
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Appends a purchase line for `quantity` units of `book`.
    ///
    /// The book's current price is snapshotted into the line. Whether the
    /// title exists in inventory is the caller's concern: whoever holds the
    /// inventory looks the book up first, so the cart itself stays pure.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `QuantityTooLarge` / `CartTooLarge` past the guard-rail limits
    pub fn add_line(&mut self, book: &Book, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity { quantity });
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }
        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            title: book.title.clone(),
            quantity,
            unit_price: book.price,
        });
        Ok(())
    }

    /// Returns the pending lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of pending lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the grand total over all lines.
    pub fn grand_total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Produces a read-only summary of the cart.
    ///
    /// No side effects; the cart is unchanged.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            grand_total: self.grand_total(),
        }
    }

    /// Empties the cart.
    ///
    /// Called by a successful checkout; sessions also start empty.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Snapshot of cart contents for display.
///
/// The empty cart is a distinguished state, not an error: `is_empty()`
/// reports it and `Display` renders it as its own message.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Lines in cart order.
    pub lines: Vec<CartLine>,

    /// Sum of all line totals.
    pub grand_total: Money,
}

impl CartSummary {
    /// Checks whether this summarizes an empty cart.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders one formatted line per cart line plus a total line:
///
/// ```text
/// 2 x Dune @ $499.00 = $998.00
/// 1 x Emma @ $120.00 = $120.00
///
/// Total: $1118.00
/// ```
impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Cart is empty.");
        }

        for line in &self.lines {
            writeln!(
                f,
                "{} x {} @ {} = {}",
                line.quantity,
                line.title,
                line.unit_price,
                line.line_total()
            )?;
        }
        write!(f, "\nTotal: {}", self.grand_total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "Ace", 5, Money::from_cents(49900))
    }

    #[test]
    fn test_add_line_snapshots_price() {
        let mut cart = Cart::new();
        let mut book = dune();

        cart.add_line(&book, 2).unwrap();

        // Price changes after the add don't reach the pending line.
        book.price = Money::from_cents(55000);
        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(49900));
        assert_eq!(cart.grand_total(), Money::from_cents(99800));
    }

    #[test]
    fn test_add_same_title_keeps_separate_lines() {
        let mut cart = Cart::new();
        let book = dune();

        cart.add_line(&book, 3).unwrap();
        cart.add_line(&book, 4).unwrap();

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 7);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let book = dune();

        for qty in [0, -1, -10] {
            let err = cart.add_line(&book, qty).unwrap_err();
            assert!(matches!(err, CoreError::InvalidQuantity { quantity } if quantity == qty));
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_oversized_quantity() {
        let mut cart = Cart::new();
        let err = cart.add_line(&dune(), MAX_LINE_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_overfull_cart() {
        let mut cart = Cart::new();
        let book = dune();
        for _ in 0..MAX_CART_LINES {
            cart.add_line(&book, 1).unwrap();
        }

        let err = cart.add_line(&book, 1).unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
        assert_eq!(cart.line_count(), MAX_CART_LINES);
    }

    #[test]
    fn test_summary_display() {
        let mut cart = Cart::new();
        cart.add_line(&dune(), 2).unwrap();
        cart.add_line(
            &Book::new("Emma", "Jane Austen", "Penguin", 3, Money::from_cents(12000)),
            1,
        )
        .unwrap();

        let summary = cart.summary();
        assert!(!summary.is_empty());
        assert_eq!(summary.grand_total, Money::from_cents(111800));
        assert_eq!(
            summary.to_string(),
            "2 x Dune @ $499.00 = $998.00\n1 x Emma @ $120.00 = $120.00\n\nTotal: $1118.00"
        );
    }

    #[test]
    fn test_empty_summary_is_distinguished() {
        let cart = Cart::new();
        let summary = cart.summary();
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "Cart is empty.");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&dune(), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), Money::zero());
    }
}
