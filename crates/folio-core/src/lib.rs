//! # folio-core: Pure Business Logic for Folio POS
//!
//! This crate is the **heart** of Folio POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Operator Console (REPL)                       │   │
//! │  │    add-book ──► add ──► cart ──► checkout ──► sales             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command dispatch                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │   Book    │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │SaleRecord │  │  decimal  │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  folio-store (Storage Layer)                    │   │
//! │  │        CSV table files, inventory, sales ledger, checkout       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, SaleRecord)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart, CartLine, CartSummary
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and terminal access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::cart::Cart;
//! use folio_core::money::Money;
//! use folio_core::types::Book;
//!
//! let dune = Book::new("Dune", "Frank Herbert", "Ace", 5, Money::from_cents(49900));
//!
//! let mut cart = Cart::new();
//! cart.add_line(&dune, 2).unwrap();
//!
//! assert_eq!(cart.grand_total(), Money::from_cents(99800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::Money` instead of
// `use folio_core::money::Money`

pub use cart::{Cart, CartLine, CartSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Book, SaleRecord, TABLE_TIME_FORMAT};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single cart line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_LINE_QUANTITY: i64 = 999;
