//! # Console Commands
//!
//! All commands exposed at the operator prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── inventory.rs  ◄─── add-book, edit-book, remove-book, books, authors
//! ├── cart.rs       ◄─── add, cart
//! └── sales.rs      ◄─── checkout, sales
//! ```
//!
//! ## How Commands Work
//! Every command has the same shape:
//!
//! ```rust,ignore
//! pub fn add_book(session: &mut Session, args: &[String]) -> Result<String, StatusError>
//! ```
//!
//! The `Ok` string is the status message printed at the prompt; the `Err`
//! side carries a message too, so the prompt loop treats both the same way
//! and never exits because of a command failure.

pub mod cart;
pub mod inventory;
pub mod sales;
