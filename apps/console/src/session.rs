//! # Session State
//!
//! One operator session: the opened store plus the transient cart.
//!
//! ## Why a Session Object?
//! The cart is deliberately not process-global state. Constructing one
//! `Session` per running console gives the cart an owner with a clear
//! lifetime: it starts empty with the session and only a successful
//! checkout empties it again. Commands borrow the fields they need, and the
//! borrow checker keeps cart and store access honest - no locking, because
//! exactly one operator drives the process.

use folio_core::Cart;
use folio_store::Store;

/// State for one operator session.
#[derive(Debug)]
pub struct Session {
    /// The opened store: inventory table, sales table, receipt writer.
    pub store: Store,

    /// The session's cart. Transient, never persisted.
    pub cart: Cart,
}

impl Session {
    /// Creates a session over an opened store, starting with an empty cart.
    pub fn new(store: Store) -> Self {
        Session {
            store,
            cart: Cart::new(),
        }
    }
}
