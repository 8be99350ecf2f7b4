//! # Cart Commands
//!
//! Front-of-house commands: build up the pending purchase.
//!
//! ## Price Freezing
//! `add` copies the book's current price into the cart line. A later
//! `edit-book` price change does not touch pending lines - the customer
//! pays what they were quoted when the line was added.

use folio_core::CoreError;

use crate::error::StatusError;
use crate::session::Session;

/// `add <title> [quantity]` - add a purchase line (quantity defaults to 1).
pub fn add_to_cart(session: &mut Session, args: &[String]) -> Result<String, StatusError> {
    let (title, quantity) = match args {
        [title] => (title, 1),
        [title, quantity] => (
            title,
            quantity
                .parse::<i64>()
                .map_err(|_| StatusError::usage(format!("Invalid quantity: {quantity}")))?,
        ),
        _ => return Err(StatusError::usage("Usage: add <title> [quantity]")),
    };

    // The cart is pure; the unknown-title check happens here, where the
    // inventory is in reach.
    let book = session
        .store
        .inventory()
        .get_book(title)
        .ok_or_else(|| CoreError::BookNotFound {
            title: title.to_string(),
        })
        .map_err(StatusError::from)?;

    session.cart.add_line(book, quantity)?;

    Ok(format!(
        "Added {quantity} x '{title}' to cart.\n\n{}",
        session.cart.summary()
    ))
}

/// `cart` - show the pending lines and the grand total.
pub fn view_cart(session: &Session) -> Result<String, StatusError> {
    Ok(session.cart.summary().to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use folio_core::{Book, Money};
    use folio_store::{Store, StoreConfig};
    use tempfile::TempDir;

    fn session_with_dune(dir: &TempDir) -> Session {
        let mut store = Store::open(StoreConfig::new(dir.path())).unwrap();
        store
            .inventory_mut()
            .add_book(Book::new(
                "Dune",
                "Frank Herbert",
                "Ace",
                5,
                Money::from_cents(49900),
            ))
            .unwrap();
        Session::new(store)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_to_cart() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_dune(&dir);

        let msg = add_to_cart(&mut session, &args(&["Dune", "2"])).unwrap();
        assert!(msg.starts_with("Added 2 x 'Dune' to cart."));
        assert!(msg.contains("2 x Dune @ $499.00 = $998.00"));
        assert_eq!(session.cart.line_count(), 1);
    }

    #[test]
    fn test_add_defaults_to_one() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_dune(&dir);

        add_to_cart(&mut session, &args(&["Dune"])).unwrap();
        assert_eq!(session.cart.total_quantity(), 1);
    }

    #[test]
    fn test_add_unknown_title() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_dune(&dir);

        let err = add_to_cart(&mut session, &args(&["Neuromancer", "1"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_dune(&dir);

        let err = add_to_cart(&mut session, &args(&["Dune", "0"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "Invalid quantity: 0 (must be positive)");
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_view_cart_empty_and_filled() {
        let dir = TempDir::new().unwrap();
        let mut session = session_with_dune(&dir);

        assert_eq!(view_cart(&session).unwrap(), "Cart is empty.");

        add_to_cart(&mut session, &args(&["Dune", "2"])).unwrap();
        let listing = view_cart(&session).unwrap();
        assert!(listing.contains("2 x Dune @ $499.00 = $998.00"));
        assert!(listing.contains("Total: $998.00"));
    }
}
