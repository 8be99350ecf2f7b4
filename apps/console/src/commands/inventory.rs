//! # Inventory Commands
//!
//! Admin-side commands: maintain the book catalog.
//!
//! ## The -1 Shorthand
//! `edit-book` keeps the operator-facing convention that a negative number
//! means "leave this unchanged":
//!
//! ```text
//! folio> edit-book "Dune" -1 550.00     (stock untouched, price updated)
//! folio> edit-book "Dune" 12 -1         (stock updated, price untouched)
//! ```
//!
//! The shorthand stops at this boundary: the inventory service itself takes
//! `Option` values, never sentinels.

use folio_core::{Book, Money};

use crate::error::StatusError;
use crate::session::Session;

/// `add-book <title> <author> <publisher> <stock> <price>`
pub fn add_book(session: &mut Session, args: &[String]) -> Result<String, StatusError> {
    let [title, author, publisher, stock, price] = args else {
        return Err(StatusError::usage(
            "Usage: add-book <title> <author> <publisher> <stock> <price>",
        ));
    };

    let stock: i64 = stock
        .parse()
        .map_err(|_| StatusError::usage(format!("Invalid stock: {stock}")))?;
    let price: Money = price
        .parse()
        .map_err(|_| StatusError::usage(format!("Invalid price: {price}")))?;

    session
        .store
        .inventory_mut()
        .add_book(Book::new(title, author, publisher, stock, price))?;

    Ok(format!("Added '{title}'."))
}

/// `edit-book <title> <stock|-1> <price|-1>`
pub fn edit_book(session: &mut Session, args: &[String]) -> Result<String, StatusError> {
    let [title, stock, price] = args else {
        return Err(StatusError::usage(
            "Usage: edit-book <title> <stock|-1> <price|-1>",
        ));
    };

    let new_stock = match stock.parse::<i64>() {
        Ok(n) if n < 0 => None,
        Ok(n) => Some(n),
        Err(_) => return Err(StatusError::usage(format!("Invalid stock: {stock}"))),
    };
    let new_price = match price.parse::<Money>() {
        Ok(p) if p.is_negative() => None,
        Ok(p) => Some(p),
        Err(_) => return Err(StatusError::usage(format!("Invalid price: {price}"))),
    };

    session
        .store
        .inventory_mut()
        .edit_book(title, new_stock, new_price)?;

    Ok(format!("Updated '{title}'."))
}

/// `remove-book <title>`
pub fn remove_book(session: &mut Session, args: &[String]) -> Result<String, StatusError> {
    let [title] = args else {
        return Err(StatusError::usage("Usage: remove-book <title>"));
    };

    session.store.inventory_mut().remove_book(title)?;
    Ok(format!("Removed '{title}'."))
}

/// `books` - list the catalog.
pub fn list_books(session: &Session) -> Result<String, StatusError> {
    let books = session.store.inventory().books();
    if books.is_empty() {
        return Ok("No books in inventory.".to_string());
    }

    let mut out = format!(
        "{:<32} {:<24} {:<16} {:>6} {:>10}\n",
        "Title", "Author", "Publisher", "Stock", "Price"
    );
    for book in books {
        out.push_str(&format!(
            "{:<32} {:<24} {:<16} {:>6} {:>10}\n",
            book.title,
            book.author,
            book.publisher,
            book.stock,
            book.price.to_string()
        ));
    }
    out.push_str(&format!("\n{} title(s) on file.", books.len()));
    Ok(out)
}

/// `titles` - just the titles, in table order (the add-to-cart picklist).
pub fn list_titles(session: &Session) -> Result<String, StatusError> {
    let titles = session.store.inventory().list_titles();
    if titles.is_empty() {
        return Ok("No books in inventory.".to_string());
    }
    Ok(titles.join("\n"))
}

/// `authors` - distinct authors, sorted.
pub fn list_authors(session: &Session) -> Result<String, StatusError> {
    let authors = session.store.inventory().list_authors();
    if authors.is_empty() {
        return Ok("No authors on file.".to_string());
    }
    Ok(authors.join("\n"))
}

// =============================================================================
// Unit Tests
// =============================================================================
