//! # Sales Commands
//!
//! Checkout and sales history.

use folio_core::TABLE_TIME_FORMAT;
use folio_store::CheckoutOutcome;

use crate::error::StatusError;
use crate::session::Session;

/// `checkout` - run the two-phase checkout over the session cart.
///
/// On success the cart is cleared, stock is deducted, the sale rows are
/// logged, and the receipt file is regenerated. Any validation failure
/// leaves everything exactly as it was.
pub fn checkout(session: &mut Session) -> Result<String, StatusError> {
    match session.store.checkout(&mut session.cart)? {
        CheckoutOutcome::EmptyCart => Ok("Cart is empty.".to_string()),
        CheckoutOutcome::Completed(complete) => Ok(format!(
            "Purchase successful! Total: {}. Receipt: {}",
            complete.grand_total,
            complete.receipt_path.display()
        )),
    }
}

/// `sales` - show the full sales history table.
pub fn sales_history(session: &Session) -> Result<String, StatusError> {
    let records = session.store.ledger().list_all();
    if records.is_empty() {
        return Ok("No sales recorded.".to_string());
    }

    let mut out = format!(
        "{:<20} {:<32} {:>4} {:>12} {:>12}\n",
        "Date", "Title", "Qty", "Unit Price", "Total"
    );
    for record in records {
        out.push_str(&format!(
            "{:<20} {:<32} {:>4} {:>12} {:>12}\n",
            record.date.format(TABLE_TIME_FORMAT).to_string(),
            record.title,
            record.quantity,
            record.price_per_unit.to_string(),
            record.total.to_string()
        ));
    }
    out.push_str(&format!("\n{} sale(s) on record.", records.len()));
    Ok(out)
}

// =============================================================================
// Unit Tests
// =============================================================================
