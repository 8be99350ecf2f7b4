//! # Domain Types
//!
//! Core domain types used throughout Folio POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │     Book        │   │   SaleRecord    │   │    CartLine     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  title (key)    │   │  date           │   │  title          │        │
//! │  │  author         │   │  title          │   │  quantity       │        │
//! │  │  publisher      │   │  quantity       │   │  unit_price     │        │
//! │  │  stock          │   │  price_per_unit │   │  (cart.rs)      │        │
//! │  │  price          │   │  total          │   └─────────────────┘        │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  Book and SaleRecord are table rows; their serde field names ARE the    │
//! │  on-disk column headers, so renames here are file format changes.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A book's identity is its title: a human-chosen, case-sensitive unique
//! key. Sale records reference books by title with no enforced foreign-key
//! integrity; history keeps the title a book had when it was sold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Timestamp format used in the sales table and on receipts.
pub const TABLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Book
// =============================================================================

/// A book available for sale; one row of the inventory table.
///
/// Columns, in order: `Title, Author, Publisher, Stock, Price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Unique title - the table's key. Case-sensitive exact match.
    pub title: String,

    /// Author display name. May be empty for anthologies and reference works.
    pub author: String,

    /// Publisher display name.
    pub publisher: String,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Current sale price. Carts snapshot this at add time.
    pub price: Money,
}

impl Book {
    /// Creates a book row from its column values.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        stock: i64,
        price: Money,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            stock,
            price,
        }
    }

    /// Checks if the book has a usable author entry.
    ///
    /// Whitespace-only authors count as unset; author listings skip them.
    pub fn has_author(&self) -> bool {
        !self.author.trim().is_empty()
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A completed sale line item; one row of the sales table.
///
/// Columns, in order: `Date, Title, Quantity, PricePerUnit, Total`.
///
/// Rows are append-only: once written, no operation in the system mutates
/// or deletes them. `price_per_unit` is the cart's snapshot price, which
/// may differ from the book's price at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaleRecord {
    /// When the sale was recorded.
    #[serde(with = "table_time")]
    pub date: DateTime<Utc>,

    /// Title of the book sold. References a Book by name; the book may have
    /// been removed from inventory since.
    pub title: String,

    /// Units sold. Always positive.
    pub quantity: i64,

    /// Unit price captured when the line entered the cart.
    pub price_per_unit: Money,

    /// quantity × price_per_unit, computed when the row is appended.
    pub total: Money,
}

// =============================================================================
// Table Timestamp Serde
// =============================================================================

/// Serde adapter for the sales table's `Date` column.
///
/// The column holds `%Y-%m-%d %H:%M:%S` text rather than RFC 3339; cells are
/// read back as UTC.
pub mod table_time {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TABLE_TIME_FORMAT;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(TABLE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&text, TABLE_TIME_FORMAT)
            .map_err(serde::de::Error::custom)?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
