//! # Validation Module
//!
//! Input validation utilities for the bookstore.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction                                         │
//! │  ├── Positive, unique ids                                              │
//! │  └── Non-negative prices, non-empty titles                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: User-typed input (terminal)                                  │
//! │  └── THIS MODULE: quantity text → integer, or rejected                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart operations                                              │
//! │  └── Total functions; quantity ≤ 0 removes the line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::parse_quantity_input;
//!
//! assert_eq!(parse_quantity_input(" 5 ").unwrap(), 5);
//! assert!(parse_quantity_input("abc").is_err());
//! assert!(parse_quantity_input("").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Book, BookId};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Input
// =============================================================================

/// Parses a free-text quantity typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input is rejected
/// - Anything that is not a whole number is rejected (`"2.5"`, `"two"`)
/// - Values above MAX_ITEM_QUANTITY (999) are rejected
/// - Zero and negative values are accepted: the cart treats them as removal
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart line: quantity field                                              │
/// │                                                                         │
/// │  User types: "abc"                                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity_input("abc") ← THIS FUNCTION                           │
/// │       │                                                                 │
/// │       ├── Err → cart untouched, notice shown                           │
/// │       │                                                                 │
/// │       └── Ok(n) → update_quantity(id, n)                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity_input(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(qty)
}

/// Parses a book id typed by the user.
pub fn parse_book_id(raw: &str) -> ValidationResult<BookId> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "book id".to_string(),
        });
    }

    let id = raw
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "book id".to_string(),
            reason: "must be a positive whole number".to_string(),
        })?;

    let id = BookId::new(id);
    validate_book_id(id)?;
    Ok(id)
}

// =============================================================================
// Catalog Records
// =============================================================================

/// Validates a book id. Ids must be positive.
pub fn validate_book_id(id: BookId) -> ValidationResult<()> {
    if id.get() == 0 {
        return Err(ValidationError::MustBePositive {
            field: "book id".to_string(),
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free books).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a single catalog record.
///
/// ## Rules
/// - id must be positive
/// - title must not be blank
/// - price must be non-negative
pub fn validate_book(book: &Book) -> ValidationResult<()> {
    validate_book_id(book.id)?;

    if book.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    validate_price(book.price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, title: &str, cents: i64) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: "Author".to_string(),
            price: Money::from_cents(cents),
            category: "Classic".to_string(),
            description: String::new(),
            image: "📕".to_string(),
        }
    }

    #[test]
    fn test_parse_quantity_input_accepts_whole_numbers() {
        assert_eq!(parse_quantity_input("5"), Ok(5));
        assert_eq!(parse_quantity_input("  12\n"), Ok(12));
        assert_eq!(parse_quantity_input("999"), Ok(999));
        assert_eq!(parse_quantity_input("0"), Ok(0));
        assert_eq!(parse_quantity_input("-5"), Ok(-5));
    }

    #[test]
    fn test_parse_quantity_input_rejects_malformed() {
        assert!(matches!(
            parse_quantity_input(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity_input("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity_input("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity_input("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity_input("NaN"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity_input("1000"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("3"), Ok(BookId::new(3)));
        assert!(parse_book_id("0").is_err());
        assert!(parse_book_id("-1").is_err());
        assert!(parse_book_id("x").is_err());
        assert!(parse_book_id("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1299)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_book() {
        assert!(validate_book(&book(1, "1984", 1399)).is_ok());
        assert!(validate_book(&book(0, "1984", 1399)).is_err());
        assert!(validate_book(&book(1, "  ", 1399)).is_err());
        assert!(validate_book(&book(1, "1984", -100)).is_err());
    }
}
