//! # Cart Commands
//!
//! Cart manipulation entry points.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  checkout   ┌──────────────┐  │
//! │  │  Empty   │───────────────►│ In Cart  │────────────►│ Notice only  │  │
//! │  │  Cart    │◄───────────────│          │             │ (no payment) │  │
//! │  └──────────┘  clear_cart /  └──────────┘             └──────────────┘  │
//! │                last line        │    ▲                                  │
//! │                removed          └────┘                                  │
//! │                         update_quantity / remove_from_cart              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstore_core::validation::parse_quantity_input;
use bookstore_core::{BookId, View};
use tracing::{debug, info, warn};

use super::Outcome;
use crate::error::ApiError;
use crate::state::Shell;

/// Adds one copy of a catalog book.
///
/// ## Errors
/// `NotFound` if the id is not in the catalog.
pub fn add_to_cart(shell: &mut Shell, id: BookId) -> Result<Outcome, ApiError> {
    debug!(book_id = %id, "add_to_cart command");
    shell.add_to_cart(id)?;
    Ok(Outcome::Render)
}

/// Removes a line. Absent ids are ignored.
pub fn remove_from_cart(shell: &mut Shell, id: BookId) -> Outcome {
    debug!(book_id = %id, "remove_from_cart command");
    shell.remove_from_cart(id);
    Outcome::Render
}

/// Sets a line's quantity (≤ 0 removes it).
pub fn update_quantity(shell: &mut Shell, id: BookId, quantity: i64) -> Outcome {
    debug!(book_id = %id, quantity = %quantity, "update_quantity command");
    shell.update_quantity(id, quantity);
    Outcome::Render
}

/// Handles a quantity typed into a cart line.
///
/// ## Behavior
/// - Only available while the cart is shown
/// - Malformed text is rejected and the cart stays as it was
/// - A book that is not in the cart is reported, nothing changes
pub fn type_quantity(shell: &mut Shell, id: BookId, raw: &str) -> Result<Outcome, ApiError> {
    debug!(book_id = %id, raw = %raw, "type_quantity command");

    if shell.view() != View::Cart {
        return Err(ApiError::validation(
            "Open the cart ('c') to change quantities",
        ));
    }

    let quantity = parse_quantity_input(raw).map_err(|e| {
        warn!(book_id = %id, raw = %raw, "rejected quantity input: {}", e);
        ApiError::from(e)
    })?;

    if shell.cart().line(id).is_none() {
        return Ok(Outcome::Notice(format!("Book {} is not in your cart", id)));
    }

    Ok(update_quantity(shell, id, quantity))
}

/// Empties the cart.
pub fn clear_cart(shell: &mut Shell) -> Outcome {
    debug!("clear_cart command");
    shell.clear_cart();
    Outcome::Render
}

/// "Proceed to Checkout". There is no checkout flow; the cart is kept.
pub fn checkout(shell: &mut Shell) -> Outcome {
    let totals = shell.totals();
    info!(
        items = totals.item_count,
        total_cents = totals.total.cents(),
        "checkout requested"
    );

    if shell.cart().is_empty() {
        return Outcome::Notice("Your cart is empty".to_string());
    }

    Outcome::Notice("Checkout is not available yet. Your cart has been kept.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookstore_core::Catalog;

    fn cart_shell_with(id: u32, qty: i64) -> Shell {
        let mut shell = Shell::new(Catalog::standard());
        shell.add_to_cart(BookId::new(id)).unwrap();
        shell.update_quantity(BookId::new(id), qty);
        shell.toggle_view();
        shell
    }

    #[test]
    fn test_add_unknown_book_is_not_found() {
        let mut shell = Shell::new(Catalog::standard());
        let err = add_to_cart(&mut shell, BookId::new(99)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(shell.cart().is_empty());
    }

    #[test]
    fn test_type_quantity_sets_value() {
        let mut shell = cart_shell_with(1, 2);
        assert_eq!(
            type_quantity(&mut shell, BookId::new(1), "5").unwrap(),
            Outcome::Render
        );
        assert_eq!(shell.cart().line(BookId::new(1)).unwrap().quantity, 5);
    }

    #[test]
    fn test_type_quantity_malformed_is_noop() {
        let mut shell = cart_shell_with(1, 2);
        let before = shell.cart().clone();

        for raw in ["", "abc", "2.5", "1e3", "1000"] {
            let err = type_quantity(&mut shell, BookId::new(1), raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "input {:?}", raw);
            assert_eq!(shell.cart(), &before);
        }
    }

    #[test]
    fn test_type_quantity_zero_removes() {
        let mut shell = cart_shell_with(1, 2);
        type_quantity(&mut shell, BookId::new(1), "0").unwrap();
        assert!(shell.cart().is_empty());
    }

    #[test]
    fn test_type_quantity_requires_cart_view() {
        let mut shell = cart_shell_with(1, 2);
        shell.toggle_view();
        let err = type_quantity(&mut shell, BookId::new(1), "3").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(shell.cart().item_count(), 2);
    }

    #[test]
    fn test_type_quantity_absent_line() {
        let mut shell = cart_shell_with(1, 2);
        let outcome = type_quantity(&mut shell, BookId::new(4), "3").unwrap();
        assert!(matches!(outcome, Outcome::Notice(_)));
        assert!(shell.cart().line(BookId::new(4)).is_none());
    }

    #[test]
    fn test_checkout_is_a_stub() {
        let mut shell = cart_shell_with(2, 3);
        let before = shell.cart().clone();

        assert!(matches!(checkout(&mut shell), Outcome::Notice(_)));
        assert_eq!(shell.cart(), &before);
    }

    #[test]
    fn test_clear_then_remove_is_safe() {
        let mut shell = cart_shell_with(2, 3);
        clear_cart(&mut shell);
        remove_from_cart(&mut shell, BookId::new(2));
        update_quantity(&mut shell, BookId::new(2), 4);
        assert!(shell.cart().is_empty());
    }
}
