//! # Cart Item
//!
//! One cart line with its quantity steppers and remove control.

use bookstore_core::CartLine;

use crate::commands::Action;
use crate::state::ConfigState;

use super::Screen;

/// One cart line with quantity stepper and remove control.
///
/// `−` and `+` forward `UpdateQuantity(id, quantity ∓ 1)`; stepping below 1
/// is left to the cart, which removes the line.
pub fn cart_item(line: &CartLine, config: &ConfigState) -> Screen {
    let id = line.id();
    let qty = i64::from(line.quantity);

    let mut screen = Screen::new();
    let minus = screen.control(format!("-{}", id), "−", Action::UpdateQuantity(id, qty - 1));
    let plus = screen.control(format!("+{}", id), "+", Action::UpdateQuantity(id, qty + 1));
    let remove = screen.control(format!("x{}", id), "✕", Action::RemoveFromCart(id));

    screen.line(format!("{} {}", line.book.image, line.book.title));
    screen.line(format!(
        "   {} · {}",
        line.book.author,
        config.format_currency(line.book.price)
    ));
    screen.line(format!(
        "   {}  qty {}  {}   {}   {}",
        minus,
        line.quantity,
        plus,
        config.format_currency(line.line_total()),
        remove
    ));
    screen
}
