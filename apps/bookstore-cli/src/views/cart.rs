//! # Cart View
//!
//! Cart lines, the order summary and the clear / checkout controls.

use bookstore_core::{Cart, CartTotals};

use crate::commands::Action;
use crate::state::ConfigState;

use super::{cart_item, Screen};

const SUMMARY_WIDTH: usize = 28;

/// The cart page: lines, order summary, checkout and clear controls.
pub fn cart(cart: &Cart, totals: &CartTotals, config: &ConfigState) -> Screen {
    let mut screen = Screen::new();

    if cart.is_empty() {
        screen.line("Your Cart is Empty");
        screen.line("Add some books to get started!");
        return screen;
    }

    screen.line(format!("Shopping Cart ({} items)", totals.item_count));
    for line in cart.lines() {
        screen.blank();
        screen.append(cart_item(line, config));
    }
    screen.line("   (type 'qty <ID> <N>' to enter a quantity)");

    screen.blank();
    screen.line("Order Summary");
    screen.line(summary_row("Subtotal:", &config.format_currency(totals.subtotal)));
    screen.line(summary_row("Shipping:", "FREE"));
    screen.line(summary_row(
        &format!("Tax ({}):", totals.tax_rate),
        &config.format_currency(totals.tax),
    ));
    screen.line(summary_row("Total:", &config.format_currency(totals.total)));

    screen.blank();
    let checkout = screen.control("checkout", "Proceed to Checkout", Action::Checkout);
    let clear = screen.control("clear", "Clear Cart", Action::ClearCart);
    screen.line(format!("{}   {}", checkout, clear));
    screen
}

fn summary_row(label: &str, value: &str) -> String {
    let pad = SUMMARY_WIDTH.saturating_sub(label.chars().count() + value.chars().count());
    format!("{}{}{}", label, " ".repeat(pad.max(1)), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{Book, BookId, Money};

    fn book(id: u32, cents: i64) -> Book {
        Book {
            id: BookId::new(id),
            title: format!("Book {}", id),
            author: "Author".to_string(),
            price: Money::from_cents(cents),
            category: "Classic".to_string(),
            description: String::new(),
            image: "📕".to_string(),
        }
    }

    #[test]
    fn test_empty_cart() {
        let c = Cart::new();
        let screen = cart(&c, &c.totals(), &ConfigState::default());

        assert!(screen.contains("Your Cart is Empty"));
        assert!(screen.contains("Add some books to get started!"));
        assert!(screen.controls().is_empty());
    }

    #[test]
    fn test_order_summary() {
        let c = Cart::new()
            .add_to_cart(&book(1, 1299))
            .add_to_cart(&book(1, 1299))
            .add_to_cart(&book(2, 1000));
        let screen = cart(&c, &c.totals(), &ConfigState::default());

        assert!(screen.contains("Shopping Cart (3 items)"));
        assert!(screen.contains("$35.98"));
        assert!(screen.contains("FREE"));
        assert!(screen.contains("Tax (10%):"));
        assert!(screen.contains("$3.60"));
        assert!(screen.contains("$39.58"));
        assert_eq!(screen.find("clear").unwrap().action, Action::ClearCart);
        assert_eq!(screen.find("checkout").unwrap().action, Action::Checkout);
    }

    #[test]
    fn test_summary_row_alignment() {
        assert_eq!(summary_row("Total:", "$39.58").chars().count(), SUMMARY_WIDTH);
        assert_eq!(summary_row("a", &"9".repeat(40)), format!("a {}", "9".repeat(40)));
    }
}
