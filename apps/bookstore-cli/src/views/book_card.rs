//! # Book Card
//!
//! One catalog entry with its price and an "Add to Cart" control.

use bookstore_core::Book;

use crate::commands::Action;
use crate::state::ConfigState;

use super::Screen;

/// One catalog card. The add control forwards `AddToCart(book.id)`.
pub fn book_card(book: &Book, config: &ConfigState) -> Screen {
    let mut screen = Screen::new();
    let add = screen.control(
        format!("a{}", book.id),
        "Add to Cart",
        Action::AddToCart(book.id),
    );

    screen.line(format!("┌ {} {}", book.image, book.title));
    screen.line(format!("│ by {}", book.author));
    screen.line(format!("│ {}", book.category));
    screen.line(format!("│ {}", book.description));
    screen.line(format!("└ {}   {}", config.format_currency(book.price), add));
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{BookId, Catalog};

    #[test]
    fn test_card_fields_and_add_control() {
        let catalog = Catalog::standard();
        let book = catalog.get(BookId::new(3)).unwrap();
        let screen = book_card(book, &ConfigState::default());

        assert!(screen.contains("📘 1984"));
        assert!(screen.contains("by George Orwell"));
        assert!(screen.contains("Dystopian"));
        assert!(screen.contains("$13.99   [a3] Add to Cart"));
        assert_eq!(
            screen.find("a3").unwrap().action,
            Action::AddToCart(BookId::new(3))
        );
    }
}
