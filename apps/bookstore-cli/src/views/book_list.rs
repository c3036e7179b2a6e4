//! # Book List
//!
//! The catalog view: a count header followed by one card per book.

use bookstore_core::Catalog;

use crate::state::ConfigState;

use super::{book_card, Screen};

/// The catalog as a list of cards, in catalog order.
pub fn book_list(catalog: &Catalog, config: &ConfigState) -> Screen {
    let mut screen = Screen::new();
    screen.line("Available Books");
    screen.line(format!("{} books available", catalog.len()));

    for book in catalog.books() {
        screen.blank();
        screen.append(book_card(book, config));
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_book_in_order() {
        let catalog = Catalog::standard();
        let screen = book_list(&catalog, &ConfigState::default());

        assert!(screen.contains("8 books available"));
        let hotkeys: Vec<&str> = screen.controls().iter().map(|c| c.hotkey.as_str()).collect();
        assert_eq!(hotkeys, vec!["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let screen = book_list(&catalog, &ConfigState::default());
        assert!(screen.contains("0 books available"));
        assert!(screen.controls().is_empty());
    }
}
