//! # Header
//!
//! Store banner and the cart toggle.

use crate::commands::Action;
use crate::state::ConfigState;

use super::Screen;

/// Store banner with the cart toggle and the number of copies in the cart.
pub fn header(config: &ConfigState, item_count: u64) -> Screen {
    let mut screen = Screen::new();
    let toggle = screen.control("c", format!("🛒 Cart {}", item_count), Action::ToggleView);

    screen.line(format!("📚 {}", config.store_name));
    screen.line(format!("{}    {}", config.tagline, toggle));
    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_count_and_toggle() {
        let screen = header(&ConfigState::default(), 3);
        assert!(screen.contains("📚 BookStore"));
        assert!(screen.contains("[c] 🛒 Cart 3"));
        assert_eq!(screen.find("c").unwrap().action, Action::ToggleView);
    }
}
