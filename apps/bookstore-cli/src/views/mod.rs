//! # Views Module
//!
//! Stateless presentation for the terminal. Every view is a pure function
//! of its props and returns a [`Screen`]: the text it draws plus the
//! controls it offers. A control pairs the hotkey printed next to it with
//! the [`Action`] it forwards; views never touch the cart themselves.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render(shell, config)                                                  │
//! │     ├── header          store name, tagline, [c] cart toggle            │
//! │     └── view?                                                           │
//! │          ├── Catalog ──► book_list ──► book_card × N   [a<ID>]          │
//! │          └── Cart ─────► cart ──────► cart_item × N    [-<ID>] [+<ID>]  │
//! │                                                        [x<ID>]          │
//! │                            order summary               [checkout]       │
//! │                                                        [clear]          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod book_card;
mod book_list;
mod cart;
mod cart_item;
mod header;

pub use book_card::book_card;
pub use book_list::book_list;
pub use cart::cart;
pub use cart_item::cart_item;
pub use header::header;

use std::fmt;

use bookstore_core::View;

use crate::commands::Action;
use crate::state::{ConfigState, Shell};

/// A selectable control on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// What the user types to trigger it, e.g. `a3`.
    pub hotkey: String,
    pub label: String,
    /// Forwarded verbatim when triggered.
    pub action: Action,
}

impl Control {
    /// `[a3] Add to Cart`
    pub fn render(&self) -> String {
        format!("[{}] {}", self.hotkey, self.label)
    }
}

/// Rendered output of a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<String>,
    controls: Vec<Control>,
}

impl Screen {
    pub fn new() -> Self {
        Screen::default()
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Registers a control and returns its printed form for embedding in a
    /// line.
    pub fn control(
        &mut self,
        hotkey: impl Into<String>,
        label: impl Into<String>,
        action: Action,
    ) -> String {
        let control = Control {
            hotkey: hotkey.into(),
            label: label.into(),
            action,
        };
        let rendered = control.render();
        self.controls.push(control);
        rendered
    }

    /// Appends another screen below this one.
    pub fn append(&mut self, other: Screen) {
        self.lines.extend(other.lines);
        self.controls.extend(other.controls);
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Finds the control bound to a hotkey.
    pub fn find(&self, hotkey: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.hotkey == hotkey)
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Renders the whole storefront for the shell's current state.
pub fn render(shell: &Shell, config: &ConfigState) -> Screen {
    let mut screen = header(config, shell.cart().item_count());
    screen.blank();

    match shell.view() {
        View::Catalog => screen.append(book_list(shell.catalog(), config)),
        View::Cart => screen.append(cart(shell.cart(), &shell.totals(), config)),
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{BookId, Catalog};

    #[test]
    fn test_render_catalog_view() {
        let shell = Shell::new(Catalog::standard());
        let screen = render(&shell, &ConfigState::default());

        assert!(screen.contains("Available Books"));
        assert!(screen.find("a1").is_some());
        assert!(screen.find("c").is_some());
        assert!(screen.find("clear").is_none());
    }

    #[test]
    fn test_render_cart_view_hides_catalog_controls() {
        let mut shell = Shell::new(Catalog::standard());
        shell.add_to_cart(BookId::new(1)).unwrap();
        shell.toggle_view();
        let screen = render(&shell, &ConfigState::default());

        assert!(screen.contains("Shopping Cart (1 items)"));
        assert!(screen.find("a1").is_none());
        assert!(screen.find("x1").is_some());
    }

    #[test]
    fn test_empty_cart_after_scenario() {
        let mut shell = Shell::new(Catalog::standard());
        shell.add_to_cart(BookId::new(1)).unwrap();
        shell.add_to_cart(BookId::new(1)).unwrap();
        shell.update_quantity(BookId::new(1), 5);
        shell.remove_from_cart(BookId::new(1));
        shell.toggle_view();

        let screen = render(&shell, &ConfigState::default());
        assert!(screen.contains("Your Cart is Empty"));
    }

    #[test]
    fn test_screen_display_joins_lines() {
        let mut screen = Screen::new();
        screen.line("one");
        screen.blank();
        screen.line("two");
        assert_eq!(screen.to_string(), "one\n\ntwo\n");
    }
}
