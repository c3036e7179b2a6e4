//! # Commands Module
//!
//! Turns one line of user input into a state change.
//!
//! ## Command Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Input Line ──► Shell                                 │
//! │                                                                         │
//! │  "a3"          ── screen control ──► Action::AddToCart(3)               │
//! │  "+1" / "-1"   ── screen control ──► Action::UpdateQuantity(1, q ± 1)   │
//! │  "x1"          ── screen control ──► Action::RemoveFromCart(1)          │
//! │  "clear"       ── screen control ──► Action::ClearCart                  │
//! │  "checkout"    ── screen control ──► Action::Checkout                   │
//! │  "c"           ── screen control ──► Action::ToggleView                 │
//! │  "qty 1 5"     ── typed input ─────► parse guard ──► UpdateQuantity     │
//! │  "json"        ── snapshot as JSON                                      │
//! │  "help", "quit"                                                         │
//! │                                                                         │
//! │  dispatch(shell, action) -> Result<Outcome, ApiError>                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Controls are looked up on the screen the user is looking at, so only
//! what is visible can be triggered.

pub mod cart;
pub mod view;

use bookstore_core::validation::parse_book_id;
use bookstore_core::BookId;
use tracing::debug;

use crate::error::ApiError;
use crate::state::Shell;
use crate::views::Screen;

/// What a control forwards to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleView,
    AddToCart(BookId),
    RemoveFromCart(BookId),
    /// Absolute quantity; ≤ 0 removes the line.
    UpdateQuantity(BookId, i64),
    ClearCart,
    Checkout,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    /// Free-text quantity entry for a cart line.
    TypeQuantity { id: BookId, raw: String },
    Snapshot,
    Help,
    Quit,
}

/// What the terminal should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw if anything changed.
    Render,
    /// Redraw and show a message under the screen.
    Notice(String),
    /// Print text as-is without redrawing.
    Print(String),
    Quit,
}

/// Parses an input line against the controls of the current screen.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse(line: &str, screen: &Screen) -> Result<Option<Command>, ApiError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let head = head.to_lowercase();

    let command = match head.as_str() {
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        "json" => Command::Snapshot,
        "qty" => {
            let id = parse_book_id(parts.next().unwrap_or_default())?;
            let raw = parts.collect::<Vec<_>>().join(" ");
            Command::TypeQuantity { id, raw }
        }
        // A control is exactly one token; `a1 a2` is not two adds.
        hotkey => match (screen.find(hotkey), parts.next()) {
            (Some(control), None) => Command::Action(control.action.clone()),
            _ => return Err(ApiError::unknown_command(line.trim())),
        },
    };

    Ok(Some(command))
}

/// Runs a parsed command.
pub fn execute(shell: &mut Shell, command: Command) -> Result<Outcome, ApiError> {
    match command {
        Command::Action(action) => dispatch(shell, action),
        Command::TypeQuantity { id, raw } => cart::type_quantity(shell, id, &raw),
        Command::Snapshot => view::snapshot_json(shell).map(Outcome::Print),
        Command::Help => Ok(Outcome::Print(view::help_text())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

/// Routes a control's action into the shell.
pub fn dispatch(shell: &mut Shell, action: Action) -> Result<Outcome, ApiError> {
    debug!(?action, "dispatch");
    match action {
        Action::ToggleView => Ok(view::toggle_view(shell)),
        Action::AddToCart(id) => cart::add_to_cart(shell, id),
        Action::RemoveFromCart(id) => Ok(cart::remove_from_cart(shell, id)),
        Action::UpdateQuantity(id, quantity) => Ok(cart::update_quantity(shell, id, quantity)),
        Action::ClearCart => Ok(cart::clear_cart(shell)),
        Action::Checkout => Ok(cart::checkout(shell)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use crate::views::render;
    use bookstore_core::{Catalog, View};

    fn catalog_screen(shell: &Shell) -> Screen {
        render(shell, &ConfigState::default())
    }

    #[test]
    fn test_parse_blank_line() {
        let shell = Shell::new(Catalog::standard());
        assert_eq!(parse("   ", &catalog_screen(&shell)).unwrap(), None);
    }

    #[test]
    fn test_parse_control_hotkeys() {
        let shell = Shell::new(Catalog::standard());
        let screen = catalog_screen(&shell);

        assert_eq!(
            parse("a3", &screen).unwrap(),
            Some(Command::Action(Action::AddToCart(BookId::new(3))))
        );
        assert_eq!(
            parse(" C ", &screen).unwrap(),
            Some(Command::Action(Action::ToggleView))
        );
    }

    #[test]
    fn test_parse_rejects_controls_not_on_screen() {
        let shell = Shell::new(Catalog::standard());
        let err = parse("clear", &catalog_screen(&shell)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_parse_rejects_hotkey_with_trailing_tokens() {
        let shell = Shell::new(Catalog::standard());
        let screen = catalog_screen(&shell);

        for line in ["a1 a2", "c now", "a3 3"] {
            let err = parse(line, &screen).unwrap_err();
            assert_eq!(err.code, ErrorCode::UnknownCommand, "input {:?}", line);
        }
        assert!(parse("  a1  ", &screen).unwrap().is_some());
    }

    #[test]
    fn test_parse_keywords() {
        let shell = Shell::new(Catalog::standard());
        let screen = catalog_screen(&shell);

        assert_eq!(parse("quit", &screen).unwrap(), Some(Command::Quit));
        assert_eq!(parse("EXIT", &screen).unwrap(), Some(Command::Quit));
        assert_eq!(parse("help", &screen).unwrap(), Some(Command::Help));
        assert_eq!(parse("json", &screen).unwrap(), Some(Command::Snapshot));
        assert_eq!(
            parse("qty 2  7 ", &screen).unwrap(),
            Some(Command::TypeQuantity {
                id: BookId::new(2),
                raw: "7".to_string()
            })
        );
    }

    #[test]
    fn test_parse_qty_requires_valid_id() {
        let shell = Shell::new(Catalog::standard());
        let screen = catalog_screen(&shell);

        assert_eq!(parse("qty", &screen).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(parse("qty x 2", &screen).unwrap_err().code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut shell = Shell::new(Catalog::standard());
        let id = BookId::new(1);

        dispatch(&mut shell, Action::AddToCart(id)).unwrap();
        dispatch(&mut shell, Action::UpdateQuantity(id, 4)).unwrap();
        assert_eq!(shell.cart().item_count(), 4);

        dispatch(&mut shell, Action::ToggleView).unwrap();
        assert_eq!(shell.view(), View::Cart);

        dispatch(&mut shell, Action::RemoveFromCart(id)).unwrap();
        assert!(shell.cart().is_empty());
    }

    #[test]
    fn test_execute_quit_and_help() {
        let mut shell = Shell::new(Catalog::standard());
        assert_eq!(execute(&mut shell, Command::Quit).unwrap(), Outcome::Quit);
        assert!(matches!(
            execute(&mut shell, Command::Help).unwrap(),
            Outcome::Print(_)
        ));
    }
}
