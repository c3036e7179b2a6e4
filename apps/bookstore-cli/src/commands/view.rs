//! View toggle, JSON snapshot and help.

use tracing::debug;

use super::Outcome;
use crate::error::ApiError;
use crate::state::Shell;

/// Flips between catalog and cart.
pub fn toggle_view(shell: &mut Shell) -> Outcome {
    let view = shell.toggle_view();
    debug!(?view, "toggle_view command");
    Outcome::Render
}

/// The presentation snapshot as pretty JSON.
pub fn snapshot_json(shell: &Shell) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&shell.snapshot())?)
}

pub fn help_text() -> String {
    [
        "Controls are shown in brackets, e.g. [a3] or [c]. Type the key and press Enter.",
        "  c              show / hide the cart",
        "  a<ID>          add a book (catalog)",
        "  +<ID> / -<ID>  one more / one less (cart)",
        "  x<ID>          remove a book (cart)",
        "  qty <ID> <N>   type a quantity (cart)",
        "  clear          clear the cart",
        "  checkout       proceed to checkout",
        "  json           print the current state as JSON",
        "  quit           leave the store",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{BookId, Catalog, View};

    #[test]
    fn test_toggle_twice() {
        let mut shell = Shell::new(Catalog::standard());
        toggle_view(&mut shell);
        toggle_view(&mut shell);
        assert_eq!(shell.view(), View::Catalog);
    }

    #[test]
    fn test_snapshot_json() {
        let mut shell = Shell::new(Catalog::standard());
        shell.add_to_cart(BookId::new(8)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&snapshot_json(&shell).unwrap()).unwrap();
        assert_eq!(json["view"], "catalog");
        assert_eq!(json["lines"][0]["title"], "The Hobbit");
        assert_eq!(json["totals"]["total"], 1649);
    }
}
