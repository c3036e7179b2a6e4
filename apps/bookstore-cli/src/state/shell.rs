//! # Shell State
//!
//! The top-level coordinator: owns the current cart snapshot and the view
//! toggle, and is the only place either changes.
//!
//! ## Change Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action ──► Shell::add_to_cart / remove / update / clear                │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │             next = cart.op(..)        (fresh snapshot)                  │
//! │                    │                                                    │
//! │            next == cart? ── yes ──► nothing to do                       │
//! │                    │ no                                                 │
//! │                    ▼                                                    │
//! │             cart = next ──► observers(&cart) ──► re-render              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded: the shell is owned by the input loop and handed to
//! views by shared reference.

use std::fmt;

use bookstore_core::{BookId, Cart, CartLine, CartTotals, Catalog, CoreResult, View};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

type CartObserver = Box<dyn FnMut(&Cart)>;

/// Cart store plus view toggle.
pub struct Shell {
    catalog: Catalog,
    cart: Cart,
    view: View,
    observers: Vec<CartObserver>,
}

impl Shell {
    /// Starts a session: empty cart, catalog view.
    pub fn new(catalog: Catalog) -> Self {
        Shell {
            catalog,
            cart: Cart::new(),
            view: View::default(),
            observers: Vec::new(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart snapshot.
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[inline]
    pub fn view(&self) -> View {
        self.view
    }

    /// Totals derived from the current snapshot.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Registers a callback run after every cart change.
    ///
    /// ## Usage
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use bookstore_cli_lib::state::Shell;
    /// use bookstore_core::{BookId, Catalog};
    ///
    /// let mut shell = Shell::new(Catalog::standard());
    /// let seen = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&seen);
    /// shell.subscribe(move |cart| counter.set(cart.item_count()));
    ///
    /// shell.add_to_cart(BookId::new(1)).unwrap();
    /// assert_eq!(seen.get(), 1);
    /// ```
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Cart) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Adds one copy of a catalog book.
    ///
    /// ## Errors
    /// `CoreError::BookNotFound` if the id is not in the catalog; the cart
    /// is left as it was.
    pub fn add_to_cart(&mut self, id: BookId) -> CoreResult<&Cart> {
        let next = self.cart.add_to_cart(self.catalog.find(id)?);
        self.commit(next);
        Ok(&self.cart)
    }

    pub fn remove_from_cart(&mut self, id: BookId) -> &Cart {
        let next = self.cart.remove_from_cart(id);
        self.commit(next);
        &self.cart
    }

    /// Sets a line's quantity; `quantity ≤ 0` removes the line.
    pub fn update_quantity(&mut self, id: BookId, quantity: i64) -> &Cart {
        let next = self.cart.update_quantity(id, quantity);
        self.commit(next);
        &self.cart
    }

    pub fn clear_cart(&mut self) -> &Cart {
        let next = self.cart.clear_cart();
        self.commit(next);
        &self.cart
    }

    /// Flips between catalog and cart. The cart is not touched.
    pub fn toggle_view(&mut self) -> View {
        self.view = self.view.toggled();
        debug!(view = ?self.view, "view toggled");
        self.view
    }

    /// Everything a rendering layer needs, as one serializable value.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            view: self.view,
            lines: self.cart.lines().to_vec(),
            totals: self.totals(),
        }
    }

    fn commit(&mut self, next: Cart) {
        if next == self.cart {
            return;
        }

        self.cart = next;
        debug!(
            lines = self.cart.line_count(),
            items = self.cart.item_count(),
            "cart updated"
        );
        for observer in self.observers.iter_mut() {
            observer(&self.cart);
        }
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("catalog_len", &self.catalog.len())
            .field("cart", &self.cart)
            .field("view", &self.view)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// The presentation boundary: current view, cart lines and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ShellSnapshot {
    pub view: View,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}
