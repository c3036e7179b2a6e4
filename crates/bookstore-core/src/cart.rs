//! # Cart Store
//!
//! The shopping cart and its derived totals.
//!
//! ## Snapshot Semantics
//! Every operation takes the current cart by shared reference and returns a
//! fresh `Cart`. The previous snapshot is never modified, so anything still
//! holding it (a rendered screen, an observer) keeps a consistent view.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation                 Next Snapshot       │
//! │  ───────────              ─────────                 ─────────────       │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart(book) ─────► qty + 1 or append  │
//! │                                                                         │
//! │  − / + / typed qty ──────► update_quantity(id, n) ► qty = n, or remove │
//! │                                                     when n ≤ 0          │
//! │                                                                         │
//! │  ✕ ──────────────────────► remove_from_cart(id) ──► line dropped       │
//! │                                                                         │
//! │  "Clear Cart" ───────────► clear_cart() ──────────► empty              │
//! │                                                                         │
//! │  Any snapshot ───────────► totals() ──────────────► CartTotals         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Book, BookId, TaxRate};
use crate::STANDARD_TAX_RATE;

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a copy of the book plus how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// The book's fields, frozen when it was first added.
    #[serde(flatten)]
    pub book: Book,

    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(book: &Book) -> Self {
        CartLine {
            book: book.clone(),
            quantity: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> BookId {
        self.book.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.book.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by book id (adding the same book increases quantity)
/// - Every quantity is ≥ 1 (a request for ≤ 0 removes the line)
/// - Lines keep the order in which their books were first added
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Finds the line for a book.
    pub fn line(&self, id: BookId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Number of distinct books in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of copies across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one copy of a book.
    ///
    /// ## Behavior
    /// - Book already in cart: its quantity goes up by 1
    /// - Book not in cart: a new line with quantity 1 is appended
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Cart, Catalog, BookId};
    ///
    /// let catalog = Catalog::standard();
    /// let gatsby = catalog.get(BookId::new(1)).unwrap();
    ///
    /// let cart = Cart::new().add_to_cart(gatsby).add_to_cart(gatsby);
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.item_count(), 2);
    /// ```
    #[must_use]
    pub fn add_to_cart(&self, book: &Book) -> Cart {
        let mut next = self.clone();
        match next.lines.iter_mut().find(|l| l.id() == book.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => next.lines.push(CartLine::new(book)),
        }
        next
    }

    /// Removes a book's line. Removing a book that is not in the cart
    /// returns an identical snapshot.
    #[must_use]
    pub fn remove_from_cart(&self, id: BookId) -> Cart {
        Cart {
            lines: self
                .lines
                .iter()
                .filter(|l| l.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// Sets a line's quantity to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0`: same as `remove_from_cart(id)`
    /// - Book not in cart: no change
    /// - Otherwise the line keeps its position and takes the new quantity
    #[must_use]
    pub fn update_quantity(&self, id: BookId, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|l| l.id() == id) {
            line.quantity = quantity;
        }
        next
    }

    /// Returns an empty cart.
    #[must_use]
    pub fn clear_cart(&self) -> Cart {
        Cart::new()
    }

    /// Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Totals at the storefront's flat 10% rate.
    pub fn totals(&self) -> CartTotals {
        let rate = STANDARD_TAX_RATE;
        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(rate);
        let shipping = Money::zero();

        CartTotals {
            line_count: self.line_count(),
            item_count: self.item_count(),
            subtotal,
            shipping,
            tax_rate: rate,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived figures for the order summary.
///
/// ```text
/// ┌──────────────────────────────┐
/// │  Subtotal:          $35.98   │   Σ price × qty
/// │  Shipping:            FREE   │   always zero
/// │  Tax (10%):          $3.60   │   subtotal × rate, half-up to the cent
/// │  Total:             $39.58   │   subtotal + tax
/// └──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    /// Distinct books.
    pub line_count: usize,
    /// Copies across all lines; this is the count shown to the user.
    pub item_count: u64,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
