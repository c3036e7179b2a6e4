//! # bookstore-core: Pure Business Logic for the Bookstore
//!
//! This crate holds the storefront's business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal (bookstore-cli)                        │   │
//! │  │    Header ──► Catalog View ◄──► Cart View ──► Order Summary     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Shell actions                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │   Book    │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │   View    │  │  TaxRate  │  │ CartLine  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, BookId, TaxRate, View)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The ordered, immutable list of books
//! - [`cart`] - Cart snapshots and derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{BookId, Cart, Catalog};
//!
//! let catalog = Catalog::standard();
//! let gatsby = catalog.get(BookId::new(1)).unwrap(); // $12.99
//!
//! let cart = Cart::new().add_to_cart(gatsby).add_to_cart(gatsby);
//! let totals = cart.totals();
//!
//! assert_eq!(totals.subtotal.to_string(), "$25.98");
//! assert_eq!(totals.tax.to_string(), "$2.60");
//! assert_eq!(totals.total.to_string(), "$28.58");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The storefront's flat sales tax: 10%.
pub const STANDARD_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Largest quantity accepted from typed input.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
