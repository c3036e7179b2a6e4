//! # Domain Types
//!
//! Core domain types used throughout the bookstore.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │    TaxRate      │   │      View       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (BookId)    │   │  bps (u32)      │   │  Catalog        │       │
//! │  │  title, author  │   │  1000 = 10%     │   │  Cart           │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  category, ...  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Renders the rate as a percentage label: `10%`, `8.5%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Book Identity
// =============================================================================

/// Catalog identity of a book. Always a positive integer in a valid catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookId(u32);

impl BookId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        BookId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book available in the catalog.
///
/// Books are created once when the catalog is built and never change for
/// the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Book {
    /// Unique catalog identifier.
    pub id: BookId,

    /// Display title shown on the card.
    pub title: String,

    pub author: String,

    /// Unit price (non-negative).
    pub price: Money,

    /// Shelf category, e.g. "Classic" or "Dystopian".
    pub category: String,

    /// One-line blurb shown on the card.
    pub description: String,

    /// Glyph used as the cover image.
    pub image: String,
}

// =============================================================================
// View
// =============================================================================

/// Which page the storefront is showing.
///
/// ```text
///            toggle
///   Catalog ────────► Cart
///      ▲               │
///      └───────────────┘
///            toggle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The book grid. Initial state.
    #[default]
    Catalog,
    /// The shopping cart with order summary.
    Cart,
}

impl View {
    /// Returns the other view. This is the only transition.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            View::Catalog => View::Cart,
            View::Cart => View::Catalog,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
