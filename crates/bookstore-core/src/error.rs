//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog / lookup errors                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstore-cli errors (app)                                            │
//! │  └── ApiError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice line            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never produce errors. These types only guard the edges:
//! building a catalog and reading user-typed input.

use thiserror::Error;

use crate::types::BookId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No book with this id exists in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// Two catalog records share the same id.
    ///
    /// ## When This Occurs
    /// - A catalog source hands over records with a repeated `id`
    #[error("Duplicate book id in catalog: {0}")]
    DuplicateBookId(BookId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
