//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Bookstore                          │
//! │                                                                         │
//! │  Input line ──► parse ──► dispatch ──► Result<Outcome, ApiError>        │
//! │                   │           │                                         │
//! │                   │           ├── CoreError::BookNotFound ──┐           │
//! │                   │           │                             ▼           │
//! │                   └── ValidationError ───────────────────► ApiError     │
//! │                                                             │           │
//! │                                            printed as a notice line,    │
//! │                                            cart and view untouched      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only terminal I/O failures end the session.

use bookstore_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Book id is not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Input line is not a known command or control
    UnknownCommand,

    /// Terminal I/O or serialization failed
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown-command error.
    pub fn unknown_command(input: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: '{}' (type 'help')", input),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => {
                ApiError::new(ErrorCode::NotFound, format!("Book not found: {}", id))
            }
            CoreError::DuplicateBookId(id) => {
                tracing::error!(%id, "catalog contains a duplicate id");
                ApiError::internal(format!("Catalog is invalid: duplicate id {}", id))
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("terminal I/O failed: {}", err);
        ApiError::internal(format!("Terminal I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Serialization failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
