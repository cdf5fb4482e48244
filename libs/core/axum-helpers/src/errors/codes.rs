//! Type-safe error codes for API responses.
//!
//! Each error code includes:
//! - String representation for client consumption (e.g., "INVALID_INPUT")
//! - Integer code for logging and monitoring (e.g., 1012)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or parameter failed a business rule
    InvalidInput,

    /// Query string could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// No route matches the request
    RouteNotFound,

    // Persistence errors (2000-2999)
    /// The backing store rejected or failed a request
    PersistenceError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidInput.as_str(), "INVALID_INPUT");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::PersistenceError => "PERSISTENCE_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Persistence errors
    pub fn code(&self) -> i32 {
        match self {
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InvalidInput => 1012,
            Self::InvalidQuery => 1013,
            Self::RouteNotFound => 1014,

            Self::PersistenceError => 2001,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// Individual errors usually carry a more specific message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidQuery => "Invalid query string",
            Self::NotFound => "Resource not found",
            Self::JsonExtraction => "Failed to parse request body",
            Self::RouteNotFound => "The requested resource was not found",
            Self::PersistenceError => "Persistence layer error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
