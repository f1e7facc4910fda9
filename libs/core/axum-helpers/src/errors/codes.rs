//! Error codes carried in every error body.
//!
//! Each code has a string form for clients, an integer for logs and metrics,
//! and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ServiceUnavailable;
//! assert_eq!(code.as_str(), "SERVICE_UNAVAILABLE");
//! assert_eq!(code.code(), 1006);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors
    /// Malformed query string or request parameters
    InvalidRequest,

    /// No route matches the request path
    NotFound,

    /// Route exists but not for this method
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency is down or the service failed to start
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidRequest => 1001,
            ErrorCode::NotFound => 1002,
            ErrorCode::MethodNotAllowed => 1003,
            ErrorCode::InternalError => 1005,
            ErrorCode::ServiceUnavailable => 1006,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "The request parameters are invalid",
            ErrorCode::NotFound => "The requested resource was not found",
            ErrorCode::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
