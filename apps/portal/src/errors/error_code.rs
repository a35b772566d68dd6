//! Error codes for the portal API.
//!
//! Every code that can appear in a problem-details body is listed here.
//! Codes are SCREAMING_SNAKE_CASE and map 1:1 to the response strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No session cookie was presented
    UnauthorizedMissingToken,
    /// Token failed signature or structure checks
    UnauthorizedInvalidJwt,
    /// Token has expired
    UnauthorizedExpiredJwt,

    // Request handling
    NotFound,

    // System Errors
    Internal,
    /// Missing or invalid process configuration
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
