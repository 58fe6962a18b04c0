//! Integer error codes attached to log events.
//!
//! Codes never appear in response bodies; the wire shape is fixed to
//! `{"error": ...}` / `{"errors": [...]}`. They exist so log queries can group
//! failures without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationFailed;
//! assert_eq!(code.as_str(), "VALIDATION_FAILED");
//! assert_eq!(code.code(), 1001);
//! ```

/// Failure classes recognised by the error normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// One or more field rules were violated
    ValidationFailed,

    /// Request body could not be read or decoded
    InvalidBody,

    /// Requested record does not exist
    NotFound,

    /// No route matches the request's method and path
    RouteNotMatched,

    // Server errors (5000-5999)
    /// Anything not classified above
    Unexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidBody => "INVALID_BODY",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotMatched => "ROUTE_NOT_MATCHED",
            Self::Unexpected => "UNEXPECTED",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationFailed => 1001,
            Self::InvalidBody => 1003,
            Self::NotFound => 1004,
            Self::RouteNotMatched => 1010,
            Self::Unexpected => 5000,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.code() >= 5000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 5] = [
        ErrorCode::ValidationFailed,
        ErrorCode::InvalidBody,
        ErrorCode::NotFound,
        ErrorCode::RouteNotMatched,
        ErrorCode::Unexpected,
    ];

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_only_unexpected_is_server_error() {
        let server: Vec<_> = ALL.iter().filter(|c| c.is_server_error()).collect();
        assert_eq!(server, vec![&ErrorCode::Unexpected]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND (1004)");
    }
}
