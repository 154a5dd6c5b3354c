//! Routing error types
//!
//! Errors raised while building path patterns and route tables. Resolving a
//! path never errors: an unmatched path is reported as `None`.

use thiserror::Error;

/// Errors that can occur while constructing routes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Pattern does not begin with `/`
    #[error("Pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// Pattern declares more than one `:name` segment
    #[error("Pattern declares more than one parameter: {0}")]
    TooManyParams(String),

    /// `:` segment without a name, or a name with invalid characters
    #[error("Invalid parameter name in pattern {pattern}: {name:?}")]
    InvalidParamName { pattern: String, name: String },

    /// Two routes share the same pattern string
    #[error("Duplicate route pattern: {0}")]
    DuplicatePattern(String),
}

/// Result type alias for route construction
pub type RouteResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::DuplicatePattern("/login".to_string());
        assert_eq!(err.to_string(), "Duplicate route pattern: /login");

        let err = RouteError::InvalidParamName {
            pattern: "/symbol/:".to_string(),
            name: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter name in pattern /symbol/:: \"\""
        );
    }
}
