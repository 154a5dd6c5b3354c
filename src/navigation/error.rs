//! Navigation error types

use thiserror::Error;

/// Errors that can occur while navigating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Target is not an in-app absolute path
    #[error("Invalid navigation target: {0:?}")]
    InvalidPath(String),

    /// The history backend refused the operation
    #[error("History error: {0}")]
    History(String),
}

/// Result type alias for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
