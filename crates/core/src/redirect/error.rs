//! Navigation error types.

use thiserror::Error;

/// Errors raised by a [`Navigator`](super::Navigator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Destination is not an absolute in-app path.
    #[error("invalid navigation path: {0}")]
    InvalidPath(String),

    /// The host could not perform the navigation.
    #[error("navigation unavailable: {0}")]
    Unavailable(String),
}
