//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// There is a single kind: a malformed call parameter. It is returned before
/// any partition is allocated, so callers never observe a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid call parameter (non-positive count, absent collection, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument(msg) => msg,
        }
    }
}
