//! Error types for core operations.

use quayside_error::StoreError;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur during image resolution and selection.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Collaborator failure, carried through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The project identifier is empty or contains the path separator.
    ///
    /// An empty identifier would produce a pattern ending in `/` that
    /// matches every image in the group; one containing `/` would match
    /// into another project's namespace. Both are rejected up front.
    #[error("invalid project id: {0:?}")]
    InvalidProjectId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Returns true if this wraps a collaborator not-found failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound(_)))
    }
}
