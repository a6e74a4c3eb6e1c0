//! Collaborator failure taxonomy.

use thiserror::Error;

/// Failures reported by quayside's external collaborators.
///
/// The core never inspects or rewrites the message text; it is carried
/// verbatim so the caller sees the collaborator's own diagnostic. The
/// variant, not the message, is what callers branch on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed resource (project, image, snapshot) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The collaborator could not be reached or its backing store failed.
    ///
    /// Covers I/O failures, unreachable services, and refused writes that
    /// are not attributable to the request itself.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Any other collaborator failure.
    ///
    /// A catch-all for errors the collaborator did not classify. Should
    /// include enough context for debugging.
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Creates a new not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Creates a new unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Creates a new uncategorized error.
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this is an unavailable error.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
