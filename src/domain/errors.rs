//! Typed failures reported by URL storage backends.

use thiserror::Error;

/// Boxed underlying cause of a storage failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the URL store capabilities.
///
/// Every variant carries the identifier of the operation that produced it.
/// [`StorageError::Storage`] keeps the backend error as its
/// [`source`](std::error::Error::source) so it can be logged, but its `Display`
/// never includes the backend text.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Another record already uses the alias.
    #[error("{op}: alias already exists")]
    AliasExists { op: &'static str },

    /// No record matches the alias.
    #[error("{op}: url not found")]
    NotFound { op: &'static str },

    /// A required argument was empty.
    #[error("{op}: {field} must not be empty")]
    InvalidInput {
        op: &'static str,
        field: &'static str,
    },

    /// Any other backend failure (connection, syntax, I/O).
    #[error("{op}: storage failure")]
    Storage {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    /// Wraps a backend error as an opaque storage failure.
    pub fn storage(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            op,
            source: source.into(),
        }
    }

    /// Returns the operation identifier attached to this error.
    pub fn op(&self) -> &'static str {
        match self {
            Self::AliasExists { op }
            | Self::NotFound { op }
            | Self::InvalidInput { op, .. }
            | Self::Storage { op, .. } => op,
        }
    }
}
