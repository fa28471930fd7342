//! Capability traits for URL storage.
//!
//! Each operation is its own trait so consumers only depend on what they use.
//! [`UrlRepository`] bundles all of them for code that needs the full store.

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StorageError;
use async_trait::async_trait;

/// Persists new alias-to-URL mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `url` under `alias`.
    ///
    /// Conflict detection is done by the insert itself, so of two concurrent
    /// callers racing on one alias exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is taken,
    /// [`StorageError::InvalidInput`] if either argument is empty and
    /// [`StorageError::Storage`] on backend failures.
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError>;
}

/// Resolves an alias to its target URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record matches and
    /// [`StorageError::Storage`] on backend failures.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes mappings by alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the record stored under `alias` and returns its target URL.
    ///
    /// Lookup and deletion happen atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record matches and
    /// [`StorageError::Storage`] on backend failures.
    async fn delete_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Reads full records, including timestamps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlInspector: Send + Sync {
    /// Returns the whole record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record matches and
    /// [`StorageError::Storage`] on backend failures.
    async fn find_record(&self, alias: &str) -> Result<UrlRecord, StorageError>;
}

/// A store offering every URL capability.
pub trait UrlRepository: UrlSaver + UrlGetter + UrlDeleter + UrlInspector {}

impl<T> UrlRepository for T where T: UrlSaver + UrlGetter + UrlDeleter + UrlInspector {}
