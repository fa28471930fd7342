//! Alias allocation and URL lookup service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlInspector, UrlSaver};
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_custom_alias};
use crate::utils::url_normalizer::normalize_url;

/// Service for saving, resolving and deleting URL mappings.
///
/// Each operation is only available when the store provides the matching
/// capability, so callers can be wired with a store that implements just
/// what they use.
pub struct UrlService<R> {
    store: Arc<R>,
    alias_length: usize,
}

impl<R> UrlService<R> {
    /// Creates a new service generating aliases of `alias_length` characters.
    pub fn new(store: Arc<R>, alias_length: usize) -> Self {
        Self {
            store,
            alias_length,
        }
    }
}

impl<R: UrlSaver> UrlService<R> {
    /// Stores `url` and returns the alias it was saved under.
    ///
    /// The URL is stored in its canonical form (see
    /// [`normalize_url`]). An absent or empty `alias` is replaced by a random
    /// one. The store is called once; a generated alias that collides is
    /// reported like any other conflict and is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unusable URL or alias,
    /// [`AppError::Conflict`] if the alias is taken and
    /// [`AppError::Internal`] if alias generation or storage fails.
    pub async fn shorten(&self, url: &str, alias: Option<String>) -> Result<String, AppError> {
        let url = normalize_url(url)?;

        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_custom_alias(&alias)?;
                alias
            }
            None => generate_alias(self.alias_length)?,
        };

        self.store.save_url(&url, &alias).await?;

        tracing::info!(alias = %alias, url = %url, "url saved");

        Ok(alias)
    }
}

impl<R: UrlGetter> UrlService<R> {
    /// Returns the target URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        Ok(self.store.get_url(alias).await?)
    }
}

impl<R: UrlDeleter> UrlService<R> {
    /// Deletes the mapping for `alias` and returns the URL it pointed to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn remove(&self, alias: &str) -> Result<String, AppError> {
        let url = self.store.delete_url(alias).await?;

        tracing::info!(alias, url = %url, "url deleted");

        Ok(url)
    }
}

impl<R: UrlInspector> UrlService<R> {
    /// Returns the full record for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn inspect(&self, alias: &str) -> Result<UrlRecord, AppError> {
        Ok(self.store.find_record(alias).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::repositories::{MockUrlDeleter, MockUrlGetter, MockUrlSaver};
    use std::io;

    #[tokio::test]
    async fn test_shorten_with_custom_alias() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver
            .expect_save_url()
            .withf(|url, alias| url == "https://example.com/" && alias == "abc123")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let alias = service
            .shorten("https://example.com", Some("abc123".to_string()))
            .await
            .unwrap();

        assert_eq!(alias, "abc123");
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_absent() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver
            .expect_save_url()
            .withf(|_, alias| alias.len() == 8 && alias.chars().all(|c| c.is_ascii_alphanumeric()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let alias = service.shorten("https://example.com", None).await.unwrap();

        assert_eq!(alias.len(), 8);
    }

    #[tokio::test]
    async fn test_shorten_treats_empty_alias_as_absent() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver
            .expect_save_url()
            .withf(|_, alias| alias.len() == 12)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UrlService::new(Arc::new(mock_saver), 12);

        let alias = service
            .shorten("https://example.com", Some(String::new()))
            .await
            .unwrap();

        assert_eq!(alias.len(), 12);
    }

    #[tokio::test]
    async fn test_shorten_rejects_reserved_alias() {
        let mut mock_saver = MockUrlSaver::new();
        mock_saver.expect_save_url().times(0);

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let result = service
            .shorten("https://example.com", Some("health".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_stores_canonical_url() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver
            .expect_save_url()
            .withf(|url, _| url == "https://example.com/caf%C3%A9")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UrlService::new(Arc::new(mock_saver), 8);

        service
            .shorten("HTTPS://EXAMPLE.COM/café", Some("cafe".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_shorten_rejects_unusable_url() {
        let mut mock_saver = MockUrlSaver::new();
        mock_saver.expect_save_url().times(0);

        let service = UrlService::new(Arc::new(mock_saver), 8);

        for url in ["not-a-url", "https://example.com/a\nb", ""] {
            let result = service.shorten(url, Some("abc".to_string())).await;
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{:?} should be rejected",
                url
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_rejects_malformed_alias() {
        let mut mock_saver = MockUrlSaver::new();
        mock_saver.expect_save_url().times(0);

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let too_long = "a".repeat(65);
        for alias in ["a/b", "has space", too_long.as_str()] {
            let result = service
                .shorten("https://example.com", Some(alias.to_string()))
                .await;
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{:?} should be rejected",
                alias
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_conflict_is_not_retried() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver
            .expect_save_url()
            .times(1)
            .returning(|_, _| Err(StorageError::AliasExists { op: "test" }));

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let result = service.shorten("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_shorten_storage_failure_is_internal() {
        let mut mock_saver = MockUrlSaver::new();

        mock_saver.expect_save_url().times(1).returning(|_, _| {
            Err(StorageError::storage("test", io::Error::other("disk full")))
        });

        let service = UrlService::new(Arc::new(mock_saver), 8);

        let err = service
            .shorten("https://example.com", Some("abc".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(!err.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn test_shorten_zero_length_fails_before_storage() {
        let mut mock_saver = MockUrlSaver::new();
        mock_saver.expect_save_url().times(0);

        let service = UrlService::new(Arc::new(mock_saver), 0);

        let result = service.shorten("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_getter = MockUrlGetter::new();

        mock_getter
            .expect_get_url()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let service = UrlService::new(Arc::new(mock_getter), 8);

        let url = service.resolve("abc123").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_getter = MockUrlGetter::new();

        mock_getter
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound { op: "test" }));

        let service = UrlService::new(Arc::new(mock_getter), 8);

        let result = service.resolve("missing").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_returns_plain_url() {
        let mut mock_deleter = MockUrlDeleter::new();

        mock_deleter
            .expect_delete_url()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let service = UrlService::new(Arc::new(mock_deleter), 8);

        let url = service.remove("abc123").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let mut mock_deleter = MockUrlDeleter::new();

        mock_deleter
            .expect_delete_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound { op: "test" }));

        let service = UrlService::new(Arc::new(mock_deleter), 8);

        let result = service.remove("missing").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
