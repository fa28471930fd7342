//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// Application state shared by all handlers.
///
/// Generic over the store so each handler only requires the capability it
/// calls.
pub struct AppState<R> {
    pub url_service: Arc<UrlService<R>>,
    /// Prepended to aliases returned to clients, e.g. `https://s.example.com/`.
    pub domain_prefix: String,
}

impl<R> AppState<R> {
    /// Creates the state around a store.
    pub fn new(store: Arc<R>, alias_length: usize, domain_prefix: impl Into<String>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(store, alias_length)),
            domain_prefix: domain_prefix.into(),
        }
    }

    /// Builds the external short link for an alias.
    pub fn short_link(&self, alias: &str) -> String {
        format!("{}{}", self.domain_prefix, alias)
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            url_service: Arc::clone(&self.url_service),
            domain_prefix: self.domain_prefix.clone(),
        }
    }
}
