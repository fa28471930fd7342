//! Persisted alias-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// `alias` is unique across all records. `created_at` never changes after
/// insertion; `updated_at` is refreshed by the database on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        alias: String,
        target_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            alias,
            target_url,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the record was modified after it was inserted.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}
