//! SQLite implementation of the URL store.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StorageError;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlInspector, UrlSaver};

/// Schema bootstrap. Every statement is idempotent.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS url (
    id INTEGER PRIMARY KEY,
    alias TEXT NOT NULL,
    url TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_alias ON url(alias);
CREATE TRIGGER IF NOT EXISTS url_updated_at_trigger
AFTER UPDATE ON url
FOR EACH ROW
BEGIN
    UPDATE url SET updated_at = CURRENT_TIMESTAMP WHERE id = OLD.id;
END;
"#;

#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(
            row.id,
            row.alias,
            row.url,
            row.created_at.and_utc(),
            row.updated_at.and_utc(),
        )
    }
}

/// SQLite-backed URL store.
///
/// Alias uniqueness is enforced by the `idx_alias` unique index; no operation
/// reads before it writes.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Creates the table, its unique alias index and the `updated_at` trigger
    /// if they do not exist yet.
    ///
    /// Safe to call on every startup.
    pub async fn init(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.init";

        sqlx::raw_sql(SCHEMA)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP, e))?;

        Ok(())
    }

    /// Checks that the database answers queries.
    pub async fn ping(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.ping";

        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP, e))?;

        Ok(())
    }
}

/// Returns true if the error is a unique constraint violation.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

fn require_non_empty(
    op: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), StorageError> {
    if value.is_empty() {
        return Err(StorageError::InvalidInput { op, field });
    }
    Ok(())
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.save_url";

        require_non_empty(OP, "url", url)?;
        require_non_empty(OP, "alias", alias)?;

        sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::AliasExists { op: OP }
                } else {
                    StorageError::storage(OP, e)
                }
            })?;

        Ok(())
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.get_url";

        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP, e))?
            .ok_or(StorageError::NotFound { op: OP })
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.delete_url";

        sqlx::query_scalar::<_, String>("DELETE FROM url WHERE alias = ? RETURNING url")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::storage(OP, e))?
            .ok_or(StorageError::NotFound { op: OP })
    }
}

#[async_trait]
impl UrlInspector for SqliteUrlRepository {
    async fn find_record(&self, alias: &str) -> Result<UrlRecord, StorageError> {
        const OP: &str = "storage.sqlite.find_record";

        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url, created_at, updated_at
            FROM url
            WHERE alias = ?
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| StorageError::storage(OP, e))?;

        row.map(UrlRecord::from)
            .ok_or(StorageError::NotFound { op: OP })
    }
}
