#![allow(dead_code)]

use alias_shortener::prelude::{AppState, SqliteUrlRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub const DOMAIN_PREFIX: &str = "https://s.example.com/";

pub async fn create_test_repository(pool: SqlitePool) -> Arc<SqliteUrlRepository> {
    let repo = SqliteUrlRepository::new(Arc::new(pool));
    repo.init().await.unwrap();
    Arc::new(repo)
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_aliases(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state(pool: SqlitePool) -> AppState<SqliteUrlRepository> {
    let repo = create_test_repository(pool).await;
    AppState::new(repo, 8, DOMAIN_PREFIX)
}
