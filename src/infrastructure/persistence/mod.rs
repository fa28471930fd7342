//! SQLite repository implementations.
//!
//! Concrete implementations of the domain storage capabilities using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias-to-URL storage, lookup and deletion

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
