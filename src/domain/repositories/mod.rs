//! Repository trait definitions for the domain layer.
//!
//! Storage is split into single-operation capabilities following the
//! Repository pattern. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlInspector, UrlRepository, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockUrlDeleter, MockUrlGetter, MockUrlInspector, MockUrlSaver};
