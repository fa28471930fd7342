//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, storage errors and capability traits
//! - **Application Layer** ([`application`]) - Save / resolve / delete flows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Aliases are unique; the database unique index is the only arbiter, so
//!   concurrent saves of one alias see exactly one winner
//! - Generated aliases are random alphanumeric strings (8 characters by default)
//! - Storage failures are logged with their cause and reported to clients as a
//!   generic internal error
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://storage.db"
//! export DOMAIN_PREFIX="https://s.example.com/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::errors::StorageError;
    pub use crate::domain::repositories::{
        UrlDeleter, UrlGetter, UrlInspector, UrlRepository, UrlSaver,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
