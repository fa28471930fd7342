//! Data Transfer Objects for API requests and responses.
//!
//! DTOs handle JSON serialization and input validation via `validator`.

pub mod delete;
pub mod health;
pub mod save;
