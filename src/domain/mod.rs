//! Domain layer containing entities, storage errors and repository traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`errors`] - Typed storage failures
//! - [`repositories`] - Storage capability trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer

pub mod entities;
pub mod errors;
pub mod repositories;
