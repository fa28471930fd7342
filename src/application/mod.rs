//! Application layer services implementing the save, resolve and delete flows.
//!
//! Services consume the domain capability traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias allocation and URL lookup

pub mod services;
