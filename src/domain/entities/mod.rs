//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted alias-to-URL mapping

pub mod url_record;

pub use url_record::UrlRecord;
