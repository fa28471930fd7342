//! Utility functions.
//!
//! - [`alias_generator`] - Random alias generation and custom alias checks
//! - [`url_normalizer`] - Target URL checks and canonical form

pub mod alias_generator;
pub mod url_normalizer;
