//! Random alias generation and custom alias checks.
//!
//! Aliases are drawn uniformly from `A-Z`, `a-z` and `0-9`. No uniqueness check
//! happens here; the storage layer rejects duplicates on insert.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Alias length used by the save flow when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 8;

/// Longest alias, generated or caller-chosen.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that collide with fixed routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Failures while generating or checking an alias.
#[derive(Debug, Error)]
pub enum AliasError {
    /// The operating system entropy source could not be read.
    #[error("random source unavailable")]
    RandomSourceUnavailable(#[from] getrandom::Error),

    /// A zero-length alias was requested.
    #[error("alias length must be positive")]
    ZeroLength,

    /// A caller-chosen alias is longer than [`MAX_ALIAS_LENGTH`].
    #[error("alias must be at most {} characters", MAX_ALIAS_LENGTH)]
    TooLong,

    /// A caller-chosen alias contains characters outside `[A-Za-z0-9_-]`.
    #[error("alias may only contain letters, digits, '_' and '-'")]
    InvalidCharacters,

    /// A caller-chosen alias collides with a fixed route.
    #[error("alias '{0}' is reserved")]
    Reserved(String),
}

impl AliasError {
    /// Returns true if the caller supplied an unusable alias, as opposed to
    /// generation failing.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            AliasError::TooLong | AliasError::InvalidCharacters | AliasError::Reserved(_)
        )
    }
}

/// Generates a random alphanumeric alias of exactly `length` characters.
///
/// A fresh [`StdRng`] is seeded from the operating system for every call.
///
/// # Errors
///
/// Returns [`AliasError::RandomSourceUnavailable`] if the OS entropy source
/// fails and [`AliasError::ZeroLength`] if `length` is zero.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(8)?;
/// assert_eq!(alias.len(), 8);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> Result<String, AliasError> {
    if length == 0 {
        return Err(AliasError::ZeroLength);
    }

    let mut seed = [0u8; 32];
    getrandom::fill(&mut seed)?;

    let alias = StdRng::from_seed(seed)
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();

    Ok(alias)
}

/// Checks a caller-chosen alias before it is stored.
///
/// Only aliases that `GET /{alias}` can later resolve pass: at most
/// [`MAX_ALIAS_LENGTH`] characters of `[A-Za-z0-9_-]`, and not the name of a
/// fixed route.
///
/// # Errors
///
/// Returns [`AliasError::TooLong`], [`AliasError::InvalidCharacters`] or
/// [`AliasError::Reserved`].
pub fn validate_custom_alias(alias: &str) -> Result<(), AliasError> {
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AliasError::TooLong);
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AliasError::InvalidCharacters);
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasError::Reserved(alias.to_string()));
    }

    Ok(())
}
