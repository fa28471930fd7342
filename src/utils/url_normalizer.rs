//! Target URL checks before storage.
//!
//! The stored form is the `url` crate's serialization, which is plain ASCII
//! and always fits in a `Location` header.

use url::Url;

/// Errors that can occur while normalizing a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    /// The input contains whitespace or control characters, which `Url::parse`
    /// would silently strip.
    #[error("URL must not contain whitespace or control characters")]
    ForbiddenCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Parses `input` and returns its canonical serialization.
///
/// Scheme and host are lowercased, non-ASCII characters are percent-encoded
/// (hosts are punycoded) and an empty path becomes `/`. Query and fragment are
/// kept.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::ForbiddenCharacter`] for inputs with
/// whitespace or control characters and
/// [`UrlNormalizationError::InvalidFormat`] for anything `Url::parse` rejects.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("HTTPS://EXAMPLE.COM").unwrap(), "https://example.com/");
/// assert!(normalize_url("https://example.com/a\nb").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlNormalizationError::ForbiddenCharacter);
    }

    let url = Url::parse(input)?;

    Ok(url.to_string())
}
