//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Allowed alias characters. Empty is accepted and means "generate one".
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to save a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen alias.
    #[serde(default)]
    #[validate(length(max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

/// Successful save result.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    /// Domain prefix followed by the alias.
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: "ok",
            alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://example.com", Some("abc123")).validate().is_ok());
        assert!(request("https://example.com", None).validate().is_ok());
        assert!(request("https://example.com", Some("")).validate().is_ok());
        assert!(request("https://example.com", Some("my_link-2")).validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let errors = request("not-a-url", None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_empty_url() {
        assert!(request("", None).validate().is_err());
    }

    #[test]
    fn test_alias_with_forbidden_characters() {
        let errors = request("https://example.com", Some("a/b"))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("alias"));

        assert!(request("https://example.com", Some("has space")).validate().is_err());
    }

    #[test]
    fn test_alias_too_long() {
        let alias = "a".repeat(65);
        assert!(request("https://example.com", Some(&alias)).validate().is_err());
    }

    #[test]
    fn test_deserialize_without_alias() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert!(req.alias.is_none());
    }
}
