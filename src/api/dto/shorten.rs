//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute, at most 2048 characters).
    #[validate(
        url(message = "Invalid URL format"),
        length(min = 1, max = 2048, message = "URL must be 1 to 2048 characters")
    )]
    pub url: String,
}

/// A freshly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_passes() {
        let req = ShortenRequest {
            url: "https://example.com/path?q=1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails() {
        for url in ["", "not-a-url", "example.com"] {
            let req = ShortenRequest {
                url: url.to_string(),
            };
            assert!(req.validate().is_err(), "{url:?} should be rejected");
        }
    }

    #[test]
    fn test_length_limit_is_2048() {
        let prefix = "https://example.com/";

        let at_limit = format!("{prefix}{}", "a".repeat(2048 - prefix.len()));
        assert_eq!(at_limit.len(), 2048);
        assert!(ShortenRequest { url: at_limit }.validate().is_ok());

        let over_limit = format!("{prefix}{}", "a".repeat(2049 - prefix.len()));
        assert!(ShortenRequest { url: over_limit }.validate().is_err());
    }
}
