//! Checks on URLs accepted as redirect targets.
//!
//! A stored URL is sent back verbatim in a `Location` header, so it has to be
//! an absolute `http`/`https` URL made only of visible ASCII characters.

use thiserror::Error;
use url::Url;

/// Reasons a URL cannot be used as a redirect target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("URL contains {0:?}; whitespace, control and non-ASCII characters must be percent-encoded")]
    UnencodedCharacter(char),
}

/// Checks that `input` can be stored and later redirected to unchanged.
///
/// The raw string is checked before parsing because `Url::parse` silently
/// drops tabs and newlines.
///
/// # Errors
///
/// Returns [`TargetUrlError::UnencodedCharacter`] for anything outside
/// visible ASCII (`!` to `~`).
/// Returns [`TargetUrlError::InvalidFormat`] if the URL does not parse.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for schemes other than
/// `http` and `https`, including `javascript:`, `data:` and `file:`.
pub fn check_target_url(input: &str) -> Result<(), TargetUrlError> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(TargetUrlError::UnencodedCharacter(c));
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(TargetUrlError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(check_target_url("http://example.com"), Ok(()));
        assert_eq!(
            check_target_url("https://example.com/path?q=1&r=%20#top"),
            Ok(())
        );
        assert_eq!(check_target_url("HTTPS://EXAMPLE.COM:8443/"), Ok(()));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "file:///etc/passwd",
            "ftp://files.example.com/x",
            "data:text/html,<script>alert(1)</script>",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                check_target_url(input),
                Err(TargetUrlError::UnsupportedProtocol),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            check_target_url("https://example.com/a\nb"),
            Err(TargetUrlError::UnencodedCharacter('\n'))
        );
        assert_eq!(
            check_target_url("https://example.com/\tx"),
            Err(TargetUrlError::UnencodedCharacter('\t'))
        );
        assert_eq!(
            check_target_url("https://example.com/\u{7f}"),
            Err(TargetUrlError::UnencodedCharacter('\u{7f}'))
        );
    }

    #[test]
    fn test_rejects_spaces_and_non_ascii() {
        assert_eq!(
            check_target_url(" https://example.com"),
            Err(TargetUrlError::UnencodedCharacter(' '))
        );
        assert_eq!(
            check_target_url("https://example.com/a b"),
            Err(TargetUrlError::UnencodedCharacter(' '))
        );
        assert_eq!(
            check_target_url("https://example.com/ü"),
            Err(TargetUrlError::UnencodedCharacter('ü'))
        );
    }

    #[test]
    fn test_rejects_relative_urls() {
        assert!(matches!(
            check_target_url("/just/a/path"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
        assert!(matches!(
            check_target_url("example.com"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }
}
