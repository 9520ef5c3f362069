//! Link title and URL validation and sanitization.
//!
//! These are pure functions. Validation only checks that a URL parses as an
//! absolute URL; it never checks that the destination is reachable.

use crate::error::ValidationError;
use url::Url;

/// Record form of a validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkValidation {
    pub is_valid: bool,
    pub error: Option<ValidationError>,
}

impl From<Result<(), ValidationError>> for LinkValidation {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                error: None,
            },
            Err(error) => Self {
                is_valid: false,
                error: Some(error),
            },
        }
    }
}

/// Returns true if `url` parses as an absolute URL.
///
/// Any scheme accepted by the `url` crate passes, including `mailto:` and
/// `ftp:`. Relative references such as `example.com/page` fail.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com"));
/// assert!(is_valid_url("mailto:me@example.com"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && Url::parse(url).is_ok()
}

/// Validates a link's title and URL.
///
/// # Rules
///
/// Checked in order, stopping at the first failure:
///
/// 1. Title must not be empty after trimming
/// 2. URL must not be empty after trimming
/// 3. Trimmed URL must be a valid absolute URL
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTitle`], [`ValidationError::EmptyUrl`] or
/// [`ValidationError::InvalidUrl`] for the first rule violated.
pub fn validate_link(title: &str, url: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    if !is_valid_url(url) {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(())
}

/// Ensures a user-typed URL carries an HTTP(S) scheme.
///
/// Trims the input and prepends `https://` unless it already starts with
/// `http://` or `https://` (ASCII case-insensitive). Empty input stays
/// empty. Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_url("example.com"), "https://example.com");
/// assert_eq!(sanitize_url("http://example.com"), "http://example.com");
/// assert_eq!(sanitize_url("  HTTPS://Example.com "), "HTTPS://Example.com");
/// ```
pub fn sanitize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() || has_http_scheme(url) {
        return url.to_string();
    }
    format!("https://{url}")
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
