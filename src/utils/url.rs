//! Target URL normalization and validation.
//!
//! Every hop of a probe goes through [`parse_target`] before a request is
//! built, including the ones reached by following a `Location` header.

use crate::error::{Error, Result};

use reqwest::Url;

/// Prefix `raw` with `http://` unless it already names an http(s) scheme.
///
/// # Example
///
/// ```rust
/// use reach::utils::normalize;
///
/// assert_eq!(normalize("example.com"), "http://example.com");
/// assert_eq!(normalize("https://example.com"), "https://example.com");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

/// Return `true` if `url` parses as an absolute http(s) URL with a host.
///
/// # Example
///
/// ```rust
/// use reach::utils::validate;
///
/// assert!(validate("https://example.com/path"));
/// assert!(!validate("ftp://example.com"));
/// assert!(!validate("http://"));
/// ```
pub fn validate(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty()
                && parsed.host_str().is_some_and(|host| !host.is_empty())
                && matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

/// Validate and parse a hop target.
///
/// Fails with [`Error::InvalidUrl`] for anything [`validate`] rejects.
pub fn parse_target(url: &str) -> Result<Url> {
    if !validate(url) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))
}

/// Work out the next hop from a `Location` header value.
///
/// Absolute locations are returned unchanged and relative ones are joined
/// onto `base`. An empty location stays empty so that it fails validation
/// instead of silently pointing back at `base`.
pub fn resolve_location(base: &Url, location: &str) -> String {
    let location = location.trim();
    if location.is_empty() || Url::parse(location).is_ok() {
        return location.to_string();
    }
    base.join(location)
        .map(String::from)
        .unwrap_or_else(|_| location.to_string())
}
