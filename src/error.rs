//! Error handling for the reach library.
//!
//! Every failure a probe can run into is terminal: the walk stops at the first
//! error and the binary reports it as a single line. Each variant carries a
//! short user-facing label (see [`Error::label`]) while its `Display`
//! implementation renders the detail that follows the label.

use std::error::Error as StdError;
use std::fmt::Write;
use std::io;
use thiserror::Error;

/// Errors that can happen while probing a URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The target, or a redirect `Location`, is not an absolute http(s) URL.
    #[error("Unable to parse '{0}'")]
    InvalidUrl(String),

    /// The host name could not be resolved.
    #[error("{0}")]
    Dns(String),

    /// The TCP connection could not be established.
    #[error("{0}")]
    Connect(String),

    /// The TLS handshake failed.
    #[error("{0}")]
    TlsHandshake(String),

    /// No response headers arrived within the configured window.
    #[error("Request timed out before a response was received.")]
    Timeout,

    /// Any other failure while sending the request or reading the response.
    #[error("{0}")]
    Transport(String),

    /// The connection could not be released after the response.
    #[error("{0}")]
    ConnectionFinalize(String),

    /// Writing to the terminal failed.
    #[error("{0}")]
    Io(String),

    /// A fault in the probe itself rather than in the remote end.
    ///
    /// These are not reported as a friendly status line; the binary aborts
    /// with a full report instead.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// The name printed before the detail, e.g. `DNS Lookup Failed`.
    pub fn label(&self) -> &'static str {
        match self {
            Error::InvalidUrl(_) => "Invalid URL",
            Error::Dns(_) => "DNS Lookup Failed",
            Error::Connect(_) => "Connection Failed",
            Error::TlsHandshake(_) => "TLS Handshake Failed",
            Error::Timeout | Error::Transport(_) => "Request Failed",
            Error::ConnectionFinalize(_) => "Could Not Finish Connection",
            Error::Io(_) => "Output Failed",
            Error::Internal(_) => "Internal Error",
        }
    }

    /// Whether this error is a fault of the probe rather than of the target.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_) | Error::Io(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Flatten an error and its sources into a single line.
///
/// `reqwest` wraps the interesting part of a failure several levels deep, so
/// the top-level message alone ("error sending request") says very little.
pub fn report(mut err: &(dyn StdError + 'static)) -> String {
    let mut s = err.to_string();
    while let Some(src) = err.source() {
        let msg = src.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim.
        if !s.ends_with(&msg) {
            let _ = write!(s, ": {}", msg);
        }
        err = src;
    }
    s
}

/// Result type alias for operations that can fail with a reach error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer {
        #[source]
        inner: io::Error,
    }

    #[test]
    fn test_labels() {
        assert_eq!(Error::Timeout.label(), "Request Failed");
        assert_eq!(Error::Transport("x".into()).label(), "Request Failed");
        assert_eq!(Error::InvalidUrl("x".into()).label(), "Invalid URL");
        assert_eq!(Error::Dns("x".into()).label(), "DNS Lookup Failed");
    }

    #[test]
    fn test_invalid_url_detail() {
        let err = Error::InvalidUrl("ftp://host".into());
        assert_eq!(err.to_string(), "Unable to parse 'ftp://host'");
    }

    #[test]
    fn test_report_walks_sources() {
        let err = Outer {
            inner: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert_eq!(report(&err), "outer: refused");
    }

    #[test]
    fn test_internal() {
        assert!(Error::Internal("bug".into()).is_internal());
        assert!(Error::from(io::Error::other("broken pipe")).is_internal());
        assert!(!Error::Timeout.is_internal());
    }
}
