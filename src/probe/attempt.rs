//! A single hop of a probe.

use reqwest::{StatusCode, Url};

/// The hundreds digit of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Anything outside 100-599.
    Other,
}

impl From<StatusCode> for StatusClass {
    fn from(status: StatusCode) -> Self {
        match status.as_u16() / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Success,
            3 => StatusClass::Redirect,
            4 => StatusClass::ClientError,
            5 => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }
}

/// The outcome of one HEAD request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    url: Url,
    status: StatusCode,
    location: Option<String>,
}

impl Attempt {
    /// Create a new [`Attempt`].
    pub fn new(url: Url, status: StatusCode, location: Option<String>) -> Self {
        Self {
            url,
            status,
            location,
        }
    }

    /// The URL this hop requested.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response status class.
    pub fn class(&self) -> StatusClass {
        self.status.into()
    }

    /// The raw `Location` header, if the response carried one.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Whether the response asks the client to go somewhere else.
    pub fn is_redirect(&self) -> bool {
        self.class() == StatusClass::Redirect
    }

    /// The `Location` to follow, if this hop is a redirect.
    ///
    /// A redirect without a `Location` header yields an empty string.
    pub fn redirect_location(&self) -> Option<&str> {
        self.is_redirect().then(|| self.location().unwrap_or_default())
    }

    /// The canonical reason phrase for the status code.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown Status")
    }
}
