//! Probe summary functionality.
//!
//! A [`Summary`] is what a [`Prober`](crate::Prober) hands back once a walk
//! is over: every hop that got a response, in order, plus the way the walk
//! ended.
//!
//! # Examples
//!
//! ```rust
//! use reach::probe::{Status, Summary};
//!
//! let summary = Summary::new("example.com");
//! match summary.status() {
//!     Status::NotStarted => println!("nothing probed yet"),
//!     Status::Complete => println!("reached a final response"),
//!     Status::RedirectLimit => println!("stopped following redirects"),
//!     Status::Failed(err) => println!("{}: {}", err.label(), err),
//! }
//! ```

use super::attempt::Attempt;
use crate::error::Error;

/// How a probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The walk has not run yet.
    NotStarted,
    /// The last hop was not a redirect.
    Complete,
    /// The last hop was a redirect, but the redirect budget was spent.
    RedirectLimit,
    /// The walk stopped on an error.
    Failed(Error),
}

/// Represents the result of probing one target.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The target as given on the command line.
    target: String,
    /// Completed hops, in request order.
    hops: Vec<Attempt>,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new, not yet started [`Summary`].
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            hops: Vec::new(),
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Record a completed hop.
    pub fn push(&mut self, attempt: Attempt) {
        self.hops.push(attempt);
    }

    /// Get the target the probe started from.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the completed hops.
    pub fn hops(&self) -> &[Attempt] {
        &self.hops
    }

    /// Get the last completed hop.
    pub fn last(&self) -> Option<&Attempt> {
        self.hops.last()
    }

    /// Get the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Get the error the probe stopped on, if any.
    pub fn error(&self) -> Option<&Error> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Mark the walk as finished on a non-redirect response.
    pub fn complete(self) -> Self {
        self.with_status(Status::Complete)
    }

    /// Mark the walk as stopped by the redirect limit.
    pub fn redirect_limit(self) -> Self {
        self.with_status(Status::RedirectLimit)
    }

    /// Mark the walk as failed.
    pub fn fail(self, err: Error) -> Self {
        self.with_status(Status::Failed(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_transitions() {
        let summary = Summary::new("a.test");
        assert_eq!(summary.status(), &Status::NotStarted);
        assert!(summary.hops().is_empty());

        let summary = summary.fail(Error::Timeout);
        assert_eq!(summary.error(), Some(&Error::Timeout));
        assert_eq!(summary.target(), "a.test");
    }
}
