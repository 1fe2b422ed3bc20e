//! The redirect walk.
//!
//! A walk starts from the normalized target and repeats:
//!
//! 1. validate the current URL, failing with [`Error::InvalidUrl`];
//! 2. execute one request through the [`Transport`];
//! 3. print the hop's status line;
//! 4. stop unless the response is a redirect, otherwise resolve its
//!    `Location` and go again.
//!
//! The walk stops quietly once `max_redirects` redirects have been followed,
//! so at most `max_redirects + 1` requests are made. Errors end the walk and
//! are handed back in the [`Summary`]; printing them is up to the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reach::prober::ProberBuilder;
//! use reach::probe::Status;
//!
//! # async fn example() {
//! let prober = ProberBuilder::new().max_redirects(5).build();
//! let summary = prober.probe("example.com").await;
//! if let Status::Failed(err) = summary.status() {
//!     eprintln!("{}: {}", err.label(), err);
//! }
//! # }
//! ```

use super::config::ProberConfig;
use crate::error::Error;
use crate::http::Transport;
use crate::probe::Summary;
use crate::progress::{status_line, ProgressDisplay};
use crate::utils::url::{normalize, parse_target, resolve_location};

use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Walks the redirect chain of one target.
#[derive(Clone)]
pub struct Prober<T> {
    config: ProberConfig,
    transport: T,
    display: ProgressDisplay,
}

impl<T> fmt::Debug for Prober<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prober")
            .field("config", &self.config)
            .field("display", &self.display)
            .finish()
    }
}

impl<T: Transport> Prober<T> {
    /// Creates a new Prober with the given configuration.
    pub(crate) fn new(config: ProberConfig, transport: T, display: ProgressDisplay) -> Self {
        Self {
            config,
            transport,
            display,
        }
    }

    /// Gets the per-hop response-header timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets the number of redirects followed at most.
    pub fn max_redirects(&self) -> u32 {
        self.config.max_redirects
    }

    /// Gets whether status lines are colored.
    pub fn color(&self) -> bool {
        self.config.color
    }

    /// Gets the display progress goes to.
    pub fn display(&self) -> &ProgressDisplay {
        &self.display
    }

    /// Gets the transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Probe `target`, following redirects.
    pub async fn probe(&self, target: &str) -> Summary {
        let mut summary = Summary::new(target);
        let mut next = normalize(target);
        let mut redirects = 0;

        loop {
            let url = match parse_target(&next) {
                Ok(url) => url,
                Err(e) => return summary.fail(e),
            };

            debug!(%url, hop = summary.hops().len(), "probing");
            let attempt = match self.transport.execute(&url, &self.display).await {
                Ok(attempt) => attempt,
                Err(e) => {
                    debug!(%url, error = %e, "hop failed");
                    return summary.fail(e);
                }
            };

            let line = status_line(&attempt, self.config.color);
            if let Err(e) = self.display.finish_line(&line) {
                return summary.fail(Error::from(e));
            }

            let location = attempt.redirect_location().map(|l| resolve_location(&url, l));
            summary.push(attempt);

            let Some(location) = location else {
                return summary.complete();
            };
            if redirects >= self.config.max_redirects {
                debug!(redirects, next = %location, "redirect limit reached");
                return summary.redirect_limit();
            }
            redirects += 1;
            next = location;
        }
    }
}
