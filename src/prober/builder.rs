//! Builder pattern implementation for creating Prober instances.
//!
//! # Examples
//!
//! ```rust
//! use reach::prober::ProberBuilder;
//! use std::time::Duration;
//!
//! let prober = ProberBuilder::new()
//!     .timeout(Duration::from_secs(5))
//!     .max_redirects(3)
//!     .color(false)
//!     .build();
//! assert_eq!(prober.max_redirects(), 3);
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use reach::prober::ProberBuilder;
//!
//! let prober = ProberBuilder::hidden().build();
//! assert!(prober.display().is_hidden());
//! ```

use super::{config::ProberConfig, prober::Prober};
use crate::http::{HttpTransport, Transport};
use crate::progress::ProgressDisplay;

use std::time::Duration;

/// A builder used to create a [`Prober`].
#[derive(Debug, Default)]
pub struct ProberBuilder {
    config: ProberConfig,
    display: Option<ProgressDisplay>,
}

impl ProberBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProberBuilder::default()
    }

    /// Convenience function to draw and print nothing.
    pub fn hidden() -> Self {
        ProberBuilder::default().display(ProgressDisplay::hidden())
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ProberConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-hop response-header timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the number of redirects to follow.
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Enable or disable colored status lines.
    pub fn color(mut self, color: bool) -> Self {
        self.config.color = color;
        self
    }

    /// Set the display progress and status lines go to.
    pub fn display(mut self, display: ProgressDisplay) -> Self {
        self.display = Some(display);
        self
    }

    /// Create the [`Prober`] over HTTP.
    pub fn build(self) -> Prober<HttpTransport> {
        let transport = HttpTransport::new(self.config.timeout);
        self.build_with(transport)
    }

    /// Create the [`Prober`] over a custom [`Transport`].
    pub fn build_with<T: Transport>(self, transport: T) -> Prober<T> {
        let display = self.display.unwrap_or_default();
        Prober::new(self.config, transport, display)
    }
}
