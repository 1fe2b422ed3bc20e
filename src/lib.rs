//! Reach checks whether an HTTP(S) resource is reachable.
//!
//! It sends HEAD requests, reports each connection step (DNS lookup,
//! connect, TLS handshake, response) on a single line that is rewritten in
//! place, and follows redirects one hop at a time, printing a status line
//! per hop.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reach::{ProberBuilder, Status};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let prober = ProberBuilder::new().max_redirects(10).build();
//! let summary = prober.probe("example.com").await;
//! assert!(matches!(summary.status(), Status::Complete | Status::RedirectLimit));
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`prober`] - The redirect walk, its builder and configuration
//! - [`probe`] - Hop records and the walk summary
//! - [`http`] - Per-hop HTTP execution and connection tracing
//! - [`progress`] - Transient progress line and status line rendering
//! - [`utils`] - URL normalization and validation
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod http;
pub mod probe;
pub mod prober;
pub mod progress;
pub mod utils;

pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig, HttpTransport, Transport, TransportEvent};
pub use probe::{Attempt, Status, StatusClass, Summary};
pub use prober::{Prober, ProberBuilder, ProberConfig};
pub use progress::{error_line, status_line, ProgressDisplay};
pub use utils::{normalize, validate};
