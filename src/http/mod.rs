//! HTTP module containing the request side of a probe.
//!
//! # Overview
//!
//! - [`client`] - Per-attempt client creation and middleware configuration
//! - [`trace`] - Lifecycle events and the hooks that emit them
//! - [`executor`] - The [`Transport`] trait and the HEAD-request implementation
//!
//! # Examples
//!
//! ```rust,no_run
//! use reach::http::{HttpTransport, Transport};
//! use reach::progress::ProgressDisplay;
//! use reqwest::Url;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(Duration::from_secs(15));
//! let display = ProgressDisplay::new();
//! let attempt = transport
//!     .execute(&Url::parse("https://example.com")?, &display)
//!     .await?;
//! println!("{}", attempt.status());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod executor;
pub mod trace;

pub use client::{create_http_client, HttpClientConfig};
pub use executor::{HttpTransport, Transport};
pub use trace::{Tracer, TransportEvent};
