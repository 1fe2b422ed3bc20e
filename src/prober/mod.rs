//! Prober module containing the redirect walk, its builder and configuration.
//!
//! # Overview
//!
//! - `prober` - The [`Prober`] and its redirect-following loop
//! - `builder` - [`ProberBuilder`] for assembling a prober
//! - `config` - [`ProberConfig`] and its defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use reach::prober::ProberBuilder;
//!
//! # async fn example() {
//! let prober = ProberBuilder::new().build();
//! let summary = prober.probe("https://example.com").await;
//! println!("{} hop(s)", summary.hops().len());
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod prober;

pub use builder::ProberBuilder;
pub use config::{ProberConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT};
pub use prober::Prober;
