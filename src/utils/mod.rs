//! Shared utility functions.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`url`] - Target normalization, validation and `Location` resolution
//!
//! # Examples
//!
//! ```rust
//! use reach::utils::{normalize, parse_target};
//!
//! let target = normalize("example.com/status");
//! let url = parse_target(&target)?;
//! assert_eq!(url.host_str(), Some("example.com"));
//! # Ok::<(), reach::Error>(())
//! ```

pub mod url;

pub use url::{normalize, parse_target, resolve_location, validate};
