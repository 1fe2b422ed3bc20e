//! Probe records.
//!
//! # Overview
//!
//! - [`attempt`] - One hop: the requested URL, its status and `Location`
//! - [`summary`] - The ordered hops of a walk and how it ended
//!
//! # Examples
//!
//! ```rust
//! use reach::probe::{Attempt, StatusClass};
//! use reqwest::{StatusCode, Url};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let attempt = Attempt::new(
//!     Url::parse("http://example.com")?,
//!     StatusCode::MOVED_PERMANENTLY,
//!     Some("https://example.com/".to_string()),
//! );
//! assert_eq!(attempt.class(), StatusClass::Redirect);
//! assert_eq!(attempt.redirect_location(), Some("https://example.com/"));
//! # Ok(())
//! # }
//! ```

pub mod attempt;
pub mod summary;

pub use attempt::{Attempt, StatusClass};
pub use summary::{Status, Summary};
