//! Progress module containing terminal output.
//!
//! # Overview
//!
//! - `display` - The transient progress line and the final-line sink
//! - `style` - Status line and error line formatting
//!
//! # Examples
//!
//! ```rust
//! use reach::progress::{error_line, ProgressDisplay};
//! use reach::Error;
//!
//! let display = ProgressDisplay::hidden();
//! display.progress("Connection Started");
//! assert_eq!(display.message(), "Connection Started");
//!
//! let line = error_line(&Error::Timeout, false);
//! assert_eq!(line, "Request Failed: Request timed out before a response was received.");
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{error_line, status_line};
