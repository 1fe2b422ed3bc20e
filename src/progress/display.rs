//! Terminal output for a probe run.
//!
//! The [`ProgressDisplay`] owns two outputs:
//!
//! - a single transient line on stderr, drawn by an `indicatif` bar whose
//!   template is only the message, so every update replaces the previous one
//!   in place;
//! - stdout, where the final line of every hop is written.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reach::progress::ProgressDisplay;
//!
//! # fn example() -> std::io::Result<()> {
//! let display = ProgressDisplay::new();
//! display.progress("Starting DNS Lookup");
//! display.progress("DNS Lookup Complete");
//! display.finish_line("200 OK ")?;
//! display.close();
//! # Ok(())
//! # }
//! ```

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt;
use std::io;

/// Template of the transient line: just the current message.
const TEMPLATE_MESSAGE: &str = "{msg}";

/// Transient progress line plus the sink for final lines.
///
/// Cloning is cheap; clones drive the same line.
#[derive(Clone)]
pub struct ProgressDisplay {
    /// The transient line.
    bar: ProgressBar,
    /// Where final lines go. `None` discards them.
    out: Option<Term>,
}

impl fmt::Debug for ProgressDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressDisplay")
            .field("message", &self.bar.message())
            .field("hidden", &self.is_hidden())
            .finish()
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDisplay {
    /// Create a display drawing progress on stderr and final lines on stdout.
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let style = ProgressStyle::with_template(TEMPLATE_MESSAGE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);

        Self {
            bar,
            out: Some(Term::stdout()),
        }
    }

    /// Create a display that draws and writes nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            out: None,
        }
    }

    /// Return `true` if nothing is drawn.
    pub fn is_hidden(&self) -> bool {
        self.out.is_none()
    }

    /// Replace the transient line with `text`.
    pub fn progress(&self, text: &'static str) {
        self.bar.set_message(text);
    }

    /// The text currently on the transient line.
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Clear the transient line and write `line` to stdout.
    pub fn finish_line(&self, line: &str) -> io::Result<()> {
        self.bar.set_message("");
        match &self.out {
            Some(term) => self.bar.suspend(|| term.write_line(line)),
            None => Ok(()),
        }
    }

    /// Clear the transient line for good.
    pub fn close(&self) {
        self.bar.finish_and_clear();
    }
}
