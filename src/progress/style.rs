//! Status and error line styling.
//!
//! These functions only build strings; writing them is the job of
//! [`ProgressDisplay`](super::ProgressDisplay).
//!
//! # Examples
//!
//! ```rust
//! use reach::probe::Attempt;
//! use reach::progress::status_line;
//! use reqwest::{StatusCode, Url};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let attempt = Attempt::new(Url::parse("http://example.com")?, StatusCode::NOT_FOUND, None);
//! assert_eq!(status_line(&attempt, false), "404 Not Found ");
//! # Ok(())
//! # }
//! ```

use crate::error::Error;
use crate::probe::{Attempt, StatusClass};

use console::Style;

impl StatusClass {
    /// The badge style for a status code of this class.
    ///
    /// Black text on a bright background: green for success, blue for
    /// redirects, red for client errors and magenta for server errors.
    pub fn badge_style(self) -> Style {
        let style = Style::new().black().force_styling(true);
        match self {
            StatusClass::Success => style.on_green().on_bright(),
            StatusClass::Redirect => style.on_blue().on_bright(),
            StatusClass::ClientError => style.on_red().on_bright(),
            StatusClass::ServerError => style.on_magenta().on_bright(),
            StatusClass::Informational | StatusClass::Other => {
                Style::new().bold().force_styling(true)
            }
        }
    }
}

/// Style of the badge carrying the reason phrase.
fn reason_style() -> Style {
    Style::new().black().on_white().on_bright().force_styling(true)
}

/// Style of the label in front of an error.
fn error_label_style() -> Style {
    Style::new().red().bright().force_styling(true)
}

/// The final line printed for one hop.
///
/// Without color this is the plain status line followed by a space, e.g.
/// `"301 Moved Permanently "`. With color, the code and the reason phrase are
/// rendered as badges and redirects point at their `Location`.
pub fn status_line(attempt: &Attempt, color: bool) -> String {
    let code = attempt.status().as_u16();
    let reason = attempt.reason();

    if !color {
        return format!("{} {} ", code, reason);
    }

    let mut line = format!(
        "{}{}",
        attempt.class().badge_style().apply_to(format!(" {} ", code)),
        reason_style().apply_to(format!(" {} ", reason)),
    );
    if let Some(location) = attempt.redirect_location() {
        line.push_str(&format!(" -> {}", location));
    }
    line
}

/// The line printed when a probe stops on an error.
pub fn error_line(err: &Error, color: bool) -> String {
    if color {
        format!(
            "{} {}",
            error_label_style().apply_to(format!("{}:", err.label())),
            err
        )
    } else {
        format!("{}: {}", err.label(), err)
    }
}
