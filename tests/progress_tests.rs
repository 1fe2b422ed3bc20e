//! Tests for the progress module functionality.
//!
//! Status line and error line rendering, and the transient line of the
//! progress display.

use reach::progress::{error_line, status_line, ProgressDisplay};
use reach::Error;

mod common;
use common::helpers::*;

#[test]
fn test_status_line_without_color() {
    let attempt = create_test_attempt(TEST_ORIGIN, 404, None);
    let line = status_line(&attempt, false);
    assert_eq!(line, "404 Not Found ");
    assert!(!line.contains('\x1b'));
}

#[test]
fn test_status_line_without_color_ignores_location() {
    let attempt = create_test_attempt(TEST_ORIGIN, 301, Some(TEST_REDIRECT_TARGET));
    assert_eq!(status_line(&attempt, false), "301 Moved Permanently ");
}

const BLACK: &str = "\x1b[30m";
const ON_BRIGHT_GREEN: &str = "\x1b[48;5;10m";
const ON_BRIGHT_BLUE: &str = "\x1b[48;5;12m";
const ON_BRIGHT_RED: &str = "\x1b[48;5;9m";
const ON_BRIGHT_MAGENTA: &str = "\x1b[48;5;13m";
const ON_BRIGHT_WHITE: &str = "\x1b[48;5;15m";

#[test]
fn test_status_line_with_color() {
    let attempt = create_test_attempt(TEST_ORIGIN, 404, None);
    let line = status_line(&attempt, true);
    assert!(line.starts_with(&format!("{}{} 404 ", BLACK, ON_BRIGHT_RED)));
    assert!(line.contains(&format!("{}{} Not Found ", BLACK, ON_BRIGHT_WHITE)));
    assert!(!line.contains("->"));
}

#[test]
fn test_status_line_badge_backgrounds() {
    let cases = [
        (200, None, ON_BRIGHT_GREEN),
        (301, Some(TEST_REDIRECT_TARGET), ON_BRIGHT_BLUE),
        (404, None, ON_BRIGHT_RED),
        (503, None, ON_BRIGHT_MAGENTA),
    ];
    for (code, location, background) in cases {
        let attempt = create_test_attempt(TEST_ORIGIN, code, location);
        let line = status_line(&attempt, true);
        let badge = format!("{} {} ", background, code);
        assert!(line.contains(&badge), "{:?} lacks {:?}", line, badge);
        let reason = format!("{} {} ", ON_BRIGHT_WHITE, attempt.reason());
        assert!(line.contains(&reason), "{:?} lacks {:?}", line, reason);
    }
}

#[test]
fn test_status_line_redirect_points_at_location() {
    let attempt = create_test_attempt(TEST_ORIGIN, 302, Some(TEST_REDIRECT_TARGET));
    let line = status_line(&attempt, true);
    assert!(line.ends_with(&format!(" -> {}", TEST_REDIRECT_TARGET)));
}

#[test]
fn test_status_line_unknown_code() {
    let attempt = create_test_attempt(TEST_ORIGIN, 799, None);
    assert_eq!(status_line(&attempt, false), "799 Unknown Status ");
}

#[test]
fn test_error_line() {
    let err = Error::Dns("failed to lookup address information".into());
    assert_eq!(
        error_line(&err, false),
        "DNS Lookup Failed: failed to lookup address information"
    );

    let colored = error_line(&err, true);
    assert!(colored.contains('\x1b'));
    assert!(colored.contains("DNS Lookup Failed:"));
    assert!(colored.ends_with(" failed to lookup address information"));
}

#[test]
fn test_error_line_invalid_url() {
    let err = Error::InvalidUrl("ftp://host".into());
    assert_eq!(
        error_line(&err, false),
        "Invalid URL: Unable to parse 'ftp://host'"
    );
}

#[test]
fn test_progress_replaces_message() {
    let display = ProgressDisplay::hidden();
    display.progress("Starting DNS Lookup");
    display.progress("DNS Lookup Complete");
    assert_eq!(display.message(), "DNS Lookup Complete");
}

#[test]
fn test_progress_is_idempotent() {
    let once = ProgressDisplay::hidden();
    once.progress("Connection Started");

    let twice = ProgressDisplay::hidden();
    twice.progress("Connection Started");
    twice.progress("Connection Started");

    assert_eq!(once.message(), twice.message());
}

#[test]
fn test_finish_line_clears_progress() {
    let display = ProgressDisplay::hidden();
    display.progress("Receiving Response");
    display.finish_line("200 OK ").unwrap();
    assert_eq!(display.message(), "");
    display.close();
}

#[test]
fn test_hidden_display() {
    assert!(ProgressDisplay::hidden().is_hidden());
}
