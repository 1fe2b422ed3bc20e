//! Configuration structures and defaults for the prober.

use std::time::Duration;

/// Default response-header timeout per hop.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of redirects followed before stopping.
pub const DEFAULT_MAX_REDIRECTS: u32 = 20;

/// Settings for one probe run. Read-only once the prober is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProberConfig {
    /// How long to wait for response headers once connected, per hop.
    pub timeout: Duration,
    /// How many redirects to follow. `0` means only the first hop is probed.
    pub max_redirects: u32,
    /// Render status lines with ANSI colors.
    pub color: bool,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            color: true,
        }
    }
}
