//! Tunables for the system-command probe.

use std::time::Duration;

/// Flags tried, in order, to get a command to print its version.
pub const DEFAULT_VERSION_FLAGS: &[&str] = &["--version", "-version", "-v", "version"];

/// Per-attempt timeout for a version probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// How commands are probed for their version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub version_flags: Vec<String>,
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            version_flags: DEFAULT_VERSION_FLAGS.iter().map(|f| f.to_string()).collect(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl ProbeSettings {
    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the timeout from a CLI value in seconds, if given.
    pub fn with_timeout_secs(self, secs: Option<u64>) -> Self {
        match secs {
            Some(secs) => self.with_timeout(Duration::from_secs(secs)),
            None => self,
        }
    }
}
