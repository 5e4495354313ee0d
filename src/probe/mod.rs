//! System command probing.
//!
//! A command exists when an executable file with its name is found on
//! `PATH`. Its version is read by running it with each flag of
//! [`ProbeSettings::version_flags`](crate::config::ProbeSettings) in turn
//! until one prints a version or exits cleanly without one. A command that
//! exists but never reports a version is still installed, with an unknown
//! version.

pub mod command;
pub mod path;
pub mod process;
pub mod version;

pub use command::{AttemptOutcome, CommandProbe};
pub use path::{is_executable, parse_system_path, resolve_command};
pub use process::{run_with_timeout, ProcessOutput};
pub use version::extract_version;

/// What a probe learned about a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub exists: bool,
    pub version: Option<String>,
}

impl ProbeOutcome {
    /// The command was not found.
    pub fn missing() -> Self {
        Self::default()
    }

    /// The command was found, with or without a version.
    pub fn found(version: Option<String>) -> Self {
        Self {
            exists: true,
            version,
        }
    }
}

/// Checks whether system commands exist and which version they report.
pub trait SystemProbe {
    fn probe(&self, command: &str) -> ProbeOutcome;
}
