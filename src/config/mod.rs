//! Runtime configuration.
//!
//! - [`paths`] locates the Claude configuration directory and the registry
//!   files inside it
//! - [`settings`] holds the system-command probe tunables

pub mod paths;
pub mod settings;

pub use paths::{ConfigPaths, CONFIG_DIR_ENV};
pub use settings::{ProbeSettings, DEFAULT_PROBE_TIMEOUT, DEFAULT_VERSION_FLAGS};
