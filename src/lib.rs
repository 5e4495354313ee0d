//! plugin-depcheck - dependency checking for Claude Code plugins.
//!
//! Plugins declare what they need in `.claude-plugin/extends-plugin.json`:
//! other plugins with version constraints, and system commands expected on
//! `PATH`. This crate reads the plugin registries under the Claude
//! configuration directory, evaluates those declarations and reports the
//! result as a JSON document, remediation steps or tables.
//!
//! # Modules
//!
//! - [`check`] - Dependency evaluation and the result document
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration directory discovery and probe settings
//! - [`error`] - Error types and result aliases
//! - [`probe`] - System command lookup and version probing
//! - [`registry`] - Installed, enabled and marketplace registries
//! - [`report`] - Remediation steps and table rendering
//! - [`scope`] - Selection of the plugins to check
//! - [`ui`] - Terminal output
//! - [`version`] - Version parsing and constraint matching
//!
//! # Example
//!
//! ```
//! use plugin_depcheck::version::satisfies;
//!
//! assert!(satisfies("2.1.0", ">=2.0.0"));
//! assert!(!satisfies("1.9.3", "^2.0"));
//! assert!(satisfies("anything", "*"));
//! ```
//!
//! For registry-backed checks, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod registry;
pub mod report;
pub mod scope;
pub mod ui;
pub mod version;

pub use error::{DepcheckError, Result};
