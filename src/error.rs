//! Error types for dependency checking.
//!
//! This module defines [`DepcheckError`], the error type used at the edges of
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The evaluation engine reports expected failures (missing registries,
//!   absent commands, unparsable versions) as data, never as errors
//! - Use `DepcheckError` for failures that stop a single command, such as an
//!   unreadable input document for the presentation subcommands
//! - Use `anyhow::Error` (via `DepcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dependency-check operations.
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// A registry or manifest file exists but could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    RegistryParseError { path: PathBuf, message: String },

    /// An input document was requested from a file that does not exist.
    #[error("File not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An input document was not a valid check result.
    #[error("Invalid JSON input: {message}")]
    InvalidInput { message: String },

    /// No input document was provided on a terminal stdin.
    #[error("No input provided. Pipe JSON or provide a file path.")]
    NoInput,

    /// A plugin key could not be split into name and marketplace.
    #[error("Invalid plugin key '{key}': {message}")]
    InvalidPluginKey { key: String, message: String },

    /// Check flags given where they do not apply or contradict each other.
    #[error("Conflicting arguments: {message}")]
    ConflictingArguments { message: String },

    /// A probed command could not be started.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// JSON serialization error wrapper.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dependency-check operations.
pub type Result<T> = std::result::Result<T, DepcheckError>;
