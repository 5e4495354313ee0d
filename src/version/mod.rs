//! Semantic versions and version constraints.
//!
//! - [`semver`] - Version parsing and ordering
//! - [`constraint`] - Constraint parsing and the [`satisfies`] check
//!
//! # Example
//!
//! ```
//! use plugin_depcheck::version::{satisfies, Version};
//!
//! assert_eq!(Version::parse("1.2.3-beta+build5").unwrap().to_string(), "1.2.3-beta+build5");
//! assert!(satisfies("1.9.9", "^1.2.3"));
//! assert!(!satisfies("1.3.0", "~1.2.3"));
//! // Commit hashes cannot be compared, so they pass
//! assert!(satisfies("abc123def456", ">=1.0.0"));
//! ```

pub mod constraint;
pub mod semver;

pub use constraint::{satisfies, Operator, VersionConstraint};
pub use semver::Version;
