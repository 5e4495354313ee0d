//! Semantic version parsing and ordering.
//!
//! Versions follow `major[.minor[.patch]][-prerelease][+build]`, with a
//! leading `v` tolerated. Missing minor and patch components default to zero.
//! Twelve-character lowercase hex strings are abbreviated commit hashes, not
//! versions, and never parse.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A parsed semantic version.
///
/// Equality and ordering consider `major`, `minor`, `patch` and `prerelease`.
/// Build metadata is carried for display only.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Prerelease tag without the leading `-` (empty for releases).
    pub prerelease: String,
    /// Build metadata without the leading `+` (empty when absent).
    pub build: String,
}

/// Regex for the version grammar.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([a-zA-Z0-9.-]+))?(?:\+([a-zA-Z0-9.-]+))?$")
        .expect("VERSION_REGEX must compile")
});

/// Regex for abbreviated commit hashes.
static COMMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{12}$").expect("COMMIT_REGEX must compile"));

impl Version {
    /// Create a release version with no prerelease or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
        }
    }

    /// Parse a version string.
    ///
    /// Returns `None` for empty input, commit hashes, and anything outside the
    /// version grammar. Numeric components too large for `u64` also fail.
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        let cleaned = input.trim().trim_start_matches('v');

        if COMMIT_REGEX.is_match(cleaned) {
            return None;
        }

        let caps = VERSION_REGEX.captures(cleaned)?;
        let number = |idx: usize| -> Option<u64> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };
        let text = |idx: usize| {
            caps.get(idx)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Some(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            prerelease: text(4),
            build: text(5),
        })
    }

    /// Whether this version carries a prerelease tag.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple() && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple()).then_with(|| {
            match (self.is_prerelease(), other.is_prerelease()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => self.prerelease.cmp(&other.prerelease),
            }
        })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
