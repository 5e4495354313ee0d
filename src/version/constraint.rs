//! Version constraint parsing and satisfaction.
//!
//! A constraint is an optional operator followed by a version:
//!
//! | Constraint | Meaning |
//! |------------|---------|
//! | `*`        | any version, including unparsable ones |
//! | `1.2.3`, `=1.2.3` | exactly 1.2.3 (prerelease included, build ignored) |
//! | `>=1.2.3`, `<=1.2.3`, `>1.2.3`, `<1.2.3` | ordering comparison |
//! | `^1.2.3`   | at least 1.2.3, leftmost nonzero component frozen |
//! | `~1.2.3`   | at least 1.2.3, same major and minor |
//!
//! # Fail-open
//!
//! [`satisfies`] treats anything it cannot verify as satisfied: an installed
//! version that is not a semantic version (a commit hash, a build tag) and a
//! constraint whose version does not parse both pass. Plugins installed from
//! source control routinely report commit hashes, and a dependency that is
//! present must not be reported as broken only because its version string is
//! opaque. Do not tighten this into a failure.

use std::fmt;

use super::semver::Version;

/// Comparison operator of a [`VersionConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `*`
    Any,
    /// `=` or no operator
    Exact,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `^`
    Caret,
    /// `~`
    Tilde,
}

/// Operator prefixes in match order; two-character operators come first.
const PREFIXES: &[(&str, Operator)] = &[
    (">=", Operator::GreaterEq),
    ("<=", Operator::LessEq),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("^", Operator::Caret),
    ("~", Operator::Tilde),
    ("=", Operator::Exact),
];

impl Operator {
    /// The textual form of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Any => "*",
            Operator::Exact => "=",
            Operator::GreaterEq => ">=",
            Operator::LessEq => "<=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Caret => "^",
            Operator::Tilde => "~",
        }
    }

    /// Whether `installed` satisfies this operator against `required`.
    pub fn matches(&self, installed: &Version, required: &Version) -> bool {
        match self {
            Operator::Any => true,
            Operator::Exact => installed == required,
            Operator::GreaterEq => installed >= required,
            Operator::LessEq => installed <= required,
            Operator::Greater => installed > required,
            Operator::Less => installed < required,
            Operator::Caret => {
                if installed < required {
                    return false;
                }
                if required.major != 0 {
                    installed.major == required.major
                } else if required.minor != 0 {
                    installed.major == 0 && installed.minor == required.minor
                } else {
                    installed.major == 0
                        && installed.minor == 0
                        && installed.patch == required.patch
                }
            }
            Operator::Tilde => {
                if installed < required {
                    return false;
                }
                installed.major == required.major && installed.minor == required.minor
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed version constraint.
///
/// The version text is kept as written; it is parsed lazily by
/// [`VersionConstraint::version`] because an unparsable version is not an
/// error, only an unenforceable constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub operator: Operator,
    pub version: String,
}

impl VersionConstraint {
    /// Split a constraint string into operator and version text.
    ///
    /// Surrounding whitespace is trimmed, a bare `*` yields [`Operator::Any`]
    /// with empty version text, and input without an operator prefix is an
    /// exact match.
    pub fn parse(constraint: &str) -> Self {
        let constraint = constraint.trim();

        if constraint == "*" {
            return Self {
                operator: Operator::Any,
                version: String::new(),
            };
        }

        for (prefix, operator) in PREFIXES {
            if let Some(rest) = constraint.strip_prefix(prefix) {
                return Self {
                    operator: *operator,
                    version: rest.trim().to_string(),
                };
            }
        }

        Self {
            operator: Operator::Exact,
            version: constraint.to_string(),
        }
    }

    /// The constraint's version, if it parses.
    pub fn version(&self) -> Option<Version> {
        Version::parse(&self.version)
    }

    /// Whether an installed version string satisfies this constraint.
    ///
    /// See the module docs for the fail-open rules.
    pub fn is_satisfied_by(&self, installed: &str) -> bool {
        if self.operator == Operator::Any {
            return true;
        }
        let Some(installed) = Version::parse(installed) else {
            return true;
        };
        let Some(required) = self.version() else {
            return true;
        };
        self.operator.matches(&installed, &required)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::Any => f.write_str("*"),
            op => write!(f, "{}{}", op, self.version),
        }
    }
}

/// Check if an installed version satisfies a constraint string.
///
/// The literal constraint `*` passes unconditionally, before anything is
/// parsed. Otherwise an unparsable installed version or constraint version
/// passes (fail-open), and the operator decides the rest.
pub fn satisfies(installed: &str, constraint: &str) -> bool {
    if constraint == "*" {
        return true;
    }
    VersionConstraint::parse(constraint).is_satisfied_by(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_each_operator() {
        let cases = [
            (">=1.0.0", Operator::GreaterEq),
            ("<=1.0.0", Operator::LessEq),
            (">1.0.0", Operator::Greater),
            ("<1.0.0", Operator::Less),
            ("^1.0.0", Operator::Caret),
            ("~1.0.0", Operator::Tilde),
            ("=1.0.0", Operator::Exact),
            ("1.0.0", Operator::Exact),
        ];
        for (input, expected) in cases {
            let parsed = VersionConstraint::parse(input);
            assert_eq!(parsed.operator, expected, "operator for {input}");
            assert_eq!(parsed.version, "1.0.0", "version for {input}");
        }
    }

    #[test]
    fn parse_wildcard() {
        let parsed = VersionConstraint::parse("*");
        assert_eq!(parsed.operator, Operator::Any);
        assert_eq!(parsed.version, "");
    }

    #[test]
    fn parse_trims_whitespace_between_operator_and_version() {
        let parsed = VersionConstraint::parse("  >= 2.1 ");
        assert_eq!(parsed.operator, Operator::GreaterEq);
        assert_eq!(parsed.version, "2.1");
    }

    #[test]
    fn display_round_trips_operator() {
        assert_eq!(VersionConstraint::parse("^1.2.3").to_string(), "^1.2.3");
        assert_eq!(VersionConstraint::parse("1.2.3").to_string(), "=1.2.3");
        assert_eq!(VersionConstraint::parse("*").to_string(), "*");
    }

    #[test]
    fn greater_eq_follows_ordering() {
        assert!(!satisfies("1.0.0", ">=1.0.1"));
        assert!(satisfies("1.0.1", ">=1.0.0"));
        assert!(satisfies("1.0.0", ">=1.0.0"));
        assert!(!satisfies("1.0.0-beta", ">=1.0.0"));
    }

    #[test]
    fn strict_and_upper_bounds() {
        assert!(satisfies("1.0.1", ">1.0.0"));
        assert!(!satisfies("1.0.0", ">1.0.0"));
        assert!(satisfies("0.9.0", "<1.0.0"));
        assert!(satisfies("1.0.0-rc.1", "<1.0.0"));
        assert!(satisfies("1.0.0", "<=1.0.0"));
        assert!(!satisfies("1.0.1", "<=1.0.0"));
    }

    #[test]
    fn exact_match_includes_prerelease_but_not_build() {
        assert!(satisfies("1.2.3", "1.2.3"));
        assert!(satisfies("1.2.3+build.7", "=1.2.3"));
        assert!(!satisfies("1.2.3-beta", "1.2.3"));
        assert!(!satisfies("1.2.4", "=1.2.3"));
    }

    #[test]
    fn caret_with_nonzero_major() {
        assert!(satisfies("1.9.9", "^1.2.3"));
        assert!(satisfies("1.2.3", "^1.2.3"));
        assert!(!satisfies("2.0.0", "^1.2.3"));
        assert!(!satisfies("1.2.2", "^1.2.3"));
    }

    #[test]
    fn caret_with_zero_major() {
        assert!(satisfies("0.2.9", "^0.2.3"));
        assert!(!satisfies("0.3.0", "^0.2.3"));
        assert!(!satisfies("0.2.2", "^0.2.3"));
    }

    #[test]
    fn caret_with_zero_major_and_minor() {
        assert!(satisfies("0.0.3", "^0.0.3"));
        assert!(!satisfies("0.0.4", "^0.0.3"));
    }

    #[test]
    fn tilde_allows_patch_changes_only() {
        assert!(satisfies("1.2.9", "~1.2.3"));
        assert!(!satisfies("1.3.0", "~1.2.3"));
        assert!(!satisfies("1.2.2", "~1.2.3"));
    }

    #[test]
    fn unparsable_installed_version_is_permissive() {
        assert!(satisfies("abc123def456", ">=1.0.0"));
        assert!(satisfies("nightly", "=2.0.0"));
        assert!(satisfies("", "^3.0.0"));
    }

    #[test]
    fn unparsable_constraint_version_is_permissive() {
        assert!(satisfies("1.0.0", ">=latest"));
        assert!(satisfies("1.0.0", "^"));
    }

    #[test]
    fn wildcard_accepts_everything() {
        for installed in ["", "1.0.0", "abc123def456", "not a version"] {
            assert!(satisfies(installed, "*"), "{installed:?} should satisfy *");
        }
    }

    #[test]
    fn ordered_pair_property() {
        let pairs = [
            ("1.0.0", "2.0.0"),
            ("1.2.3-alpha", "1.2.3"),
            ("0.0.1", "0.1.0"),
            ("1.2.3-alpha", "1.2.3-beta"),
        ];
        for (lower, higher) in pairs {
            assert!(!satisfies(lower, &format!(">={higher}")));
            assert!(satisfies(higher, &format!(">={lower}")));
        }
    }
}
