//! Semantic version type used by the selector
//!
//! Wraps `semver::Version` so that ordering ignores build metadata and all
//! comparisons go through [`Version::compare`].

use super::ReleaseLine;
use crate::error::VersionError;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed semantic version (`major.minor.patch[-pre][+build]`)
#[derive(Debug, Clone)]
pub struct Version(semver::Version);

impl Version {
    /// Create a stable version from its numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        semver::Version::parse(input)
            .map(Self)
            .map_err(|e| VersionError::invalid_version(input, e.to_string()))
    }

    /// Parse a release tag, stripping one leading `v` (e.g. "v1.2.3")
    pub fn from_tag(tag: &str) -> Result<Self, VersionError> {
        let tag = tag.trim();
        Self::parse(tag.strip_prefix('v').unwrap_or(tag))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Returns true if this version carries no pre-release label
    pub fn is_stable(&self) -> bool {
        self.0.pre.is_empty()
    }

    /// The (major, minor) family this version belongs to
    pub fn release_line(&self) -> ReleaseLine {
        ReleaseLine::new(self.0.major, self.0.minor)
    }

    /// Three-way comparison by semantic-version precedence.
    ///
    /// Numeric fields compare numerically; a pre-release sorts below the
    /// stable release with the same numbers. Build metadata is ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0
            .major
            .cmp(&other.0.major)
            .then(self.0.minor.cmp(&other.0.minor))
            .then(self.0.patch.cmp(&other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
