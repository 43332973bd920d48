//! Semantic versions (SemVer 2.0).
//!
//! # Design
//!
//! [`SemanticVersion`] is a pure value type. Every derivation operation
//! (`inc_*`, `with_*`) borrows the receiver and returns a fresh value, so a
//! version can be shared freely across threads without locking.
//!
//! Two parsing modes exist:
//!
//! | Entry point                         | Accepts                                  |
//! |-------------------------------------|------------------------------------------|
//! | [`SemanticVersion::parse`]          | `v?MAJOR[.MINOR[.PATCH]][-PRE][+BUILD]`  |
//! | [`SemanticVersion::parse_strict`]   | `MAJOR.MINOR.PATCH[-PRE][+BUILD]` only   |
//!
//! [`SemanticVersion::from_parts`] builds a value without validation.
//!
//! Equality, ordering and hashing ignore build metadata and the original
//! input text.

mod compare;
mod error;
mod parse;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

pub use compare::compare_prerelease;
pub use error::{VersionError, VersionErrorKind};
pub use parse::{validate_metadata, validate_prerelease};

/// A single semantic version.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    metadata: String,
    original: String,
}

/// Which core segment a bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl BumpLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SemanticVersion {
    /// Parse a version with the lenient grammar.
    ///
    /// Accepts an optional leading `v` and defaults a missing minor or patch
    /// segment to `0`, so `"v1.2"` parses as `1.2.0`. Numeric segments with
    /// leading zeros are rejected.
    ///
    /// ```
    /// use pkginfo_core::domain::SemanticVersion;
    ///
    /// let v = SemanticVersion::parse("v1.2-rc.1").unwrap();
    /// assert_eq!(v.to_string(), "1.2.0-rc.1");
    /// assert_eq!(v.original(), "v1.2-rc.1");
    /// ```
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        parse::parse_lenient(input)
    }

    /// Parse a version that must spell out all three core segments.
    pub fn parse_strict(input: &str) -> Result<Self, VersionError> {
        parse::parse_strict(input)
    }

    /// Parse with the lenient grammar, panicking on failure.
    ///
    /// # Panics
    /// Panics if `input` is not a valid version. Use [`Self::parse`] for
    /// anything that did not come from a literal.
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(v) => v,
            Err(e) => panic!("invalid semantic version literal {input:?}: {e}"),
        }
    }

    /// Build a version from its parts **without validation**.
    ///
    /// The caller is responsible for passing well-formed prerelease and
    /// metadata strings (no leading `-`/`+`). `original()` is the formatted
    /// string.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        let mut v = Self {
            major,
            minor,
            patch,
            prerelease: prerelease.into(),
            metadata: metadata.into(),
            original: String::new(),
        };
        v.original = v.to_string();
        v
    }

    pub const fn major(&self) -> u64 {
        self.major
    }
    pub const fn minor(&self) -> u64 {
        self.minor
    }
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers without the leading `-`; empty for releases.
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata without the leading `+`; empty when absent.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// The exact text this version was parsed from.
    ///
    /// For derived values this is the formatted version, prefixed with `v`
    /// when the source carried one.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Whether the original text started with a lowercase `v`.
    pub fn has_v_prefix(&self) -> bool {
        self.original.starts_with('v')
    }

    /// Return the same version with `original()` marked as `v`-prefixed.
    pub fn with_v_prefix(&self) -> Self {
        Self {
            original: format!("v{self}"),
            ..self.clone()
        }
    }

    // ── Comparison ───────────────────────────────────────────────────────────

    /// Compare by SemVer precedence. Build metadata is ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare::compare(self, other)
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Precedence equality; `1.0.0+a` equals `1.0.0+b`.
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    // ── Derivations ──────────────────────────────────────────────────────────

    /// Next patch version.
    ///
    /// A prerelease becomes its release (`1.2.3-rc.1` → `1.2.3`); a release
    /// increments patch (`1.2.3` → `1.2.4`). Metadata is always cleared.
    pub fn inc_patch(&self) -> Self {
        let patch = if self.is_prerelease() {
            self.patch
        } else {
            self.patch.saturating_add(1)
        };
        self.derive(self.major, self.minor, patch, String::new(), String::new())
    }

    /// Next minor version: `1.2.3-rc` → `1.3.0`.
    pub fn inc_minor(&self) -> Self {
        self.derive(
            self.major,
            self.minor.saturating_add(1),
            0,
            String::new(),
            String::new(),
        )
    }

    /// Next major version: `1.2.3-rc` → `2.0.0`.
    pub fn inc_major(&self) -> Self {
        self.derive(
            self.major.saturating_add(1),
            0,
            0,
            String::new(),
            String::new(),
        )
    }

    pub fn bump(&self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => self.inc_major(),
            BumpLevel::Minor => self.inc_minor(),
            BumpLevel::Patch => self.inc_patch(),
        }
    }

    /// Replace the prerelease. An empty string clears it.
    ///
    /// On error the receiver is left as it was.
    pub fn with_prerelease(&self, prerelease: &str) -> Result<Self, VersionError> {
        if !prerelease.is_empty() {
            validate_prerelease(prerelease)?;
        }
        Ok(self.derive(
            self.major,
            self.minor,
            self.patch,
            prerelease.to_owned(),
            self.metadata.clone(),
        ))
    }

    /// Replace the build metadata. An empty string clears it.
    pub fn with_metadata(&self, metadata: &str) -> Result<Self, VersionError> {
        if !metadata.is_empty() {
            validate_metadata(metadata)?;
        }
        Ok(self.derive(
            self.major,
            self.minor,
            self.patch,
            self.prerelease.clone(),
            metadata.to_owned(),
        ))
    }

    fn derive(
        &self,
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: String,
        metadata: String,
    ) -> Self {
        let mut next = Self {
            major,
            minor,
            patch,
            prerelease,
            metadata,
            original: String::new(),
        };
        let prefix = if self.has_v_prefix() { "v" } else { "" };
        next.original = format!("{prefix}{next}");
        next
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.is_empty().hash(state);
        // Precedence pads the shorter list with empty identifiers, so
        // trailing empties never change equality.
        let mut idents: Vec<&str> = self.prerelease.split('.').collect();
        while idents.last() == Some(&"") {
            idents.pop();
        }
        idents.hash(state);
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = SemanticVersion;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SemanticVersion::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
