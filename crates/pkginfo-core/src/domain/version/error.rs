//! Version parsing and validation errors.

use thiserror::Error;

/// Errors produced while parsing or validating a [`super::SemanticVersion`].
///
/// All errors are:
/// - Cloneable (callers may retry a prompt with the same error in hand)
/// - Comparable (tests match on exact variants)
/// - Kind-tagged via [`VersionError::kind`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version string is empty")]
    EmptyString,

    #[error("invalid characters in version segment '{segment}'")]
    InvalidCharacters { segment: String },

    #[error("version segment '{segment}' starts with 0")]
    SegmentStartsZero { segment: String },

    #[error("invalid semantic version '{input}'")]
    InvalidVersion { input: String },

    #[error("invalid prerelease '{prerelease}'")]
    InvalidPrerelease { prerelease: String },

    #[error("invalid build metadata '{metadata}'")]
    InvalidMetadata { metadata: String },
}

/// Field-less classification of a [`VersionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionErrorKind {
    EmptyString,
    InvalidCharacters,
    SegmentStartsZero,
    InvalidVersion,
    InvalidPrerelease,
    InvalidMetadata,
}

impl VersionError {
    pub const fn kind(&self) -> VersionErrorKind {
        match self {
            Self::EmptyString => VersionErrorKind::EmptyString,
            Self::InvalidCharacters { .. } => VersionErrorKind::InvalidCharacters,
            Self::SegmentStartsZero { .. } => VersionErrorKind::SegmentStartsZero,
            Self::InvalidVersion { .. } => VersionErrorKind::InvalidVersion,
            Self::InvalidPrerelease { .. } => VersionErrorKind::InvalidPrerelease,
            Self::InvalidMetadata { .. } => VersionErrorKind::InvalidMetadata,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyString => vec!["Provide a version such as 1.0.0".into()],
            Self::InvalidCharacters { segment } => vec![
                format!("'{segment}' must contain digits only"),
                "Expected form: MAJOR.MINOR.PATCH, e.g. 1.4.2".into(),
            ],
            Self::SegmentStartsZero { segment } => vec![
                format!("Remove the leading zero from '{segment}'"),
                "Numeric identifiers must not be zero-padded (use 1, not 01)".into(),
            ],
            Self::InvalidVersion { .. } => vec![
                "Expected form: [v]MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]".into(),
                "Examples: 1.0.0, v2.1, 1.0.0-rc.1+build.5".into(),
            ],
            Self::InvalidPrerelease { .. } => vec![
                "Prerelease identifiers may only use [0-9A-Za-z-]".into(),
                "Separate identifiers with '.', e.g. alpha.1".into(),
            ],
            Self::InvalidMetadata { .. } => vec![
                "Build metadata identifiers may only use [0-9A-Za-z-]".into(),
                "Separate identifiers with '.', e.g. build.42".into(),
            ],
        }
    }
}
