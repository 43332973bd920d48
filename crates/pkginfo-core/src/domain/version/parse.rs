//! Lenient and strict grammars for [`SemanticVersion`], plus the identifier
//! validators shared with the derivation operations.
//!
//! Lenient parsing goes through a regular expression compiled once per
//! process. Strict parsing is a hand-written split so it can report *which*
//! rule a segment broke (`InvalidCharacters` vs `SegmentStartsZero`).

use std::sync::OnceLock;

use regex::Regex;

use super::{SemanticVersion, VersionError};

/// `v?MAJOR(.MINOR)?(.PATCH)?(-PRE)?(+BUILD)?`, anchored on both ends.
const SEMVER_PATTERN: &str = concat!(
    r"^v?([0-9]+)(\.[0-9]+)?(\.[0-9]+)?",
    r"(-([0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*))?",
    r"(\+([0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*))?$",
);

// Capture group indices in SEMVER_PATTERN.
const MAJOR: usize = 1;
const MINOR: usize = 2;
const PATCH: usize = 3;
const PRERELEASE: usize = 5;
const METADATA: usize = 8;

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("SEMVER_PATTERN is a valid regex"))
}

/// Parse `input` with the lenient grammar. Missing minor/patch default to 0.
pub(super) fn parse_lenient(input: &str) -> Result<SemanticVersion, VersionError> {
    let caps = grammar()
        .captures(input)
        .ok_or_else(|| VersionError::InvalidVersion {
            input: input.to_owned(),
        })?;

    let major = lenient_segment(&caps[MAJOR], input)?;
    let minor = match caps.get(MINOR) {
        Some(m) => lenient_segment(m.as_str().trim_start_matches('.'), input)?,
        None => 0,
    };
    let patch = match caps.get(PATCH) {
        Some(m) => lenient_segment(m.as_str().trim_start_matches('.'), input)?,
        None => 0,
    };

    let prerelease = caps.get(PRERELEASE).map_or("", |m| m.as_str());
    let metadata = caps.get(METADATA).map_or("", |m| m.as_str());

    if !prerelease.is_empty() {
        validate_prerelease(prerelease)?;
    }
    if !metadata.is_empty() {
        validate_metadata(metadata)?;
    }

    Ok(SemanticVersion {
        major,
        minor,
        patch,
        prerelease: prerelease.to_owned(),
        metadata: metadata.to_owned(),
        original: input.to_owned(),
    })
}

/// Parse `input` as exactly `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
pub(super) fn parse_strict(input: &str) -> Result<SemanticVersion, VersionError> {
    if input.is_empty() {
        return Err(VersionError::EmptyString);
    }

    let parts: Vec<&str> = input.splitn(3, '.').collect();
    let [major, minor, rest] = parts[..] else {
        return Err(VersionError::InvalidVersion {
            input: input.to_owned(),
        });
    };

    // Build metadata sits rightmost, so it is split off first.
    let (rest, metadata) = match rest.split_once('+') {
        Some((head, meta)) => (head, Some(meta)),
        None => (rest, None),
    };
    let (patch, prerelease) = match rest.split_once('-') {
        Some((head, pre)) => (head, Some(pre)),
        None => (rest, None),
    };

    let segments = [major, minor, patch];
    for segment in segments {
        if segment.is_empty() || !is_numeric(segment) {
            return Err(VersionError::InvalidCharacters {
                segment: segment.to_owned(),
            });
        }
        if has_leading_zero(segment) {
            return Err(VersionError::SegmentStartsZero {
                segment: segment.to_owned(),
            });
        }
    }

    let [major, minor, patch] = segments.map(|s| s.parse::<u64>());
    let (Ok(major), Ok(minor), Ok(patch)) = (major, minor, patch) else {
        return Err(VersionError::InvalidVersion {
            input: input.to_owned(),
        });
    };

    if let Some(pre) = prerelease {
        validate_prerelease(pre)?;
    }
    if let Some(meta) = metadata {
        validate_metadata(meta)?;
    }

    Ok(SemanticVersion {
        major,
        minor,
        patch,
        prerelease: prerelease.unwrap_or_default().to_owned(),
        metadata: metadata.unwrap_or_default().to_owned(),
        original: input.to_owned(),
    })
}

/// Validate a dot-separated prerelease string (without the leading `-`).
///
/// Identifiers must be non-empty. Purely numeric identifiers must not carry
/// a leading zero; all others are restricted to `[0-9A-Za-z-]`.
pub fn validate_prerelease(prerelease: &str) -> Result<(), VersionError> {
    for ident in prerelease.split('.') {
        if ident.is_empty() {
            return Err(VersionError::InvalidPrerelease {
                prerelease: prerelease.to_owned(),
            });
        }
        if is_numeric(ident) {
            if has_leading_zero(ident) {
                return Err(VersionError::SegmentStartsZero {
                    segment: ident.to_owned(),
                });
            }
        } else if !is_identifier(ident) {
            return Err(VersionError::InvalidPrerelease {
                prerelease: prerelease.to_owned(),
            });
        }
    }
    Ok(())
}

/// Validate a dot-separated build metadata string (without the leading `+`).
///
/// Identifiers must be non-empty and restricted to `[0-9A-Za-z-]`; leading
/// zeros are allowed.
pub fn validate_metadata(metadata: &str) -> Result<(), VersionError> {
    if metadata.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(VersionError::InvalidMetadata {
            metadata: metadata.to_owned(),
        })
    }
}

fn lenient_segment(segment: &str, input: &str) -> Result<u64, VersionError> {
    if has_leading_zero(segment) {
        return Err(VersionError::SegmentStartsZero {
            segment: segment.to_owned(),
        });
    }
    segment.parse().map_err(|_| VersionError::InvalidVersion {
        input: input.to_owned(),
    })
}

pub(super) fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0')
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
