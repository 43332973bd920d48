//! Precedence rules for semantic versions.
//!
//! 1. `major`, `minor`, `patch` compared numerically, in that order.
//! 2. With equal cores, a release outranks any prerelease.
//! 3. Two prereleases are compared identifier by identifier.
//! 4. Build metadata never participates.

use std::cmp::Ordering;

use super::{SemanticVersion, parse::is_numeric};

pub(super) fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| {
            match (a.prerelease.is_empty(), b.prerelease.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => compare_prerelease(&a.prerelease, &b.prerelease),
            }
        })
}

/// Compare two non-empty prerelease strings.
///
/// The identifier lists are walked up to the longer length; a side that has
/// run out contributes an empty placeholder.
pub fn compare_prerelease(s: &str, o: &str) -> Ordering {
    let s_parts: Vec<&str> = s.split('.').collect();
    let o_parts: Vec<&str> = o.split('.').collect();
    let len = s_parts.len().max(o_parts.len());

    for i in 0..len {
        let s_part = s_parts.get(i).copied().unwrap_or("");
        let o_part = o_parts.get(i).copied().unwrap_or("");

        let d = compare_pre_part(s_part, o_part);
        if d != Ordering::Equal {
            return d;
        }
    }

    Ordering::Equal
}

fn compare_pre_part(s: &str, o: &str) -> Ordering {
    if s == o {
        return Ordering::Equal;
    }

    // A side that ran out of identifiers sorts first.
    if s.is_empty() {
        return Ordering::Less;
    }
    if o.is_empty() {
        return Ordering::Greater;
    }

    // Numeric identifiers compare as numbers and always sort before
    // alphanumeric ones.
    match (numeric_value(s), numeric_value(o)) {
        // Same value, different spelling ("01" vs "1"): fall back to bytes so
        // that only identical identifiers compare equal.
        (Some(si), Some(oi)) => si.cmp(&oi).then_with(|| s.cmp(o)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => s.cmp(o),
    }
}

fn numeric_value(ident: &str) -> Option<u64> {
    if is_numeric(ident) {
        ident.parse().ok()
    } else {
        None
    }
}
