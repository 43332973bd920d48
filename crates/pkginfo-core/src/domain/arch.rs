//! Build architecture selection.
//!
//! Users enter architectures as a comma-separated list. Entries outside the
//! allow-list are reported back instead of failing the whole selection, so
//! the caller can warn and carry on.

use std::fmt;

/// Architectures accepted when no allow-list is configured.
pub const DEFAULT_ARCHITECTURES: &[&str] = &[
    "linux_amd64",
    "linux_arm64",
    "darwin_amd64",
    "darwin_arm64",
    "windows",
];

/// Returns [`DEFAULT_ARCHITECTURES`] as owned strings.
pub fn default_allow_list() -> Vec<String> {
    DEFAULT_ARCHITECTURES.iter().map(|s| (*s).to_owned()).collect()
}

/// Result of parsing an architecture list against an allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchSelection {
    accepted: Vec<String>,
    rejected: Vec<String>,
}

impl ArchSelection {
    /// Parse `input` against `allowed`.
    ///
    /// Entries are trimmed and empty ones dropped. Accepted entries keep their
    /// input order with duplicates removed.
    pub fn parse<S: AsRef<str>>(input: &str, allowed: &[S]) -> Self {
        let mut selection = Self::default();

        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let known = allowed.iter().any(|a| a.as_ref() == entry);
            let bucket = if known {
                &mut selection.accepted
            } else {
                &mut selection.rejected
            };
            if !bucket.iter().any(|e| e == entry) {
                bucket.push(entry.to_owned());
            }
        }

        selection
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// No accepted architectures: build for the local platform only.
    pub fn is_local_only(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn into_accepted(self) -> Vec<String> {
        self.accepted
    }
}

impl fmt::Display for ArchSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_local_only() {
            f.write_str("local")
        } else {
            f.write_str(&self.accepted.join(", "))
        }
    }
}
