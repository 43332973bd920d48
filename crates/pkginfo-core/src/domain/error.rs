// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::version::VersionError;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for re-prompting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Field '{field}' must not be blank")]
    BlankField { field: &'static str },

    #[error("Field '{field}' must not contain control characters")]
    ControlCharacter { field: &'static str },

    #[error("Unsupported architecture '{arch}'")]
    UnsupportedArchitecture { arch: String, allowed: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Version(e) => e.suggestions(),
            Self::MissingRequiredField { field } | Self::BlankField { field } => vec![
                format!("Provide a value for '{field}'"),
                "Run `pkginfo init` to fill in the package metadata".into(),
            ],
            Self::UnsupportedArchitecture { allowed, .. } => vec![
                format!("Supported architectures: {}", allowed.join(", ")),
                "Leave the list empty to build for the local platform only".into(),
            ],
            Self::ControlCharacter { field } => {
                vec![format!("Keep '{field}' on a single line without tabs or escapes")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Version(_)
            | Self::MissingRequiredField { .. }
            | Self::BlankField { .. }
            | Self::ControlCharacter { .. }
            | Self::UnsupportedArchitecture { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
