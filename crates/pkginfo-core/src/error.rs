//! Unified error handling for pkginfo core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with error categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, VersionError};

/// Root error type for pkginfo core operations.
#[derive(Debug, Error, Clone)]
pub enum PkgInfoError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl From<VersionError> for PkgInfoError {
    fn from(err: VersionError) -> Self {
        Self::Domain(DomainError::Version(err))
    }
}

impl PkgInfoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The underlying version error, if any.
    pub fn as_version_error(&self) -> Option<&VersionError> {
        match self {
            Self::Domain(DomainError::Version(e)) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PkgInfoResult<T> = Result<T, PkgInfoError>;
