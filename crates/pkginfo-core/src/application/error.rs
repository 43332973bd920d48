//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No package manifest at the expected location.
    #[error("No package manifest found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Refused to overwrite an existing file.
    #[error("File already exists at {path}")]
    FileExists { path: PathBuf },

    /// Manifest could not be encoded or decoded.
    #[error("Manifest codec error: {reason}")]
    CodecError { reason: String },

    /// README template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ManifestNotFound { path } => vec![
                format!("Expected a manifest at {}", path.display()),
                "Create one with: pkginfo init".into(),
            ],
            Self::FileExists { path } => vec![
                format!("{} already exists", path.display()),
                "Use --force to overwrite it".into(),
            ],
            Self::CodecError { .. } => vec![
                "The pkg.info file is not valid TOML or is missing fields".into(),
                "Re-create it with: pkginfo init --force".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the README template syntax".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::FileExists { .. } | Self::CodecError { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
