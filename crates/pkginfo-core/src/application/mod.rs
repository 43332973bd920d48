//! Application layer for pkginfo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PackageService, ReadmeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PackageService, ReadmeService, VersionChange};

pub use ports::{Filesystem, ManifestCodec, TemplateRenderer};

pub use error::ApplicationError;
