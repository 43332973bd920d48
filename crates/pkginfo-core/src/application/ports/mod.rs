//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pkginfo-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ManifestCodec`: `pkg.info` serialization
//!   - `TemplateRenderer`: README rendering

use std::path::Path;

use crate::domain::{PackageInfo, ReadmeContext};
use crate::error::PkgInfoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pkginfo_adapters::filesystem::LocalFilesystem` (production)
/// - `pkginfo_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> PkgInfoResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PkgInfoResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PkgInfoResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the `pkg.info` text format.
///
/// Implemented by:
/// - `pkginfo_adapters::codec::TomlCodec`
#[cfg_attr(test, mockall::automock)]
pub trait ManifestCodec: Send + Sync {
    /// Serialize a package, including any header the format carries.
    fn encode(&self, info: &PackageInfo) -> PkgInfoResult<String>;

    /// Parse a package. Domain invariants are checked by the caller.
    fn decode(&self, text: &str) -> PkgInfoResult<PackageInfo>;
}

/// Port for README rendering.
///
/// Implemented by:
/// - `pkginfo_adapters::renderer::SimpleRenderer` (variable substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` against `context`.
    fn render(&self, template: &str, context: &ReadmeContext) -> PkgInfoResult<String>;
}
