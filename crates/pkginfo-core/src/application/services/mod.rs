//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "save the manifest" or "render the README".

pub mod package_service;
pub mod readme_service;

pub use package_service::{PackageService, VersionChange};
pub use readme_service::ReadmeService;
