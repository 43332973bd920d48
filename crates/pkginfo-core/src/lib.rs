//! pkginfo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pkginfo
//! package-metadata tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pkginfo-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PackageService, ReadmeService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Codec, Render)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pkginfo-adapters (Infrastructure)    │
//! │ (LocalFilesystem, TomlCodec, Renderer)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SemanticVersion, PackageInfo, Readme)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pkginfo_core::domain::{BumpLevel, SemanticVersion};
//!
//! let v: SemanticVersion = "v1.4.2-rc.1".parse().unwrap();
//! assert!(v < SemanticVersion::must_parse("1.4.2"));
//! assert_eq!(v.bump(BumpLevel::Patch).to_string(), "1.4.2");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PackageService, ReadmeService, VersionChange,
        ports::{Filesystem, ManifestCodec, TemplateRenderer},
    };
    pub use crate::domain::{
        ArchSelection, BumpLevel, PackageInfo, PackageInfoBuilder, ReadmeContext,
        SemanticVersion, VersionError, VersionErrorKind,
    };
    pub use crate::error::{PkgInfoError, PkgInfoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
