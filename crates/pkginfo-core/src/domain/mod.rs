// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pkginfo.
//!
//! This module contains pure business logic. All I/O, persistence, and
//! rendering concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `tracing` lives in the application and CLI layers
//! - **Immutable values**: Derivations return new values

pub mod arch;
pub mod error;
pub mod package;
pub mod readme;
pub mod version;

pub use arch::{ArchSelection, DEFAULT_ARCHITECTURES, default_allow_list};
pub use error::{DomainError, ErrorCategory};
pub use package::{PackageInfo, PackageInfoBuilder};
pub use readme::ReadmeContext;
pub use version::{BumpLevel, SemanticVersion, VersionError, VersionErrorKind};
