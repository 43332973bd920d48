//! Infrastructure adapters for pkginfo.
//!
//! This crate implements the ports defined in `pkginfo-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod codec;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplate;
pub use codec::TomlCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
