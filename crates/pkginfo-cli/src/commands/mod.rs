//! Command handlers. One module per subcommand; `prompt` holds the shared
//! interactive input helpers.

pub mod completions;
pub mod config;
pub mod init;
pub mod prompt;
pub mod readme;
pub mod version;

use pkginfo_adapters::{LocalFilesystem, SimpleRenderer, TomlCodec};
use pkginfo_core::application::{PackageService, ReadmeService};

use crate::config::AppConfig;

/// Manifest service over the real filesystem, checking loaded manifests
/// against the configured architecture allow-list.
pub(crate) fn package_service(config: &AppConfig) -> PackageService {
    PackageService::new(Box::new(LocalFilesystem::new()), Box::new(TomlCodec::new()))
        .with_allowed_arch(config.package.arch_list.clone())
}

/// README service over the real filesystem.
pub(crate) fn readme_service(strict: bool) -> ReadmeService {
    let renderer = if strict {
        SimpleRenderer::strict()
    } else {
        SimpleRenderer::new()
    };
    ReadmeService::new(Box::new(LocalFilesystem::new()), Box::new(renderer))
}
