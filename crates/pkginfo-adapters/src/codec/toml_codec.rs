//! TOML encoding for `pkg.info`.

use pkginfo_core::{
    application::{ApplicationError, ports::ManifestCodec},
    domain::PackageInfo,
    error::PkgInfoResult,
};
use tracing::instrument;

/// Reads and writes `pkg.info` as TOML with a one-line comment header.
///
/// ```toml
/// # widget pkg.info file
///
/// name = "widget"
/// version = "1.2.0"
/// ...
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCodec;

impl TomlCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestCodec for TomlCodec {
    #[instrument(skip_all, fields(name = info.name()))]
    fn encode(&self, info: &PackageInfo) -> PkgInfoResult<String> {
        let body = toml::to_string(info).map_err(|e| ApplicationError::CodecError {
            reason: e.to_string(),
        })?;
        Ok(format!("# {} pkg.info file\n\n{body}", info.name()))
    }

    fn decode(&self, text: &str) -> PkgInfoResult<PackageInfo> {
        toml::from_str(text).map_err(|e| {
            ApplicationError::CodecError {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
