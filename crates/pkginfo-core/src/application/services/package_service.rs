//! Package Service - manifest persistence and version updates.
//!
//! Loads and stores `pkg.info` through the `Filesystem` and `ManifestCodec`
//! ports. Version commands are expressed as load → derive → save.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestCodec},
    },
    domain::{BumpLevel, PackageInfo, SemanticVersion, VersionError},
    error::PkgInfoResult,
};

/// Before/after pair returned by version updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub previous: SemanticVersion,
    pub current: SemanticVersion,
}

/// Manifest service.
pub struct PackageService {
    filesystem: Box<dyn Filesystem>,
    codec: Box<dyn ManifestCodec>,
    allowed_arch: Option<Vec<String>>,
}

impl PackageService {
    /// Create a new package service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, codec: Box<dyn ManifestCodec>) -> Self {
        Self {
            filesystem,
            codec,
            allowed_arch: None,
        }
    }

    /// Reject loaded manifests that list an architecture outside `allowed`.
    pub fn with_allowed_arch(mut self, allowed: Vec<String>) -> Self {
        self.allowed_arch = Some(allowed);
        self
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Load and validate the manifest at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> PkgInfoResult<PackageInfo> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let text = self.filesystem.read_to_string(path)?;
        let info = self.codec.decode(&text)?;
        info.validate()?;
        if let Some(allowed) = &self.allowed_arch {
            info.validate_against(allowed)?;
        }

        debug!(name = info.name(), version = %info.version(), "Manifest loaded");
        Ok(info)
    }

    /// Write the manifest to `path`.
    ///
    /// Fails with `FileExists` when the file is present and `overwrite` is
    /// not set.
    #[instrument(skip_all, fields(path = %path.display(), overwrite = overwrite))]
    pub fn save(&self, path: &Path, info: &PackageInfo, overwrite: bool) -> PkgInfoResult<()> {
        if self.filesystem.exists(path) && !overwrite {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let text = self.codec.encode(info)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &text)?;

        info!(name = info.name(), version = %info.version(), "Manifest written");
        Ok(())
    }

    /// Bump the manifest version at `level` and persist it.
    pub fn bump(&self, path: &Path, level: BumpLevel) -> PkgInfoResult<VersionChange> {
        self.update_version(path, |v| Ok(v.bump(level)))
    }

    /// Replace the prerelease; empty clears it.
    pub fn set_prerelease(&self, path: &Path, prerelease: &str) -> PkgInfoResult<VersionChange> {
        self.update_version(path, |v| v.with_prerelease(prerelease))
    }

    /// Replace the build metadata; empty clears it.
    pub fn set_metadata(&self, path: &Path, metadata: &str) -> PkgInfoResult<VersionChange> {
        self.update_version(path, |v| v.with_metadata(metadata))
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn update_version<F>(&self, path: &Path, derive: F) -> PkgInfoResult<VersionChange>
    where
        F: FnOnce(&SemanticVersion) -> Result<SemanticVersion, VersionError>,
    {
        let info = self.load(path)?;
        let previous = info.version().clone();
        let current = derive(&previous)?;

        self.save(path, &info.with_version(current.clone()), true)?;

        info!(from = %previous, to = %current, "Version updated");
        Ok(VersionChange { previous, current })
    }
}
