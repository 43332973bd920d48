//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The core crate never sees it; commands copy the values they need into
//! service calls.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. User file (`<config dir>/pkginfo/config.toml`) if present
//! 3. Project file (`.pkginfo.toml` in the working directory) if present
//! 4. `--config FILE` (must exist)
//! 5. `PKGINFO__<SECTION>__<KEY>` environment variables
//!
//! CLI flags are applied at the call-site, above all of these.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pkginfo_core::domain::default_allow_list;

/// Project-level configuration file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".pkginfo.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// File locations and package defaults.
    pub package: PackageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Manifest path, relative to the working directory.
    pub info_file: PathBuf,
    /// README path, relative to the working directory.
    pub readme_file: PathBuf,
    /// Icon suggested by `pkginfo readme`.
    pub icon_path: String,
    /// Architectures `pkginfo init` accepts.
    pub arch_list: Vec<String>,
    /// Built-in README layout used when `--style` is not given.
    pub readme_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            info_file: PathBuf::from("pkg.info"),
            readme_file: PathBuf::from("README.md"),
            icon_path: "assets/icon.png".into(),
            arch_list: default_allow_list(),
            readme_style: "standard".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the `--config` path; unlike the implicit files it
    /// must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let user = Self::config_path().filter(|p| p.is_file());
        Self::load_from(user.as_deref(), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    fn load_from(
        user: Option<&Path>,
        local: &Path,
        explicit: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = user {
            debug!(path = %path.display(), "Using user configuration");
            builder = builder.add_source(toml_file(path).required(false));
        }

        builder = builder.add_source(toml_file(local).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using --config file");
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("PKGINFO")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("package.arch_list")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pkginfo")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The highest-priority file that contributes to the configuration.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.clone());
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::config_path().filter(|p| p.is_file())
    }

    /// Pretty TOML for `config list` and `config init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Look up a dotted key, e.g. `package.icon_path`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for part in key.split('.') {
            value = value.get_mut(part)?.take();
        }
        Some(value)
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
