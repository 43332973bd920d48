//! README Service - renders and writes the project README.

use std::path::Path;

use chrono::Datelike;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{PackageInfo, ReadmeContext},
    error::PkgInfoResult,
};

pub struct ReadmeService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ReadmeService {
    pub fn new(filesystem: Box<dyn Filesystem>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self {
            filesystem,
            renderer,
        }
    }

    /// Read a user-supplied template file.
    pub fn load_template(&self, path: &Path) -> PkgInfoResult<String> {
        self.filesystem.read_to_string(path)
    }

    /// Render `template` for `info`.
    ///
    /// Besides the package variables, `YEAR` is set to the current local year.
    pub fn render(&self, info: &PackageInfo, icon: &str, template: &str) -> PkgInfoResult<String> {
        let year = chrono::Local::now().year();
        let context = ReadmeContext::new(info, icon).with_variable("YEAR", year.to_string());
        self.renderer.render(template, &context)
    }

    /// Render and write the README to `path`.
    #[instrument(skip_all, fields(path = %path.display(), package = info.name()))]
    pub fn generate(
        &self,
        info: &PackageInfo,
        icon: &str,
        template: &str,
        path: &Path,
        overwrite: bool,
    ) -> PkgInfoResult<()> {
        if self.filesystem.exists(path) && !overwrite {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.render(info, icon, template)?;
        debug!(bytes = content.len(), "README rendered");

        self.filesystem.write_file(path, &content)?;
        info!("README written");
        Ok(())
    }
}
