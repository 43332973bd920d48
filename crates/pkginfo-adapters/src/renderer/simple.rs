//! Simple variable substitution renderer.

use pkginfo_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::ReadmeContext,
    error::PkgInfoResult,
};
use tracing::{instrument, warn};

/// Renderer using `{{KEY}}` substitution.
///
/// By default unknown placeholders are left in place with a warning. A
/// strict renderer fails instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer {
    strict: bool,
}

impl SimpleRenderer {
    /// Create a new lenient renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that rejects unknown placeholders.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(strict = self.strict))]
    fn render(&self, template: &str, context: &ReadmeContext) -> PkgInfoResult<String> {
        let unresolved = context.unresolved(template);

        if !unresolved.is_empty() {
            if self.strict {
                return Err(ApplicationError::RenderingFailed {
                    reason: format!("unknown placeholders: {}", unresolved.join(", ")),
                }
                .into());
            }
            warn!(placeholders = ?unresolved, "Template has unknown placeholders");
        }

        Ok(context.render(template))
    }
}
