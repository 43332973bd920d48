//! The `PackageInfo` record persisted in `pkg.info`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Persistence goes through the
//! `ManifestCodec` port; this type only knows its own invariants.

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, version::SemanticVersion};

/// Package metadata.
///
/// `name` and `tenant` are non-blank on construction through the builder.
/// Values decoded from disk should be checked with [`PackageInfo::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    name: String,
    version: SemanticVersion,
    #[serde(default)]
    description: String,
    tenant: String,
    #[serde(default)]
    repo: String,
    #[serde(default)]
    arch: Vec<String>,
}

impl PackageInfo {
    pub fn builder() -> PackageInfoBuilder {
        PackageInfoBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn tenant(&self) -> &str {
        &self.tenant
    }
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Target architectures; empty means the local platform only.
    pub fn arch(&self) -> &[String] {
        &self.arch
    }

    /// Same package with a different version.
    pub fn with_version(&self, version: SemanticVersion) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Check the invariants that deserialization cannot enforce.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("tenant", &self.tenant)?;
        Ok(())
    }

    /// Check that every architecture is in `allowed`.
    pub fn validate_against<S: AsRef<str>>(&self, allowed: &[S]) -> Result<(), DomainError> {
        match self
            .arch
            .iter()
            .find(|a| !allowed.iter().any(|x| x.as_ref() == a.as_str()))
        {
            Some(arch) => Err(DomainError::UnsupportedArchitecture {
                arch: arch.clone(),
                allowed: allowed.iter().map(|a| a.as_ref().to_owned()).collect(),
            }),
            None => Ok(()),
        }
    }
}

/// Required single-line text: not blank, no control characters.
fn require_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField { field });
    }
    if value.chars().any(char::is_control) {
        return Err(DomainError::ControlCharacter { field });
    }
    Ok(())
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct PackageInfoBuilder {
    name: Option<String>,
    version: Option<SemanticVersion>,
    description: String,
    tenant: Option<String>,
    repo: String,
    arch: Vec<String>,
}

impl PackageInfoBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: SemanticVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    pub fn arch(mut self, arch: Vec<String>) -> Self {
        self.arch = arch;
        self
    }

    /// Build the record. Text fields are trimmed.
    pub fn build(self) -> Result<PackageInfo, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let version = self
            .version
            .ok_or(DomainError::MissingRequiredField { field: "version" })?;
        let tenant = self
            .tenant
            .ok_or(DomainError::MissingRequiredField { field: "tenant" })?;

        let info = PackageInfo {
            name: name.trim().to_owned(),
            version,
            description: self.description.trim().to_owned(),
            tenant: tenant.trim().to_owned(),
            repo: self.repo.trim().to_owned(),
            arch: self.arch,
        };
        info.validate()?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arch::DEFAULT_ARCHITECTURES;

    fn sample() -> PackageInfo {
        PackageInfo::builder()
            .name("widget")
            .version(SemanticVersion::must_parse("1.2.3"))
            .tenant("acme")
            .arch(vec!["linux_amd64".into()])
            .build()
            .unwrap()
    }

    #[test]
    fn builder_fills_optional_fields() {
        let info = sample();
        assert_eq!(info.name(), "widget");
        assert_eq!(info.description(), "");
        assert_eq!(info.repo(), "");
        assert_eq!(info.version().to_string(), "1.2.3");
    }

    #[test]
    fn builder_requires_name_version_tenant() {
        let missing_name = PackageInfo::builder()
            .version(SemanticVersion::must_parse("1.0.0"))
            .tenant("t")
            .build();
        assert_eq!(
            missing_name.unwrap_err(),
            DomainError::MissingRequiredField { field: "name" }
        );

        let missing_version = PackageInfo::builder().name("n").tenant("t").build();
        assert_eq!(
            missing_version.unwrap_err(),
            DomainError::MissingRequiredField { field: "version" }
        );

        let missing_tenant = PackageInfo::builder()
            .name("n")
            .version(SemanticVersion::must_parse("1.0.0"))
            .build();
        assert_eq!(
            missing_tenant.unwrap_err(),
            DomainError::MissingRequiredField { field: "tenant" }
        );
    }

    #[test]
    fn builder_rejects_blank_required_fields() {
        let err = PackageInfo::builder()
            .name("   ")
            .version(SemanticVersion::must_parse("1.0.0"))
            .tenant("t")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::BlankField { field: "name" });
    }

    #[test]
    fn builder_rejects_embedded_newline() {
        let err = PackageInfo::builder()
            .name("wid\nget")
            .version(SemanticVersion::must_parse("1.0.0"))
            .tenant("acme")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::ControlCharacter { field: "name" });

        let err = PackageInfo::builder()
            .name("widget")
            .version(SemanticVersion::must_parse("1.0.0"))
            .tenant("ac\tme")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::ControlCharacter { field: "tenant" });
    }

    #[test]
    fn builder_trims_text() {
        let info = PackageInfo::builder()
            .name("  widget ")
            .version(SemanticVersion::must_parse("1.0.0"))
            .tenant(" acme\n")
            .repo(" https://example.com/widget ")
            .build()
            .unwrap();
        assert_eq!(info.name(), "widget");
        assert_eq!(info.tenant(), "acme");
        assert_eq!(info.repo(), "https://example.com/widget");
    }

    #[test]
    fn with_version_replaces_only_version() {
        let info = sample();
        let bumped = info.with_version(info.version().inc_minor());
        assert_eq!(bumped.version().to_string(), "1.3.0");
        assert_eq!(bumped.name(), info.name());
        assert_eq!(info.version().to_string(), "1.2.3");
    }

    #[test]
    fn validate_against_allow_list() {
        let info = sample();
        assert!(info.validate_against(DEFAULT_ARCHITECTURES).is_ok());

        let err = info.validate_against(&["windows"]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedArchitecture { ref arch, .. } if arch == "linux_amd64"
        ));
    }

    #[test]
    fn deserialize_defaults_optional_fields() {
        let info: PackageInfo = toml::from_str(
            r#"
            name = "widget"
            version = "v0.1"
            tenant = "acme"
            "#,
        )
        .unwrap();
        assert_eq!(info.version().to_string(), "0.1.0");
        assert!(info.arch().is_empty());
        assert!(info.validate().is_ok());
    }

    #[test]
    fn deserialize_rejects_bad_version() {
        let result: Result<PackageInfo, _> = toml::from_str(
            r#"
            name = "widget"
            version = "1.0.0.0"
            tenant = "acme"
            "#,
        );
        assert!(result.is_err());
    }
}
