//! `pkginfo version` — inspect, change, validate and compare versions.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::instrument;

use pkginfo_core::application::VersionChange;
use pkginfo_core::domain::{BumpLevel, SemanticVersion};

use crate::{
    cli::VersionCommands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Parsed components, as printed by `--json`.
#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    version: String,
    original: &'a str,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &'a str,
    metadata: &'a str,
}

impl<'a> From<&'a SemanticVersion> for VersionReport<'a> {
    fn from(v: &'a SemanticVersion) -> Self {
        Self {
            version: v.to_string(),
            original: v.original(),
            major: v.major(),
            minor: v.minor(),
            patch: v.patch(),
            prerelease: v.prerelease(),
            metadata: v.metadata(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChangeReport {
    previous: String,
    current: String,
}

#[instrument(skip_all)]
pub fn execute(cmd: VersionCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let info_file = config.package.info_file.as_path();

    match cmd {
        VersionCommands::Show { original, json } => {
            let package = super::package_service(config).load(info_file)?;
            let version = package.version();
            if json || output.is_json() {
                output.json(&VersionReport::from(version))?;
            } else if original {
                output.result(version.original())?;
            } else {
                output.result(&version.to_string())?;
            }
        }

        VersionCommands::Bump { level } => {
            let level = BumpLevel::from(level);
            let change = super::package_service(config).bump(info_file, level)?;
            report_change(output, &format!("Bumped {level} version"), &change)?;
        }

        VersionCommands::SetPre { prerelease } => {
            let change = super::package_service(config).set_prerelease(info_file, &prerelease)?;
            report_change(output, "Set prerelease", &change)?;
        }

        VersionCommands::SetMeta { metadata } => {
            let change = super::package_service(config).set_metadata(info_file, &metadata)?;
            report_change(output, "Set build metadata", &change)?;
        }

        VersionCommands::Validate { version, strict } => {
            let parsed = if strict {
                SemanticVersion::parse_strict(&version)?
            } else {
                SemanticVersion::parse(&version)?
            };
            if output.is_json() {
                output.json(&VersionReport::from(&parsed))?;
            } else {
                output.success(&format!("'{version}' is a valid version"))?;
                output.result(&parsed.to_string())?;
            }
        }

        VersionCommands::Compare { left, right } => {
            let a = SemanticVersion::parse(&left)?;
            let b = SemanticVersion::parse(&right)?;
            let symbol = ordering_symbol(a.compare(&b));
            if output.is_json() {
                output.json(&serde_json::json!({
                    "left": a.to_string(),
                    "right": b.to_string(),
                    "ordering": symbol,
                }))?;
            } else {
                output.result(symbol)?;
            }
        }
    }

    Ok(())
}

fn report_change(output: &OutputManager, action: &str, change: &VersionChange) -> CliResult<()> {
    if output.is_json() {
        output.json(&ChangeReport {
            previous: change.previous.to_string(),
            current: change.current.to_string(),
        })?;
    } else {
        output.success(&format!(
            "{action}: {} \u{2192} {}",
            change.previous, change.current
        ))?;
    }
    Ok(())
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn report_fields() {
        let v = SemanticVersion::must_parse("v2.1.0-rc.1+b7");
        let json = serde_json::to_value(VersionReport::from(&v)).unwrap();
        assert_eq!(json["version"], "2.1.0-rc.1+b7");
        assert_eq!(json["original"], "v2.1.0-rc.1+b7");
        assert_eq!(json["minor"], 1);
        assert_eq!(json["prerelease"], "rc.1");
        assert_eq!(json["metadata"], "b7");
    }
}
