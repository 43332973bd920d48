//! `pkginfo init` — collect package metadata and write `pkg.info`.

use tracing::{debug, info, instrument};

use pkginfo_core::application::ApplicationError;
use pkginfo_core::domain::{ArchSelection, PackageInfo, SemanticVersion};
use pkginfo_core::error::PkgInfoError;

use crate::{
    cli::InitArgs,
    commands::prompt::{self, Prompter},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let prompter = Prompter::new(args.no_interaction);
    let path = config.package.info_file.as_path();
    let service = super::package_service(config);

    // Check before prompting so a non-interactive run fails fast.
    let exists = service.exists(path);
    if exists && !args.force && !prompter.is_interactive() {
        return Err(CliError::Core(
            ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into(),
        ));
    }

    if prompter.is_interactive() {
        output.header("pkg.info initializer")?;
    }

    let info = collect(&args, &prompter, config, output)?;
    debug!(name = info.name(), version = %info.version(), "Package collected");

    let overwrite = if exists && !args.force {
        let question = format!("{} already exists. Overwrite?", path.display());
        if !prompter.confirm(&question, false)?.unwrap_or(false) {
            return Err(CliError::Cancelled);
        }
        true
    } else {
        args.force
    };

    service.save(path, &info, overwrite)?;
    info!(path = %path.display(), "pkg.info created");
    output.success(&format!(
        "Created {} for {} {}",
        path.display(),
        info.name(),
        info.version()
    ))?;
    Ok(())
}

fn collect(
    args: &InitArgs,
    prompter: &Prompter,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<PackageInfo> {
    let name = prompt::required(prompter, args.name.clone(), "name", "Project name")?;
    let version = version(prompter, args.version.clone())?;
    let description = prompt::optional(
        prompter,
        args.description.clone(),
        "Description (Enter for blank)",
    )?;
    let tenant = prompt::required(prompter, args.tenant.clone(), "tenant", "Tenant")?;
    let repo = prompt::optional(prompter, args.repo.clone(), "Repository URL (Enter for blank)")?;

    let allowed = &config.package.arch_list;
    let arch_input = prompt::optional(
        prompter,
        args.arch.clone(),
        &format!(
            "Build architectures, comma-separated (Enter for local only) [{}]",
            allowed.join(", ")
        ),
    )?;
    let selection = ArchSelection::parse(&arch_input, allowed.as_slice());

    for rejected in selection.rejected() {
        output.warning(&format!(
            "Unsupported architecture '{rejected}'. It will be ignored"
        ))?;
    }
    if selection.is_local_only() {
        output.info("No build architecture specified. Assuming local platform")?;
    }

    let info = PackageInfo::builder()
        .name(name)
        .version(version)
        .description(description)
        .tenant(tenant)
        .repo(repo)
        .arch(selection.into_accepted())
        .build()
        .map_err(PkgInfoError::from)?;
    Ok(info)
}

/// Version from the flag, else a prompt that re-asks until it parses.
fn version(prompter: &Prompter, flag_value: Option<String>) -> CliResult<SemanticVersion> {
    if let Some(raw) = flag_value {
        return Ok(SemanticVersion::parse(raw.trim())?);
    }

    let raw = prompter
        .text("Project version", Some("0.1.0"), false, |s: &String| {
            SemanticVersion::parse(s.trim())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })?
        .ok_or(CliError::MissingField {
            flag: "pkg-version",
        })?;
    Ok(SemanticVersion::parse(&raw)?)
}
