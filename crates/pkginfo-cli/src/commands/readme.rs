//! `pkginfo readme` — render the README from `pkg.info`.

use tracing::{debug, info, instrument};

use pkginfo_adapters::BuiltinTemplate;

use crate::{
    cli::ReadmeArgs,
    commands::prompt::Prompter,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ReadmeArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let package = super::package_service(config).load(&config.package.info_file)?;
    let service = super::readme_service(args.strict);

    let template = match &args.template {
        Some(path) => {
            debug!(path = %path.display(), "Using custom template");
            service.load_template(path)?
        }
        None => style(&args, config)?.content().to_owned(),
    };

    let prompter = if args.silent {
        Prompter::disabled()
    } else {
        Prompter::new(false)
    };
    let icon = icon(&args, &prompter, config)?;

    let path = config.package.readme_file.as_path();
    service.generate(&package, &icon, &template, path, args.force)?;

    info!(path = %path.display(), "README generated");
    output.success(&format!("Generated {} for {}", path.display(), package.name()))?;
    Ok(())
}

/// `--style`, else the configured style.
fn style(args: &ReadmeArgs, config: &AppConfig) -> CliResult<BuiltinTemplate> {
    match args.style {
        Some(style) => Ok(style),
        None => config
            .package
            .readme_style
            .parse::<BuiltinTemplate>()
            .map_err(|e| CliError::ConfigError {
                message: format!("package.readme_style: {e}"),
                source: None,
            }),
    }
}

/// `--icon`, else a prompt defaulting to the configured path.
fn icon(args: &ReadmeArgs, prompter: &Prompter, config: &AppConfig) -> CliResult<String> {
    if let Some(icon) = &args.icon {
        return Ok(icon.trim().to_owned());
    }

    let default = config.package.icon_path.as_str();
    let answer = prompter.text(
        &format!("Icon file (Enter for {default})"),
        Some(default),
        true,
        |_: &String| Ok(()),
    )?;

    Ok(answer
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_owned()))
}
