//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pkginfo_adapters::BuiltinTemplate;
use pkginfo_core::domain::BumpLevel;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pkginfo",
    bin_name = "pkginfo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Package metadata utility",
    long_about = "pkginfo maintains a project's pkg.info manifest, bumps its \
                  semantic version, and generates a README from it.",
    after_help = "EXAMPLES:\n\
        \x20 pkginfo init\n\
        \x20 pkginfo init --no-interaction --name widget --pkg-version 0.1.0 --tenant acme\n\
        \x20 pkginfo readme --silent\n\
        \x20 pkginfo version bump minor\n\
        \x20 pkginfo version compare 1.0.0-rc.1 1.0.0",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the pkg.info manifest.
    #[command(
        visible_alias = "i",
        about = "Create pkg.info (interactive by default)",
        after_help = "EXAMPLES:\n\
            \x20 pkginfo init\n\
            \x20 pkginfo init --name widget --tenant acme --arch linux_amd64,windows\n\
            \x20 pkginfo init --no-interaction --name w --pkg-version 1.0.0 --tenant t --force"
    )]
    Init(InitArgs),

    /// Generate README.md from pkg.info.
    #[command(
        visible_alias = "rm",
        about = "Generate the README from pkg.info",
        after_help = "EXAMPLES:\n\
            \x20 pkginfo readme\n\
            \x20 pkginfo readme --silent --force\n\
            \x20 pkginfo readme --icon docs/logo.svg --style minimal\n\
            \x20 pkginfo readme --template ./README.tpl --strict"
    )]
    Readme(ReadmeArgs),

    /// Inspect and change the package version.
    #[command(
        subcommand,
        visible_alias = "v",
        about = "Semantic version operations",
        after_help = "EXAMPLES:\n\
            \x20 pkginfo version show\n\
            \x20 pkginfo version bump patch\n\
            \x20 pkginfo version set-pre rc.1\n\
            \x20 pkginfo version validate 1.2.3-beta --strict\n\
            \x20 pkginfo version compare 1.0.0-alpha 1.0.0-alpha.1"
    )]
    Version(VersionCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pkginfo completions bash > ~/.local/share/bash-completion/completions/pkginfo\n\
            \x20 pkginfo completions zsh  > ~/.zfunc/_pkginfo\n\
            \x20 pkginfo completions fish > ~/.config/fish/completions/pkginfo.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pkginfo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pkginfo config get package.icon_path\n\
            \x20 pkginfo config list\n\
            \x20 pkginfo config init --local"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pkginfo init`.
///
/// Every field flag pre-fills the matching prompt, which is then skipped.
#[derive(Debug, Default, Args)]
pub struct InitArgs {
    /// Project name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Project version (semantic version, `v` prefix allowed).
    #[arg(id = "pkg_version", long = "pkg-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Project description.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Owning tenant.
    #[arg(long = "tenant", value_name = "TENANT")]
    pub tenant: Option<String>,

    /// Repository URL.
    #[arg(long = "repo", value_name = "URL")]
    pub repo: Option<String>,

    /// Comma-separated build architectures; empty for local only.
    #[arg(long = "arch", value_name = "LIST")]
    pub arch: Option<String>,

    /// Never prompt; missing required fields are an error.
    #[arg(short = 'n', long = "no-interaction")]
    pub no_interaction: bool,

    /// Overwrite an existing pkg.info without asking.
    #[arg(short = 'f', long = "force", visible_alias = "yes", short_alias = 'y')]
    pub force: bool,
}

// ── readme ────────────────────────────────────────────────────────────────────

/// Arguments for `pkginfo readme`.
#[derive(Debug, Default, Args)]
pub struct ReadmeArgs {
    /// Do not prompt for the icon path; use `--icon` or the configured default.
    #[arg(short = 's', long = "silent")]
    pub silent: bool,

    /// Icon path shown at the top of the README.
    #[arg(long = "icon", value_name = "PATH")]
    pub icon: Option<String>,

    /// Render a custom template file instead of a built-in layout.
    #[arg(long = "template", value_name = "FILE", conflicts_with = "style")]
    pub template: Option<PathBuf>,

    /// Built-in layout (standard, minimal).
    #[arg(long = "style", value_name = "STYLE")]
    pub style: Option<BuiltinTemplate>,

    /// Fail on placeholders with no value instead of leaving them.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Overwrite an existing README.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── version ───────────────────────────────────────────────────────────────────

/// Subcommands for `pkginfo version`.
#[derive(Debug, Subcommand)]
pub enum VersionCommands {
    /// Print the version from pkg.info.
    Show {
        /// Print the version exactly as written in pkg.info.
        #[arg(long = "original")]
        original: bool,

        /// Print the parsed components as JSON.
        #[arg(long = "json")]
        json: bool,
    },

    /// Increment a version segment and save pkg.info.
    Bump {
        #[arg(value_enum)]
        level: BumpArg,
    },

    /// Set the prerelease (an empty string clears it).
    #[command(name = "set-pre")]
    SetPre {
        #[arg(value_name = "PRERELEASE", allow_hyphen_values = true)]
        prerelease: String,
    },

    /// Set the build metadata (an empty string clears it).
    #[command(name = "set-meta")]
    SetMeta {
        #[arg(value_name = "METADATA", allow_hyphen_values = true)]
        metadata: String,
    },

    /// Check whether a string is a valid version.
    Validate {
        version: String,

        /// Require all three core segments and no `v` prefix.
        #[arg(long = "strict")]
        strict: bool,
    },

    /// Compare two versions by precedence; prints `<`, `=`, or `>`.
    Compare { left: String, right: String },
}

/// Segment to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpArg> for BumpLevel {
    fn from(arg: BumpArg) -> Self {
        match arg {
            BumpArg::Major => Self::Major,
            BumpArg::Minor => Self::Minor,
            BumpArg::Patch => Self::Patch,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pkginfo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pkginfo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `package.info_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Write `.pkginfo.toml` in the current directory instead of the
        /// user configuration directory.
        #[arg(long = "local")]
        local: bool,

        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_flags() {
        let cli = Cli::parse_from([
            "pkginfo",
            "init",
            "--name",
            "widget",
            "--pkg-version",
            "v1.2",
            "--arch",
            "linux_amd64, windows",
            "-n",
            "-y",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.name.as_deref(), Some("widget"));
        assert_eq!(args.version.as_deref(), Some("v1.2"));
        assert_eq!(args.arch.as_deref(), Some("linux_amd64, windows"));
        assert!(args.no_interaction);
        assert!(args.force);
    }

    #[test]
    fn parse_bump_level() {
        let cli = Cli::parse_from(["pkginfo", "version", "bump", "minor"]);
        assert!(matches!(
            cli.command,
            Commands::Version(VersionCommands::Bump {
                level: BumpArg::Minor
            })
        ));
        assert_eq!(BumpLevel::from(BumpArg::Minor), BumpLevel::Minor);
    }

    #[test]
    fn set_pre_accepts_empty_value() {
        let cli = Cli::parse_from(["pkginfo", "version", "set-pre", ""]);
        assert!(matches!(
            cli.command,
            Commands::Version(VersionCommands::SetPre { ref prerelease }) if prerelease.is_empty()
        ));
    }

    #[test]
    fn readme_style_parses_builtin() {
        let cli = Cli::parse_from(["pkginfo", "readme", "--style", "minimal"]);
        let Commands::Readme(args) = cli.command else {
            panic!("expected Readme command");
        };
        assert_eq!(args.style, Some(BuiltinTemplate::Minimal));
    }

    #[test]
    fn readme_template_conflicts_with_style() {
        let result = Cli::try_parse_from([
            "pkginfo", "readme", "--template", "x.tpl", "--style", "minimal",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn readme_alias() {
        let cli = Cli::parse_from(["pkginfo", "rm", "-s"]);
        assert!(matches!(cli.command, Commands::Readme(ReadmeArgs { silent: true, .. })));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["pkginfo", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
