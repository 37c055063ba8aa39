//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kickstart",
    bin_name = "kickstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Apply kickstart templates to new projects",
    long_about = "Kickstart deploys a template's draft manifest and seeder into a \
                  freshly generated project, removes the generic seeders it \
                  replaces, and checks that the migrations seeding needs exist.",
    after_help = "EXAMPLES:\n\
        \x20 kickstart apply ./my-blog --template blog\n\
        \x20 kickstart apply ./my-app  --template podcast --teams\n\
        \x20 kickstart check ./my-app  --template phone-book\n\
        \x20 kickstart templates\n\
        \x20 kickstart completions bash > /usr/share/bash-completion/completions/kickstart",
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
    /// Apply a kickstart template to a project.
    #[command(
        visible_alias = "a",
        about = "Apply a kickstart template to a project",
        after_help = "EXAMPLES:\n\
            \x20 kickstart apply ./my-blog --template blog\n\
            \x20 kickstart apply ./my-app  --template podcast --teams\n\
            \x20 kickstart apply ./my-app  --template blog --dry-run"
    )]
    Apply(ApplyArgs),

    /// Check migration prerequisites without changing anything.
    #[command(
        about = "Check that the migrations seeding needs are present",
        after_help = "EXAMPLES:\n\
            \x20 kickstart check ./my-app --template blog\n\
            \x20 kickstart check ./my-app --template blog --teams"
    )]
    Check(CheckArgs),

    /// List the template catalog.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 kickstart templates\n\
            \x20 kickstart templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Initialise a Kickstart configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kickstart init\n\
            \x20 kickstart init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kickstart completions bash > ~/.local/share/bash-completion/completions/kickstart\n\
            \x20 kickstart completions zsh  > ~/.zfunc/_kickstart\n\
            \x20 kickstart completions fish > ~/.config/fish/completions/kickstart.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kickstart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kickstart config get defaults.template\n\
            \x20 kickstart config list\n\
            \x20 kickstart config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Project and template selection shared by `apply` and `check`.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Root of the generated project.
    #[arg(value_name = "PROJECT", help = "Path to the project root")]
    pub project: PathBuf,

    /// Template name; falls back to `defaults.template` from the config.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME",
        help = "Kickstart template (blog, podcast, phone-book)"
    )]
    pub template: Option<String>,

    /// The project has teams support enabled.
    #[arg(long = "teams", help = "Project uses teams")]
    pub teams: bool,

    /// Directory containing `kickstart/<template>/` stubs.
    #[arg(
        long = "stubs",
        value_name = "DIR",
        env = "KICKSTART_STUB_ROOT",
        help = "Override the stub root directory"
    )]
    pub stubs: Option<PathBuf>,
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `kickstart apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the resolved paths without writing or deleting anything.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `kickstart check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `kickstart templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kickstart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kickstart completions`.
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

/// Subcommands for `kickstart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_apply_command() {
        let cli = Cli::parse_from([
            "kickstart",
            "apply",
            "./my-app",
            "--template",
            "podcast",
            "--teams",
        ]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert_eq!(args.target.project, PathBuf::from("./my-app"));
        assert_eq!(args.target.template.as_deref(), Some("podcast"));
        assert!(args.target.teams);
        assert!(!args.dry_run);
    }

    #[test]
    fn template_is_optional() {
        let cli = Cli::parse_from(["kickstart", "check", "."]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.target.template, None);
        assert!(!args.target.teams);
    }

    #[test]
    fn templates_alias() {
        let cli = Cli::parse_from(["kickstart", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Templates(TemplatesArgs {
                format: ListFormat::Json
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["kickstart", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
