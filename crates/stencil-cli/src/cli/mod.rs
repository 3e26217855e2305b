//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate and maintain the tooling files of a TypeScript Lambda project",
    long_about = "Stencil writes package.json, commit linting, git hooks, \
                  ignore files and editor settings for a TypeScript AWS Lambda \
                  project, and keeps them in sync on every run.",
    after_help = "EXAMPLES:\n\
        \x20 stencil synth --package-name order-intake --description \"Order intake\"\n\
        \x20 stencil synth ./service --without vscode\n\
        \x20 stencil check ./service\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
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
    /// Write the project files into a directory.
    #[command(
        visible_alias = "s",
        about = "Generate project files",
        after_help = "EXAMPLES:\n\
            \x20 stencil synth\n\
            \x20 stencil synth ./service --package-name order-intake --description \"Order intake\"\n\
            \x20 stencil synth --without husky --writable\n\
            \x20 stencil synth --dry-run"
    )]
    Synth(SynthArgs),

    /// Show the files a synth run would write.
    #[command(
        visible_alias = "ls",
        about = "List files that would be generated",
        after_help = "EXAMPLES:\n\
            \x20 stencil plan\n\
            \x20 stencil plan --format json"
    )]
    Plan(PlanArgs),

    /// Compare generated files on disk with what synth would write.
    #[command(
        about = "Detect drift in generated files",
        after_help = "EXAMPLES:\n\
            \x20 stencil check\n\
            \x20 stencil check ./service   # exits 5 when anything drifted"
    )]
    Check(CheckArgs),

    /// List the components of the project in composition order.
    #[command(about = "List project components")]
    Components,

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init               # .stencil.toml in the current directory\n\
            \x20 stencil init --global      # user configuration directory\n\
            \x20 stencil init --interactive # prompt for project identity"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get project.package_name\n\
            \x20 stencil config list\n\
            \x20 stencil config path"
    )]
    Config(ConfigCommands),
}

// ── shared project flags ──────────────────────────────────────────────────────

/// Project identity and composition overrides, shared by every command that
/// renders the project.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Package name written to the manifest.
    #[arg(long = "package-name", value_name = "NAME", help = "Package name")]
    pub package_name: Option<String>,

    /// One-line project description.
    #[arg(
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Drop a component from the composition. Repeatable.
    #[arg(
        long = "without",
        value_name = "COMPONENT",
        help = "Skip a component (see `stencil components`)"
    )]
    pub without: Vec<String>,
}

// ── synth ─────────────────────────────────────────────────────────────────────

/// Arguments for `stencil synth`.
#[derive(Debug, Args)]
pub struct SynthArgs {
    /// Output directory.
    #[arg(value_name = "ROOT", default_value = ".", help = "Output directory")]
    pub root: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Leave generated files writable.
    #[arg(long = "writable", help = "Do not mark generated files read-only")]
    pub writable: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `stencil check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Directory holding the generated files.
    #[arg(value_name = "ROOT", default_value = ".", help = "Project directory")]
    pub root: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,

    /// Prompt for the project description and package name.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Prompt for project identity"
    )]
    pub interactive: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
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

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.package_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations, in load order.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_synth_command() {
        let cli = Cli::parse_from([
            "stencil",
            "synth",
            "out",
            "--package-name",
            "order-intake",
            "--without",
            "husky",
            "--without",
            "vscode",
        ]);
        let Commands::Synth(args) = cli.command else {
            panic!("expected Synth command");
        };
        assert_eq!(args.root, PathBuf::from("out"));
        assert_eq!(args.project.package_name.as_deref(), Some("order-intake"));
        assert_eq!(args.project.without, vec!["husky", "vscode"]);
        assert!(!args.writable);
    }

    #[test]
    fn synth_root_defaults_to_cwd() {
        let cli = Cli::parse_from(["stencil", "s"]);
        let Commands::Synth(args) = cli.command else {
            panic!("expected Synth command");
        };
        assert_eq!(args.root, PathBuf::from("."));
    }

    #[test]
    fn plan_alias_and_format() {
        let cli = Cli::parse_from(["stencil", "ls", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Plan(PlanArgs {
                format: ListFormat::Csv,
                ..
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stencil", "check", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stencil", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
