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
    name    = "sprig",
    bin_name = "sprig",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project skeletons signed with your git identity",
    long_about = "Sprig generates a new project whose author, email and GitHub \
                  remote come from your git configuration.",
    after_help = "EXAMPLES:\n\
        \x20 sprig new the-perfect-gem\n\
        \x20 sprig new the-perfect-gem --summary 'zomg, so good' --create-repo\n\
        \x20 sprig check\n\
        \x20 sprig completions bash > /usr/share/bash-completion/completions/sprig",
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
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 sprig new my-lib\n\
            \x20 sprig new my-lib --output ~/code --no-git\n\
            \x20 sprig new my-lib --skeleton ./skeletons/rust-cli --dry-run"
    )]
    New(NewArgs),

    /// Validate git identity without generating anything.
    #[command(
        about = "Check that your git config has everything sprig needs",
        after_help = "EXAMPLES:\n\
            \x20 sprig check\n\
            \x20 sprig check --create-repo\n\
            \x20 sprig check --gitconfig ./work.gitconfig --name my-lib"
    )]
    Check(CheckArgs),

    /// Initialise a Sprig configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprig init\n\
            \x20 sprig --config ./sprig.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprig completions bash > ~/.local/share/bash-completion/completions/sprig\n\
            \x20 sprig completions zsh  > ~/.zfunc/_sprig\n\
            \x20 sprig completions fish > ~/.config/fish/completions/sprig.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprig configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprig config get generator.create_repo\n\
            \x20 sprig config list\n\
            \x20 sprig config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprig new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the directory that is created.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Create the GitHub repository as well (needs github.token).
    #[arg(long = "create-repo", help = "Also create the GitHub repository")]
    pub create_repo: bool,

    /// One-line description used in README and manifest.
    #[arg(short = 's', long = "summary", value_name = "TEXT")]
    pub summary: Option<String>,

    /// Read identity from this file instead of ~/.gitconfig.
    #[arg(long = "gitconfig", value_name = "PATH")]
    pub gitconfig: Option<PathBuf>,

    /// Parent directory for the new project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Use a skeleton directory instead of the built-in one.
    #[arg(long = "skeleton", value_name = "DIR")]
    pub skeleton: Option<PathBuf>,

    /// Do not run `git init` or add the origin remote.
    #[arg(long = "no-git", help = "Skip git repository initialisation")]
    pub no_git: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `sprig check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Also require github.token.
    #[arg(long = "create-repo", help = "Also require a GitHub token")]
    pub create_repo: bool,

    #[arg(long = "gitconfig", value_name = "PATH", help = "Git config file to check")]
    pub gitconfig: Option<PathBuf>,

    /// Project name used to derive the remote shown in the report.
    #[arg(
        long = "name",
        value_name = "NAME",
        default_value = "example",
        help = "Project name to derive the remote for"
    )]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprig init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprig completions`.
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

/// Subcommands for `sprig config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.create_repo`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
