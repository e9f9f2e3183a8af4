//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use zentra_core::application::ALL_TARGET;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "zentra",
    bin_name = "zentra",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate React pages and shadcn/ui components from Zentra models",
    long_about = "Zentra reads the pages declared in zentra/models/zentra.toml, \
                  fetches the component templates they use and writes \
                  ready-to-use Next.js pages into zentra/generated.",
    after_help = "EXAMPLES:\n\
        \x20 zentra init\n\
        \x20 zentra generate\n\
        \x20 zentra list --format json\n\
        \x20 zentra completions bash > /usr/share/bash-completion/completions/zentra",
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
    /// Make the current directory a Zentra project.
    #[command(
        about = "Set up a Zentra project",
        after_help = "EXAMPLES:\n\
            \x20 zentra init\n\
            \x20 zentra init --yes\n\
            \x20 zentra -C ../web init"
    )]
    Init(InitArgs),

    /// Generate components and pages from the models file.
    #[command(
        visible_alias = "g",
        about = "Generate components and pages",
        after_help = "EXAMPLES:\n\
            \x20 zentra generate\n\
            \x20 zentra generate all -v"
    )]
    Generate(GenerateArgs),

    /// List the component templates available remotely.
    #[command(
        visible_alias = "ls",
        about = "List available component templates",
        after_help = "EXAMPLES:\n\
            \x20 zentra list\n\
            \x20 zentra list --format list\n\
            \x20 zentra list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 zentra completions bash > ~/.local/share/bash-completion/completions/zentra\n\
            \x20 zentra completions zsh  > ~/.zfunc/_zentra\n\
            \x20 zentra completions fish > ~/.config/fish/completions/zentra.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Zentra configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 zentra config get remote.base_url\n\
            \x20 zentra config list\n\
            \x20 zentra config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `zentra init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and set up immediately")]
    pub yes: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `zentra generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// File to generate. Every value currently generates all files.
    #[arg(value_name = "FILENAME", default_value = ALL_TARGET)]
    pub filename: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `zentra list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one library, e.g. `ui`.
    #[arg(short = 'l', long = "library", value_name = "LIBRARY")]
    pub library: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `zentra completions`.
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

/// Subcommands for `zentra config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `remote.base_url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
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
    fn generate_defaults_to_all() {
        let cli = Cli::parse_from(["zentra", "generate"]);
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.filename, "all"),
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["zentra", "g", "landing.tsx"]);
        assert!(matches!(cli.command, Commands::Generate(ref a) if a.filename == "landing.tsx"));
    }

    #[test]
    fn init_accepts_yes() {
        let cli = Cli::parse_from(["zentra", "init", "-y"]);
        assert!(matches!(cli.command, Commands::Init(InitArgs { yes: true })));
    }

    #[test]
    fn project_dir_is_global() {
        let cli = Cli::parse_from(["zentra", "generate", "-C", "web"]);
        assert_eq!(cli.global.project_dir, std::path::PathBuf::from("web"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["zentra", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
