//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archetype",
    bin_name = "archetype",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a base Python project structure",
    long_about = "Archetype creates the directories, packages and boilerplate \
                  files of a Python project. Existing files are never \
                  overwritten, so it is safe to run on a partial tree.",
    after_help = "EXAMPLES:\n\
        \x20 archetype create --name MyProject --base-path ./my_project\n\
        \x20 archetype catalog --name MyProject --format json\n\
        \x20 archetype merge extra-requirements.txt requirements.txt\n\
        \x20 archetype completions bash > /usr/share/bash-completion/completions/archetype",
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

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the project skeleton.
    #[command(
        visible_alias = "c",
        about = "Create the base project structure",
        after_help = "EXAMPLES:\n\
            \x20 archetype create --name MyProject --base-path ./my_project\n\
            \x20 archetype create --base-path . --templates ./company-templates\n\
            \x20 ARCHETYPE_PROJECT__BASE_PATH=./out archetype create -n demo"
    )]
    Create(CreateArgs),

    /// Show what `create` would build.
    #[command(
        visible_alias = "ls",
        about = "Show the project catalog",
        after_help = "EXAMPLES:\n\
            \x20 archetype catalog\n\
            \x20 archetype catalog --name MyProject --format json"
    )]
    Catalog(CatalogArgs),

    /// Merge one text file into another.
    #[command(
        about = "Merge requirements or append a file",
        after_help = "EXAMPLES:\n\
            \x20 archetype merge extra.txt requirements.txt\n\
            \x20 archetype merge notes.txt README.md --append"
    )]
    Merge(MergeArgs),

    /// Initialise an Archetype configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 archetype init           # user config directory\n\
            \x20 archetype init --local   # .archetype.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archetype completions bash > ~/.local/share/bash-completion/completions/archetype\n\
            \x20 archetype completions zsh  > ~/.zfunc/_archetype\n\
            \x20 archetype completions fish > ~/.config/fish/completions/archetype.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Archetype configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 archetype config get project.source_dir\n\
            \x20 archetype config list\n\
            \x20 archetype config path"
    )]
    Config(ConfigCommands),
}

/// Arguments for `archetype create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name; normalized to the package directory name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Directory the skeleton is created in.
    #[arg(
        short = 'b',
        long = "base-path",
        value_name = "DIR",
        help = "Project base directory"
    )]
    pub base_path: Option<PathBuf>,

    /// Read templates from `<DIR>/resources/` instead of the bundled set.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Template directory (must contain resources/)"
    )]
    pub templates: Option<PathBuf>,

    /// Directory holding the packages, relative to the base path.
    #[arg(long = "source-dir", value_name = "DIR", help = "Source directory (default: src)")]
    pub source_dir: Option<PathBuf>,
}

/// Arguments for `archetype catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Project name used for package paths.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: CatalogFormat,
}

/// Output format for the `catalog` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON object.
    Json,
}

/// Arguments for `archetype merge`.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// File to read from.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// File to update.
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Append SOURCE verbatim instead of merging requirements.
    #[arg(long = "append", help = "Append instead of merging requirements")]
    pub append: bool,
}

/// Arguments for `archetype init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.archetype.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

/// Arguments for `archetype completions`.
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

/// Subcommands for `archetype config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.source_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "archetype",
            "create",
            "--name",
            "MyProject",
            "--base-path",
            "/tmp/out",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name.as_deref(), Some("MyProject"));
                assert_eq!(args.base_path, Some(PathBuf::from("/tmp/out")));
                assert!(args.templates.is_none());
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn create_alias() {
        let cli = Cli::parse_from(["archetype", "c", "-n", "demo"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn catalog_defaults_to_table() {
        let cli = Cli::parse_from(["archetype", "catalog"]);
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.format, CatalogFormat::Table);
        } else {
            panic!("expected Catalog command");
        }
    }

    #[test]
    fn merge_requires_two_paths() {
        assert!(Cli::try_parse_from(["archetype", "merge", "only-one.txt"]).is_err());
        let cli = Cli::parse_from(["archetype", "merge", "a.txt", "b.txt", "--append"]);
        if let Commands::Merge(args) = cli.command {
            assert!(args.append);
            assert_eq!(args.dest, PathBuf::from("b.txt"));
        } else {
            panic!("expected Merge command");
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["archetype", "catalog", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["archetype", "--quiet", "--verbose", "catalog"]);
        assert!(result.is_err());
    }
}
