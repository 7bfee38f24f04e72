//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// gignr - Build .gitignore files from template collections.
#[derive(Debug, Parser)]
#[command(name = "gignr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// State directory holding config.yml and local templates (default ~/.gignr)
    #[arg(long, global = true, env = "GIGNR_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// GitHub API base URL (overrides config.yml)
    #[arg(long, global = true, env = "GIGNR_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Token for authenticated GitHub requests
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide = true, hide_env_values = true)]
    pub github_token: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a .gitignore from one or more templates
    Create(CreateArgs),

    /// Save a gitignore file as a local template
    Save(SaveArgs),

    /// List local templates, or the templates a source offers
    List(ListArgs),

    /// Remove a local template
    Remove(RemoveArgs),

    /// Manage custom template repositories
    Repo(RepoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Templates to merge, in order (e.g. gh:Go ghg:macOS tt:rust my-stack)
    #[arg(required = true, value_name = "TEMPLATE")]
    pub templates: Vec<String>,
}

/// Arguments for the `save` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SaveArgs {
    /// Name to store the template under
    pub name: String,

    /// File to read (default .gitignore in the current directory)
    #[arg(long, value_name = "PATH")]
    pub from: Option<PathBuf>,

    /// Overwrite an existing template without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List the templates offered by a source prefix (e.g. gh, tt, or a repo alias)
    #[arg(long, value_name = "PREFIX")]
    pub source: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Local template to delete
    pub name: String,

    /// Don't prompt for confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `repo` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RepoArgs {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

/// Repository subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RepoSubcommand {
    /// Register a repository under an alias
    Add {
        /// Prefix to use in template references
        alias: String,
        /// Repository URL (https://github.com/owner/repo, git@github.com:owner/repo.git, owner/repo)
        url: String,
    },
    /// Forget a registered repository
    Remove {
        /// Alias to remove
        alias: String,
    },
    /// Show registered repositories
    List,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_create_in_order() {
        let cli = Cli::try_parse_from(["gignr", "create", "gh:Go", "ghg:macOS", "mine"]).unwrap();
        match cli.command {
            Commands::Create(args) => assert_eq!(args.templates, ["gh:Go", "ghg:macOS", "mine"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_requires_a_template() {
        assert!(Cli::try_parse_from(["gignr", "create"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gignr",
            "list",
            "--home",
            "/tmp/state",
            "--api-url",
            "http://localhost:1234",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/state")));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1234"));
        assert!(cli.quiet);
    }

    #[test]
    fn parses_repo_add() {
        let cli = Cli::try_parse_from(["gignr", "repo", "add", "work", "acme/ignores"]).unwrap();
        match cli.command {
            Commands::Repo(RepoArgs {
                command: RepoSubcommand::Add { alias, url },
            }) => {
                assert_eq!(alias, "work");
                assert_eq!(url, "acme/ignores");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
