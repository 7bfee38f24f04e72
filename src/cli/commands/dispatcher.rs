//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, GignrConfig, GignrPaths};
use crate::error::Result;
use crate::fetch::ApiOptions;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings given on the command line or through the environment.
///
/// These win over `config.yml`.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOverrides {
    /// State directory.
    pub home: Option<PathBuf>,
    /// GitHub API base URL.
    pub api_url: Option<String>,
    /// GitHub token.
    pub github_token: Option<String>,
}

impl RuntimeOverrides {
    /// Collect the overrides from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            home: cli.home.clone(),
            api_url: cli.api_url.clone(),
            github_token: cli.github_token.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    paths: GignrPaths,
    overrides: RuntimeOverrides,
}

impl CommandDispatcher {
    /// Create a new dispatcher running in `working_dir`.
    pub fn new(working_dir: PathBuf, overrides: RuntimeOverrides) -> Self {
        let paths = GignrPaths::discover(overrides.home.as_deref());
        Self {
            working_dir,
            paths,
            overrides,
        }
    }

    /// Directory the output file is written to.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// State directory layout.
    pub fn paths(&self) -> &GignrPaths {
        &self.paths
    }

    /// Connection settings: overrides first, then the config file.
    pub fn api_options(&self, config: &GignrConfig) -> ApiOptions {
        let base_url = self
            .overrides
            .api_url
            .as_deref()
            .unwrap_or_else(|| config.api_url())
            .trim_end_matches('/')
            .to_string();

        ApiOptions {
            base_url,
            token: self.overrides.github_token.clone(),
            timeout: Duration::from_secs(config.timeout_secs()),
        }
    }

    /// Load `config.yml` from the state directory.
    pub fn load_config(&self) -> Result<GignrConfig> {
        let config = load_config(&self.paths.config_file())?;
        tracing::debug!(
            "Loaded config from {} ({} custom repositories)",
            self.paths.config_file().display(),
            config.repositories.len()
        );
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Create(args) => {
                let config = self.load_config()?;
                let cmd = super::create::CreateCommand::new(
                    &self.working_dir,
                    &self.paths,
                    config.repositories.clone(),
                    self.api_options(&config),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Save(args) => {
                let cmd = super::save::SaveCommand::new(&self.working_dir, &self.paths, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let config = self.load_config()?;
                let cmd = super::list::ListCommand::new(
                    &self.paths,
                    config.repositories.clone(),
                    self.api_options(&config),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Remove(args) => {
                let cmd = super::remove::RemoveCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Commands::Repo(args) => {
                let cmd = super::repo::RepoCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
