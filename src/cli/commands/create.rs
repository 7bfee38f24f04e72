//! Create command implementation.
//!
//! `gignr create gh:Go ghg:macOS my-stack` fetches each template in order and
//! writes the concatenation to `.gitignore` in the working directory.

use std::path::{Path, PathBuf};

use crate::assembly::{assemble, write_output, Assembler, OUTPUT_FILE_NAME};
use crate::cli::args::CreateArgs;
use crate::config::{CustomRepositories, GignrPaths};
use crate::error::{GignrError, Result};
use crate::fetch::{ApiOptions, GitHubClient, TemplateCatalog};
use crate::store::LocalStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    output_path: PathBuf,
    store: LocalStore,
    repositories: CustomRepositories,
    api: ApiOptions,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(
        working_dir: &Path,
        paths: &GignrPaths,
        repositories: CustomRepositories,
        api: ApiOptions,
        args: CreateArgs,
    ) -> Self {
        Self {
            output_path: working_dir.join(OUTPUT_FILE_NAME),
            store: LocalStore::new(paths.templates_dir()),
            repositories,
            api,
            args,
        }
    }

    /// Where the result is written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run against a specific catalog.
    pub fn run_with(
        &self,
        catalog: &dyn TemplateCatalog,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let assembler = Assembler::new(catalog, &self.store, &self.repositories);

        let segments = match assembler.collect(&self.args.templates, ui) {
            Ok(segments) => segments,
            Err(e) if e.is_fatal() => {
                ui.error(&e.to_string());
                ui.warning("No .gitignore file created.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if segments.is_empty() {
            tracing::warn!("No templates resolved; writing an empty {}", OUTPUT_FILE_NAME);
        }

        let content = assemble(&segments);
        match write_output(&self.output_path, &content) {
            Ok(()) => {
                ui.success(&format!("Created {}!", OUTPUT_FILE_NAME));
                Ok(CommandResult::success())
            }
            Err(e @ GignrError::WriteFailure { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = GitHubClient::new(self.api.clone())?;
        self.run_with(&client, ui)
    }
}
