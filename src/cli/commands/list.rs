//! List command implementation.

use crate::cli::args::ListArgs;
use crate::config::{CustomRepositories, GignrPaths};
use crate::error::{GignrError, Result};
use crate::fetch::{ApiOptions, GitHubClient, TemplateCatalog};
use crate::source::{resolve, SourcePrefix};
use crate::store::LocalStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    store: LocalStore,
    repositories: CustomRepositories,
    api: ApiOptions,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(
        paths: &GignrPaths,
        repositories: CustomRepositories,
        api: ApiOptions,
        args: ListArgs,
    ) -> Self {
        Self {
            store: LocalStore::new(paths.templates_dir()),
            repositories,
            api,
            args,
        }
    }

    fn list_local(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let names = self.store.list()?;
        if names.is_empty() {
            ui.message("No local templates. Save one with `gignr save <NAME>`.");
            return Ok(CommandResult::success());
        }

        for name in names {
            ui.message(&name);
        }
        Ok(CommandResult::success())
    }

    /// List the templates a remote source offers, using `catalog`.
    pub fn list_remote(
        &self,
        token: &str,
        catalog: &dyn TemplateCatalog,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let prefix = SourcePrefix::parse(token.trim());
        let binding = match resolve(&prefix, &self.repositories) {
            Ok(binding) => binding,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let mut spinner = ui.start_spinner(&format!("Listing {}", binding));
        let listing = catalog.list_templates(&binding);
        spinner.finish_clear();

        let descriptors = match listing {
            Ok(descriptors) => descriptors,
            Err(e) => {
                let error = GignrError::ListingFailure {
                    source_label: prefix.token().to_string(),
                    message: format!("{:#}", e),
                };
                ui.error(&error.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let mut names: Vec<&str> = descriptors
            .iter()
            .filter_map(|d| d.template_name())
            .collect();
        names.sort_by_key(|n| n.to_lowercase());

        if names.is_empty() {
            ui.message(&format!("No templates found in {}", binding));
        }
        for name in names {
            ui.message(name);
        }
        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.source {
            Some(token) => {
                let client = GitHubClient::new(self.api.clone())?;
                self.list_remote(token, &client, ui)
            }
            None => self.list_local(ui),
        }
    }
}
