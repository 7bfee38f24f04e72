//! Remove command implementation.

use crate::cli::args::RemoveArgs;
use crate::config::GignrPaths;
use crate::error::{GignrError, Result};
use crate::store::LocalStore;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    store: LocalStore,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(paths: &GignrPaths, args: RemoveArgs) -> Self {
        Self {
            store: LocalStore::new(paths.templates_dir()),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;

        if !self.store.contains(name)? {
            ui.error(&GignrError::LocalTemplateNotFound { name: name.clone() }.to_string());
            return Ok(CommandResult::failure(1));
        }

        if !self.args.force && ui.is_interactive() {
            let prompt = Prompt::new("remove", format!("Remove local template '{}'?", name), false);
            if !ui.confirm(&prompt)? {
                ui.message("Cancelled");
                return Ok(CommandResult::success());
            }
        }

        self.store.remove(name)?;
        ui.success(&format!("Removed template '{}'", name));
        Ok(CommandResult::success())
    }
}
