//! Save command implementation.
//!
//! Copies a gitignore file into the local store so it can be referenced
//! later without a prefix.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assembly::OUTPUT_FILE_NAME;
use crate::cli::args::SaveArgs;
use crate::config::GignrPaths;
use crate::error::{GignrError, Result};
use crate::store::{validate_template_name, LocalStore};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The save command implementation.
pub struct SaveCommand {
    working_dir: PathBuf,
    store: LocalStore,
    args: SaveArgs,
}

impl SaveCommand {
    /// Create a new save command.
    pub fn new(working_dir: &Path, paths: &GignrPaths, args: SaveArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            store: LocalStore::new(paths.templates_dir()),
            args,
        }
    }

    fn source_path(&self) -> PathBuf {
        match &self.args.from {
            Some(path) => self.working_dir.join(path),
            None => self.working_dir.join(OUTPUT_FILE_NAME),
        }
    }
}

impl Command for SaveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;

        if let Err(e) = validate_template_name(name) {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(1));
        }

        let source = self.source_path();
        if !source.is_file() {
            ui.error(&format!("No file to save at {}", source.display()));
            return Ok(CommandResult::failure(1));
        }

        if !self.args.force && self.store.contains(name)? {
            let prompt = Prompt::new(
                "overwrite",
                format!("Local template '{}' exists. Overwrite?", name),
                false,
            );
            let overwrite = ui.is_interactive() && ui.confirm(&prompt)?;
            if !overwrite {
                ui.error(&GignrError::LocalTemplateExists { name: name.clone() }.to_string());
                return Ok(CommandResult::failure(1));
            }
        }

        let content = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let saved = self.store.save(name, &content)?;

        tracing::debug!("Copied {} to {}", source.display(), saved.display());
        ui.success(&format!("Saved template '{}'", name));
        Ok(CommandResult::success())
    }
}
