//! Repo command implementation.
//!
//! Provides `gignr repo add`, `gignr repo remove` and `gignr repo list`.

use crate::cli::args::{RepoArgs, RepoSubcommand};
use crate::config::{load_config, save_config, GignrPaths};
use crate::error::{GignrError, Result};
use crate::source::{parse_repository_url, SourcePrefix, PREFIX_SEPARATOR};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The repo command implementation.
pub struct RepoCommand {
    paths: GignrPaths,
    args: RepoArgs,
}

impl RepoCommand {
    /// Create a new repo command.
    pub fn new(paths: &GignrPaths, args: RepoArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }

    fn add(&self, alias: &str, url: &str) -> Result<String> {
        validate_alias(alias)?;

        let (owner, repository) =
            parse_repository_url(url).ok_or_else(|| GignrError::InvalidRepositoryUrl {
                alias: alias.to_string(),
                url: url.to_string(),
            })?;

        let config_path = self.paths.config_file();
        let mut config = load_config(&config_path)?;
        let previous = config.repositories.insert(alias, url.trim());
        save_config(&config_path, &config)?;

        Ok(match previous {
            Some(old) => format!(
                "Replaced repository '{}' ({} -> {}/{})",
                alias, old, owner, repository
            ),
            None => format!("Added repository '{}' ({}/{})", alias, owner, repository),
        })
    }

    fn remove(&self, alias: &str) -> Result<String> {
        let config_path = self.paths.config_file();
        let mut config = load_config(&config_path)?;
        config
            .repositories
            .remove(alias)
            .ok_or_else(|| GignrError::UnknownRepository {
                alias: alias.to_string(),
            })?;
        save_config(&config_path, &config)?;

        Ok(format!("Removed repository '{}'", alias))
    }

    fn list(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let config = load_config(&self.paths.config_file())?;
        if config.repositories.is_empty() {
            ui.message("No custom repositories. Add one with `gignr repo add <ALIAS> <URL>`.");
            return Ok(());
        }

        let width = config
            .repositories
            .iter()
            .map(|(alias, _)| alias.len())
            .max()
            .unwrap_or(0);
        for (alias, url) in config.repositories.iter() {
            ui.message(&format!("{:width$}  {}", alias, url, width = width));
        }
        Ok(())
    }
}

/// An alias must work as the prefix of a template reference.
fn validate_alias(alias: &str) -> Result<()> {
    if SourcePrefix::parse(alias).is_builtin() {
        return Err(GignrError::ReservedPrefix {
            alias: alias.to_string(),
        });
    }

    if alias.is_empty()
        || alias.contains(PREFIX_SEPARATOR)
        || alias.chars().any(char::is_whitespace)
    {
        return Err(GignrError::Other(anyhow::anyhow!(
            "Invalid repository alias '{}': must be non-empty, without whitespace or '{}'",
            alias,
            PREFIX_SEPARATOR
        )));
    }

    Ok(())
}

impl Command for RepoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = match &self.args.command {
            RepoSubcommand::Add { alias, url } => self.add(alias, url),
            RepoSubcommand::Remove { alias } => self.remove(alias),
            RepoSubcommand::List => return self.list(ui).map(|()| CommandResult::success()),
        };

        match outcome {
            Ok(msg) => {
                ui.success(&msg);
                Ok(CommandResult::success())
            }
            Err(
                e @ (GignrError::InvalidRepositoryUrl { .. }
                | GignrError::ReservedPrefix { .. }
                | GignrError::UnknownRepository { .. }
                | GignrError::Other(_)),
            ) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(paths: &GignrPaths, command: RepoSubcommand, ui: &mut MockUI) -> CommandResult {
        RepoCommand::new(paths, RepoArgs { command })
            .execute(ui)
            .unwrap()
    }

    fn add(alias: &str, url: &str) -> RepoSubcommand {
        RepoSubcommand::Add {
            alias: alias.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn add_persists_to_config() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        let result = run(&paths, add("work", "https://github.com/acme/ignores"), &mut ui);

        assert!(result.success);
        assert!(ui.has_success("Added repository 'work' (acme/ignores)"));
        let config = load_config(&paths.config_file()).unwrap();
        assert_eq!(
            config.repositories.get("work"),
            Some("https://github.com/acme/ignores")
        );
    }

    #[test]
    fn add_replaces_existing_alias() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        run(&paths, add("work", "acme/old"), &mut ui);
        run(&paths, add("work", "acme/new"), &mut ui);

        assert!(ui.has_success("Replaced repository 'work'"));
        let config = load_config(&paths.config_file()).unwrap();
        assert_eq!(config.repositories.get("work"), Some("acme/new"));
    }

    #[test]
    fn add_rejects_builtin_prefix() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        let result = run(&paths, add("gh", "acme/ignores"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("built-in prefix"));
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn add_rejects_bad_url() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        let result = run(&paths, add("work", "not a url"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Invalid repository URL for 'work'"));
    }

    #[test]
    fn add_rejects_alias_with_separator() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        let result = run(&paths, add("my:repo", "acme/ignores"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Invalid repository alias"));
    }

    #[test]
    fn remove_and_list() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        run(&paths, add("work", "acme/ignores"), &mut ui);
        run(&paths, add("oss", "git@github.com:octo/templates.git"), &mut ui);
        run(&paths, RepoSubcommand::List, &mut ui);
        assert_eq!(
            ui.messages(),
            [
                "oss   git@github.com:octo/templates.git",
                "work  acme/ignores"
            ]
        );

        let result = run(
            &paths,
            RepoSubcommand::Remove {
                alias: "work".to_string(),
            },
            &mut ui,
        );
        assert!(result.success);
        let config = fs::read_to_string(paths.config_file()).unwrap();
        assert!(!config.contains("work"));
        assert!(config.contains("oss"));
    }

    #[test]
    fn remove_unknown_alias_fails() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        let result = run(
            &paths,
            RepoSubcommand::Remove {
                alias: "ghost".to_string(),
            },
            &mut ui,
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No repository registered as 'ghost'"));
    }

    #[test]
    fn list_empty_registry() {
        let temp = TempDir::new().unwrap();
        let paths = GignrPaths::new(temp.path());
        let mut ui = MockUI::new();

        run(&paths, RepoSubcommand::List, &mut ui);

        assert!(ui.has_message("No custom repositories"));
    }
}
