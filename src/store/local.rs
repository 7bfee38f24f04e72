//! Local template storage.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GignrError, Result};
use crate::fetch::TEMPLATE_SUFFIX;
use crate::source::PREFIX_SEPARATOR;

/// Templates saved on this machine, one `<name>.gitignore` file each.
///
/// Lookups ignore case so that `rust`, `Rust` and `RUST` find the same
/// template, matching how remote names are compared.
#[derive(Debug, Clone)]
pub struct LocalStore {
    /// Directory holding the template files.
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the store directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create template directory {:?}", self.root))?;
        Ok(())
    }

    /// Path a template with this exact name is stored at.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, TEMPLATE_SUFFIX))
    }

    /// Find the file backing `name`, ignoring case.
    fn locate(&self, name: &str) -> Result<Option<PathBuf>> {
        let exact = self.template_path(name);
        if exact.is_file() {
            return Ok(Some(exact));
        }

        if !self.root.is_dir() {
            return Ok(None);
        }

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if let Some(stem) = template_stem(&path) {
                if stem.to_lowercase() == name.to_lowercase() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Whether a template called `name` exists.
    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.locate(name)?.is_some())
    }

    /// Read a template's content.
    pub fn get(&self, name: &str) -> Result<String> {
        let path = self
            .locate(name)?
            .ok_or_else(|| GignrError::LocalTemplateNotFound {
                name: name.to_string(),
            })?;

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read local template {:?}", path))?;
        Ok(content)
    }

    /// Save `content` as template `name`, replacing any template of the same
    /// name regardless of case.
    pub fn save(&self, name: &str, content: &str) -> Result<PathBuf> {
        validate_template_name(name)?;
        self.ensure_dir()?;

        if let Some(existing) = self.locate(name)? {
            if existing != self.template_path(name) {
                fs::remove_file(&existing)?;
            }
        }

        let path = self.template_path(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write local template {:?}", path))?;

        tracing::debug!("Saved local template '{}' to {}", name, path.display());
        Ok(path)
    }

    /// Delete a template. Returns `false` if it did not exist.
    pub fn remove(&self, name: &str) -> Result<bool> {
        match self.locate(name)? {
            Some(path) => {
                fs::remove_file(&path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Names of all stored templates, sorted case-insensitively.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() {
                if let Some(stem) = template_stem(&path) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort_by_key(|n| n.to_lowercase());
        Ok(names)
    }
}

/// Template name for a stored file, or `None` if it is not a template.
fn template_stem(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(TEMPLATE_SUFFIX)?;
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}

/// Check that `name` can be stored and later referenced without a prefix.
pub fn validate_template_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name is empty")
    } else if name != name.trim() {
        Some("name has surrounding whitespace")
    } else if name.contains(PREFIX_SEPARATOR) {
        Some("':' separates a source prefix from a template name")
    } else if name.contains('/') || name.contains('\\') {
        Some("path separators are not allowed")
    } else if name == "." || name == ".." {
        Some("reserved name")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(GignrError::InvalidTemplateName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
