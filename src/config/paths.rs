//! State directory layout.

use std::path::{Path, PathBuf};

/// Name of the state directory under the user's home.
pub const STATE_DIR_NAME: &str = ".gignr";

/// Locations of gignr's on-disk state.
///
/// ```text
/// ~/.gignr/
/// ├── config.yml        # settings and custom repositories
/// └── templates/        # local templates, one <name>.gitignore each
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GignrPaths {
    root: PathBuf,
}

impl GignrPaths {
    /// Use an explicit state directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the state directory: an explicit override, else `~/.gignr`.
    pub fn discover(override_root: Option<&Path>) -> Self {
        match override_root {
            Some(root) => Self::new(root),
            None => Self::new(
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(STATE_DIR_NAME),
            ),
        }
    }

    /// The state directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `config.yml`.
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.yml")
    }

    /// Directory holding local templates.
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }
}
