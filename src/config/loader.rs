//! Configuration file loading and saving.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::schema::GignrConfig;
use crate::error::{GignrError, Result};

/// Load `config.yml` from `path`.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(path: &Path) -> Result<GignrConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(GignrConfig::default());
        }
        Err(e) => return Err(GignrError::Io(e)),
    };

    parse_config(&content, path)
}

/// Parse YAML content into a [`GignrConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<GignrConfig> {
    if content.trim().is_empty() {
        return Ok(GignrConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GignrError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write `config` to `path`, creating the parent directory if needed.
pub fn save_config(path: &Path, config: &GignrConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    fs::write(path, yaml).with_context(|| format!("Failed to write config {:?}", path))?;

    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}
