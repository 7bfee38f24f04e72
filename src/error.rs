//! Error types for gignr operations.
//!
//! This module defines [`GignrError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GignrError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GignrError::Other`) for unexpected errors
//! - Only [`GignrError::ListingFailure`] aborts a `create` run; every other
//!   per-template error skips that template and the run continues

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gignr operations.
#[derive(Debug, Error)]
pub enum GignrError {
    /// The prefix matches neither a built-in source nor a custom repository.
    #[error("Unknown template prefix or missing repository: {prefix}")]
    UnknownPrefix { prefix: String },

    /// A custom repository URL does not name an owner and a repository.
    #[error("Invalid repository URL for '{alias}': {url}")]
    InvalidRepositoryUrl { alias: String, url: String },

    /// The remote directory listing could not be retrieved.
    #[error("Unable to fetch templates from {source_label}: {message}")]
    ListingFailure {
        source_label: String,
        message: String,
    },

    /// The listing succeeded but contains no matching template.
    #[error("Template {name} not found in {source_label}.")]
    TemplateNotFound { name: String, source_label: String },

    /// Downloading template content or reading a local template failed.
    #[error("Unable to fetch content for {reference}: {message}")]
    FetchFailure { reference: String, message: String },

    /// The assembled output could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    WriteFailure { path: PathBuf, message: String },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// A local template name cannot be stored.
    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    /// A local template with this name already exists.
    #[error("Local template '{name}' already exists (use --force to overwrite)")]
    LocalTemplateExists { name: String },

    /// No local template with this name.
    #[error("Local template '{name}' not found")]
    LocalTemplateNotFound { name: String },

    /// A custom repository alias collides with a built-in prefix.
    #[error("'{alias}' is a built-in prefix and cannot be used as a repository alias")]
    ReservedPrefix { alias: String },

    /// No custom repository registered under this alias.
    #[error("No repository registered as '{alias}'")]
    UnknownRepository { alias: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GignrError {
    /// Whether this error must abort an assembly run instead of skipping
    /// the current template.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ListingFailure { .. })
    }
}

/// Result type alias for gignr operations.
pub type Result<T> = std::result::Result<T, GignrError>;
