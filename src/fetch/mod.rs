//! Remote template listing and download.
//!
//! [`TemplateCatalog`] is the seam between assembly and the network. The
//! production implementation is [`GitHubClient`], which talks to the GitHub
//! contents API.

pub mod github;

pub use github::{ApiOptions, GitHubClient};

use anyhow::Result;
use serde::Deserialize;

use crate::source::SourceBinding;

/// Extension every remote template file carries.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateDescriptor {
    /// File name as stored, including extension.
    pub name: String,
    /// Where the raw file content can be downloaded.
    pub download_url: String,
}

impl TemplateDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }

    /// Whether this descriptor is the template `requested`.
    ///
    /// The file name must equal `requested + ".gitignore"`, ignoring case.
    pub fn matches(&self, requested: &str) -> bool {
        let expected = format!("{}{}", requested, TEMPLATE_SUFFIX);
        self.name.to_lowercase() == expected.to_lowercase()
    }

    /// Template name without the `.gitignore` suffix, if it has one.
    pub fn template_name(&self) -> Option<&str> {
        let split = self.name.len().checked_sub(TEMPLATE_SUFFIX.len())?;
        let (stem, suffix) = (self.name.get(..split)?, self.name.get(split..)?);
        if suffix.eq_ignore_ascii_case(TEMPLATE_SUFFIX) && !stem.is_empty() {
            Some(stem)
        } else {
            None
        }
    }
}

/// Find the first descriptor matching `requested`.
pub fn find_descriptor<'a>(
    descriptors: &'a [TemplateDescriptor],
    requested: &str,
) -> Option<&'a TemplateDescriptor> {
    descriptors.iter().find(|d| d.matches(requested))
}

/// A remote source of templates.
pub trait TemplateCatalog {
    /// List the files available at `binding`.
    fn list_templates(&self, binding: &SourceBinding) -> Result<Vec<TemplateDescriptor>>;

    /// Download the raw content of one listed template.
    fn download(&self, descriptor: &TemplateDescriptor) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case() {
        let descriptor = TemplateDescriptor::new("go.gitignore", "https://x/go");
        assert!(descriptor.matches("Go"));
        assert!(descriptor.matches("GO"));

        let upper = TemplateDescriptor::new("GO.GITIGNORE", "https://x/go");
        assert!(upper.matches("Go"));
    }

    #[test]
    fn requires_exact_name() {
        let descriptor = TemplateDescriptor::new("golang.gitignore", "https://x/golang");
        assert!(!descriptor.matches("Go"));

        let no_suffix = TemplateDescriptor::new("Go", "https://x/go");
        assert!(!no_suffix.matches("Go"));
    }

    #[test]
    fn find_returns_first_match() {
        let descriptors = vec![
            TemplateDescriptor::new("Golang.gitignore", "https://x/1"),
            TemplateDescriptor::new("Go.gitignore", "https://x/2"),
            TemplateDescriptor::new("go.gitignore", "https://x/3"),
        ];

        let found = find_descriptor(&descriptors, "go").unwrap();
        assert_eq!(found.download_url, "https://x/2");
    }

    #[test]
    fn find_returns_none_without_match() {
        let descriptors = vec![TemplateDescriptor::new("Rust.gitignore", "https://x/r")];
        assert!(find_descriptor(&descriptors, "Go").is_none());
        assert!(find_descriptor(&[], "Go").is_none());
    }

    #[test]
    fn template_name_strips_suffix() {
        assert_eq!(
            TemplateDescriptor::new("Rust.gitignore", "u").template_name(),
            Some("Rust")
        );
        assert_eq!(
            TemplateDescriptor::new("README.md", "u").template_name(),
            None
        );
        assert_eq!(
            TemplateDescriptor::new(".gitignore", "u").template_name(),
            None
        );
    }
}
