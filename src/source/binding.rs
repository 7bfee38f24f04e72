//! Source resolution.
//!
//! Maps a [`SourcePrefix`] to the remote coordinates used to list templates.
//! Built-in prefixes always win; anything else must be a registered custom
//! repository.

use std::sync::LazyLock;

use regex::Regex;

use super::prefix::SourcePrefix;
use crate::config::CustomRepositories;
use crate::error::{GignrError, Result};

/// Remote coordinates of a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBinding {
    /// Owning account.
    pub owner: String,
    /// Repository name.
    pub repository: String,
    /// Directory inside the repository; empty means the root.
    pub path: String,
}

impl SourceBinding {
    /// Create a binding.
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for SourceBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}/{}", self.owner, self.repository)
        } else {
            write!(f, "{}/{}/{}", self.owner, self.repository, self.path)
        }
    }
}

static REPOSITORY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?://)?(?:www\.)?github\.com/|git@github\.com:)?([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$",
    )
    .expect("repository URL pattern is valid")
});

/// Extract `(owner, repository)` from a repository URL.
///
/// Accepts `https://github.com/owner/repo`, `github.com/owner/repo`,
/// `git@github.com:owner/repo.git` and the bare `owner/repo` form.
pub fn parse_repository_url(url: &str) -> Option<(String, String)> {
    let captures = REPOSITORY_URL.captures(url.trim())?;
    let owner = captures.get(1)?.as_str();
    let repository = captures.get(2)?.as_str();
    if owner.starts_with('.') || owner.to_lowercase().ends_with("github.com") {
        return None;
    }
    Some((owner.to_string(), repository.to_string()))
}

/// Resolve a prefix to the coordinates of its template source.
pub fn resolve(prefix: &SourcePrefix, repositories: &CustomRepositories) -> Result<SourceBinding> {
    match prefix {
        SourcePrefix::Gh | SourcePrefix::Ghg | SourcePrefix::Ghc | SourcePrefix::Tt => prefix
            .builtin_binding()
            .ok_or_else(|| GignrError::UnknownPrefix {
                prefix: prefix.token().to_string(),
            }),
        SourcePrefix::Custom(alias) => {
            let url = repositories
                .get(alias)
                .ok_or_else(|| GignrError::UnknownPrefix {
                    prefix: alias.clone(),
                })?;

            let (owner, repository) =
                parse_repository_url(url).ok_or_else(|| GignrError::InvalidRepositoryUrl {
                    alias: alias.clone(),
                    url: url.to_string(),
                })?;

            tracing::debug!("Resolved custom prefix '{}' to {}/{}", alias, owner, repository);
            Ok(SourceBinding::new(owner, repository, ""))
        }
    }
}
