//! Configuration file schema.

use serde::{Deserialize, Serialize};

use super::repositories::CustomRepositories;

/// Default GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of `~/.gignr/config.yml`.
///
/// ```yaml
/// api_url: https://api.github.com
/// timeout: 30
/// repositories:
///   work: https://github.com/acme/gitignores
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GignrConfig {
    /// Base URL of the GitHub API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Custom repositories usable as prefixes.
    #[serde(default, skip_serializing_if = "CustomRepositories::is_empty")]
    pub repositories: CustomRepositories,
}

impl GignrConfig {
    /// The API base URL, falling back to [`DEFAULT_API_URL`].
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// The request timeout, falling back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
