//! GitHub contents API client.
//!
//! Lists a repository directory with
//! `GET {api}/repos/{owner}/{repo}/contents/{path}` and downloads files from
//! the `download_url` each entry carries.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{TemplateCatalog, TemplateDescriptor};
use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::source::SourceBinding;

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOptions {
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Token sent as a bearer credential, if any.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One entry of a contents listing.
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    download_url: Option<String>,
}

/// Fetches template listings and files from GitHub.
pub struct GitHubClient {
    client: Client,
    options: ApiOptions,
}

impl GitHubClient {
    /// Create a client with the given settings.
    pub fn new(options: ApiOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gignr/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, options })
    }

    /// The settings this client was built with.
    pub fn options(&self) -> &ApiOptions {
        &self.options
    }

    /// URL of the contents listing for `binding`.
    pub fn contents_url(&self, binding: &SourceBinding) -> String {
        let base = self.options.base_url.trim_end_matches('/');
        let mut url = format!(
            "{}/repos/{}/{}/contents",
            base, binding.owner, binding.repository
        );
        let path = binding.path.trim_matches('/');
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }
        url
    }

    fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        let request = self.client.get(url);
        match &self.options.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl TemplateCatalog for GitHubClient {
    fn list_templates(&self, binding: &SourceBinding) -> Result<Vec<TemplateDescriptor>> {
        let url = self.contents_url(binding);
        tracing::debug!("Listing templates at {}", url);

        let response = self
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        let entries: Vec<ContentEntry> = response
            .json()
            .with_context(|| format!("Unexpected listing format from {}", url))?;

        let descriptors: Vec<TemplateDescriptor> = entries
            .into_iter()
            .filter(|entry| entry.kind != "dir")
            .filter_map(|entry| {
                entry
                    .download_url
                    .map(|download_url| TemplateDescriptor::new(entry.name, download_url))
            })
            .collect();

        tracing::debug!("{} has {} downloadable entries", binding, descriptors.len());
        Ok(descriptors)
    }

    fn download(&self, descriptor: &TemplateDescriptor) -> Result<String> {
        tracing::debug!("Downloading {}", descriptor.download_url);

        let response = self.get(&descriptor.download_url).send()?;

        if !response.status().is_success() {
            bail!(
                "HTTP {} fetching {}",
                response.status(),
                descriptor.download_url
            );
        }

        Ok(response.text()?)
    }
}
