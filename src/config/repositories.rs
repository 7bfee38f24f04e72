//! Custom repository registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-registered template repositories, keyed by alias.
///
/// Loaded once per run and handed to the source resolver explicitly.
/// Aliases are unique; iteration is in alias order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomRepositories {
    entries: BTreeMap<String, String>,
}

impl CustomRepositories {
    /// Look up the repository URL registered under `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// Register or replace an alias. Returns the previous URL, if any.
    pub fn insert(&mut self, alias: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.entries.insert(alias.into(), url.into())
    }

    /// Remove an alias. Returns the URL it pointed to.
    pub fn remove(&mut self, alias: &str) -> Option<String> {
        self.entries.remove(alias)
    }

    /// Whether `alias` is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Iterate over `(alias, url)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, u)| (a.as_str(), u.as_str()))
    }

    /// Number of registered repositories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no repositories are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
