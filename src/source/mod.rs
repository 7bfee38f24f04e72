//! Template reference parsing and source resolution.
//!
//! A command-line argument such as `gh:Go` becomes a [`TemplateReference`];
//! its prefix becomes a [`SourcePrefix`], which [`resolve`] turns into the
//! [`SourceBinding`] the fetcher lists.
//!
//! # Example
//!
//! ```
//! use gignr::config::CustomRepositories;
//! use gignr::source::{resolve, SourcePrefix, TemplateReference};
//!
//! let reference = TemplateReference::parse("ghg:macOS");
//! let prefix = SourcePrefix::parse(reference.prefix().unwrap());
//! let binding = resolve(&prefix, &CustomRepositories::default()).unwrap();
//!
//! assert_eq!(binding.owner, "github");
//! assert_eq!(binding.path, "Global");
//! assert_eq!(reference.name(), "macOS");
//! ```

pub mod binding;
pub mod prefix;
pub mod reference;

pub use binding::{parse_repository_url, resolve, SourceBinding};
pub use prefix::{SourcePrefix, BUILTIN_PREFIXES};
pub use reference::{TemplateReference, PREFIX_SEPARATOR};

/// Banner label for templates read from the local store.
pub const LOCAL_SOURCE_LABEL: &str = "LOCAL";
