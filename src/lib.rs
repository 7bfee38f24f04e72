//! gignr - Build `.gitignore` files by merging templates.
//!
//! gignr takes template references such as `gh:Go`, `ghg:macOS`, `tt:rust`
//! or a bare local name, fetches each one in order, and writes their
//! concatenation, each under a banner, to `.gitignore`.
//!
//! # Modules
//!
//! - [`assembly`] - Resolution policy, banners, concatenation and output
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - State directory, `config.yml` and custom repositories
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Remote template listing and download
//! - [`source`] - Template references, prefixes and source bindings
//! - [`store`] - Local template store
//! - [`ui`] - Console output, spinners and prompts
//!
//! # Example
//!
//! ```
//! use gignr::source::{SourcePrefix, TemplateReference};
//!
//! let reference = TemplateReference::parse("tt:rust");
//! assert_eq!(reference.prefix(), Some("tt"));
//! assert_eq!(reference.name(), "rust");
//! assert_eq!(SourcePrefix::parse("tt"), SourcePrefix::Tt);
//! ```
//!
//! For end-to-end runs against a mocked GitHub API, see the integration tests.

pub mod assembly;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod source;
pub mod store;
pub mod ui;

pub use error::{GignrError, Result};
