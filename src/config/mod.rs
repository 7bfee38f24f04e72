//! Configuration for gignr.
//!
//! - Schema definitions in [`schema`]
//! - File loading and saving in [`loader`]
//! - The custom repository registry in [`repositories`]
//! - State directory layout in [`paths`]
//!
//! # Example
//!
//! ```
//! use gignr::config::{load_config, GignrPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let paths = GignrPaths::new(temp.path());
//! fs::write(
//!     paths.config_file(),
//!     "repositories:\n  work: https://github.com/acme/gitignores\n",
//! )
//! .unwrap();
//!
//! let config = load_config(&paths.config_file()).unwrap();
//! assert!(config.repositories.contains("work"));
//! ```

pub mod loader;
pub mod paths;
pub mod repositories;
pub mod schema;

pub use loader::{load_config, parse_config, save_config};
pub use paths::{GignrPaths, STATE_DIR_NAME};
pub use repositories::CustomRepositories;
pub use schema::{GignrConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
