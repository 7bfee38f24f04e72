//! Local template store.
//!
//! Unprefixed references (`gignr create my-stack`) are read from here; the
//! `save`, `list` and `remove` commands manage it.

pub mod local;

pub use local::{validate_template_name, LocalStore};
