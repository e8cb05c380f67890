// src/config/mod.rs
//! Declaration manifests
//!
//! A TOML file can stand in for code-level declarations: one prefix plus a
//! table of variables. Used by the `declared-env-check` binary.

pub use defaults::{manifest_path, manifest_path_from, DEFAULT_MANIFEST_PATH, MANIFEST_PATH_ENV};
pub use manifest::{load, load_from, DefaultValue, Manifest, VariableSpec};

mod defaults;
mod manifest;
