// src/config/defaults.rs
use std::path::PathBuf;

use crate::source::{ReadEnv, SystemEnv};

/// Manifest read when [`MANIFEST_PATH_ENV`] is unset
pub const DEFAULT_MANIFEST_PATH: &str = "declared-env.toml";

/// Environment key overriding the manifest location
pub const MANIFEST_PATH_ENV: &str = "DECLARED_ENV_MANIFEST";

pub fn manifest_path() -> PathBuf {
    manifest_path_from(&SystemEnv)
}

/// Manifest location as seen by `env`
pub fn manifest_path_from<E: ReadEnv + ?Sized>(env: &E) -> PathBuf {
    env.var(MANIFEST_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_MANIFEST_PATH.to_string())
        .into()
}

pub(super) fn default_required() -> bool {
    true
}
