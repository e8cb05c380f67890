// src/config/manifest.rs
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::defaults::{default_required, manifest_path, manifest_path_from};
use crate::declaration::DeclarationBuilder;
use crate::enums::VariableKind;
use crate::error::{EnvError, Result};
use crate::source::ReadEnv;
use crate::variable::Variable;

/// Parsed manifest file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub prefix: String,
    #[serde(default)]
    pub variables: BTreeMap<String, VariableSpec>,
}

/// One `[variables.<field>]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableSpec {
    pub kind: VariableKind,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    #[serde(default)]
    pub help: Option<String>,
}

/// A default written as any TOML scalar; stringified like a native default
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Boolean(v) => write!(f, "{v}"),
            DefaultValue::Integer(v) => write!(f, "{v}"),
            DefaultValue::Float(v) => write!(f, "{v}"),
            DefaultValue::String(v) => f.write_str(v),
        }
    }
}

impl VariableSpec {
    pub fn to_variable(&self) -> Variable {
        let mut variable = Variable::new(self.kind).required(self.required);
        if let Some(default) = &self.default {
            variable = variable.default(default);
        }
        if let Some(help) = &self.help {
            variable = variable.help(help.as_str());
        }
        variable
    }
}

impl Manifest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        if manifest.prefix.is_empty() {
            return Err(EnvError::EmptyPrefix);
        }
        Ok(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading declaration manifest");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Registration list equivalent to the manifest
    pub fn to_builder(&self) -> DeclarationBuilder {
        self.variables
            .iter()
            .fold(DeclarationBuilder::new(&self.prefix), |builder, (field, spec)| {
                builder.var(field, spec.to_variable())
            })
    }
}

/// Load the manifest named by [`super::MANIFEST_PATH_ENV`], or the default path
pub fn load() -> Result<Manifest> {
    Manifest::from_path(manifest_path())
}

/// [`load`] with the manifest location looked up in `env`
pub fn load_from<E: ReadEnv + ?Sized>(env: &E) -> Result<Manifest> {
    Manifest::from_path(manifest_path_from(env))
}
