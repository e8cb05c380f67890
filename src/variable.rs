// src/variable.rs
//! Typed variable descriptors
//!
//! A [`Variable`] describes one expected environment key: its kind,
//! requiredness, default and help text. It only gets a key once it is
//! attached to a prefix, which turns it into a [`BoundVariable`]; an
//! unattached variable has no key to read or render.

use std::env::VarError;
use std::fmt;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::consts::{HELP_KEY_WIDTH, KEY_SEPARATOR};
use crate::enums::{FromValue, Value, VariableKind};
use crate::error::VariableError;
use crate::source::ReadEnv;

/// Environment key for `field` inside a group with `prefix`: `PREFIX_FIELD`
pub fn env_key(prefix: &str, field: &str) -> String {
    format!(
        "{}{}{}",
        prefix.to_uppercase(),
        KEY_SEPARATOR,
        field.to_uppercase()
    )
}

/// Declaration of one expected environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    kind: VariableKind,
    required: bool,
    default: Option<String>,
    help: Option<String>,
}

impl Variable {
    /// Required variable of `kind`, no default, no help text
    pub fn new(kind: VariableKind) -> Self {
        Self {
            kind,
            required: true,
            default: None,
            help: None,
        }
    }

    pub fn string() -> Self {
        Self::new(VariableKind::String)
    }

    pub fn integer() -> Self {
        Self::new(VariableKind::Integer)
    }

    pub fn float() -> Self {
        Self::new(VariableKind::Float)
    }

    pub fn boolean() -> Self {
        Self::new(VariableKind::Boolean)
    }

    /// Variable whose kind matches the Rust type `T`
    pub fn of<T: FromValue>() -> Self {
        Self::new(T::KIND)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Default used when the key is absent.
    ///
    /// Environment values are strings, so the default is stored in its
    /// `Display` form: `default(42)` and `default("42")` are the same.
    pub fn default(mut self, value: impl fmt::Display) -> Self {
        self.default = Some(value.to_string());
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    // An empty default counts as no default.
    fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Attach to a group prefix under `field`, fixing the environment key
    pub fn attach(self, prefix: &str, field: impl Into<String>) -> BoundVariable {
        let field = field.into();
        BoundVariable {
            key: env_key(prefix, &field),
            field,
            variable: self,
            resolved: OnceCell::new(),
        }
    }
}

/// A [`Variable`] attached to a prefix, with its resolved value cache
#[derive(Debug)]
pub struct BoundVariable {
    field: String,
    key: String,
    variable: Variable,
    resolved: OnceCell<Value>,
}

impl BoundVariable {
    pub fn field_name(&self) -> &str {
        &self.field
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn kind(&self) -> VariableKind {
        self.variable.kind
    }

    /// Raw string from `env`, falling back to the default.
    ///
    /// A required variable whose raw value is absent or empty is
    /// [`VariableError::Missing`]; an optional one resolves to `""`.
    pub fn raw_value<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<String, VariableError> {
        let raw = match env.var(&self.key) {
            Ok(value) => value,
            Err(VarError::NotPresent) => self.variable.default.clone().unwrap_or_default(),
            Err(err @ VarError::NotUnicode(_)) => {
                return Err(VariableError::invalid(&self.key, err.to_string()))
            }
        };

        if self.variable.required && raw.is_empty() {
            return Err(VariableError::missing(&self.key));
        }
        Ok(raw)
    }

    /// Resolved value, converted on first success and cached afterwards.
    ///
    /// Later calls return the cached value without reading `env` again.
    pub fn typed_value<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<&Value, VariableError> {
        if let Some(value) = self.resolved.get() {
            return Ok(value);
        }

        let raw = self.raw_value(env)?;
        let value = self
            .variable
            .kind
            .convert(&raw)
            .map_err(|message| VariableError::invalid(&self.key, message))?;

        debug!(key = %self.key, kind = %self.variable.kind, "resolved variable");
        Ok(self.resolved.get_or_init(|| value))
    }

    /// Cached value, if already resolved
    pub fn cached(&self) -> Option<&Value> {
        self.resolved.get()
    }

    /// `KEY` padded to the help column, then `[help, ]required|default=<d>`
    pub fn help_line(&self) -> String {
        let requirement = if self.variable.required && !self.variable.has_default() {
            "required".to_string()
        } else {
            format!("default={}", self.variable.default.as_deref().unwrap_or(""))
        };

        let mut parts: Vec<&str> = Vec::with_capacity(2);
        if let Some(help) = self.variable.help.as_deref().filter(|h| !h.is_empty()) {
            parts.push(help);
        }
        parts.push(&requirement);

        format!(
            "{:<width$}{}",
            self.key,
            parts.join(", "),
            width = HELP_KEY_WIDTH
        )
    }
}

impl fmt::Display for BoundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.key)
    }
}
