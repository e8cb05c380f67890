// src/enums.rs
//! Public enum types used throughout the crate
//!
//! The closed set of variable kinds, the resolved value they produce and the
//! lifecycle states of a declaration.

use std::fmt;

use serde::Deserialize;

use crate::convert;

/// Type of a declared variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl VariableKind {
    /// Convert a raw environment string into a value of this kind.
    ///
    /// The error is the converter's message, without the key.
    pub fn convert(self, raw: &str) -> Result<Value, String> {
        match self {
            VariableKind::String => Ok(Value::String(convert::to_string(raw))),
            VariableKind::Integer => convert::to_integer(raw).map(Value::Integer),
            VariableKind::Float => convert::to_float(raw).map(Value::Float),
            VariableKind::Boolean => convert::to_boolean(raw).map(Value::Boolean),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::String => "string",
            VariableKind::Integer => "integer",
            VariableKind::Float => "float",
            VariableKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved, typed value of a variable
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> VariableKind {
        match self {
            Value::String(_) => VariableKind::String,
            Value::Integer(_) => VariableKind::Integer,
            Value::Float(_) => VariableKind::Float,
            Value::Boolean(_) => VariableKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
        }
    }
}

/// Rust types a resolved [`Value`] can be read back as
pub trait FromValue: Sized {
    /// Variable kind producing this type
    const KIND: VariableKind;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const KIND: VariableKind = VariableKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for i64 {
    const KIND: VariableKind = VariableKind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const KIND: VariableKind = VariableKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const KIND: VariableKind = VariableKind::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

/// Lifecycle of a [`crate::Declaration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Declared, nothing resolved yet
    Uninitialized,
    /// Validation in progress
    Validating,
    /// Every variable resolved
    Valid,
    /// At least one variable failed; terminal
    Invalid,
}
