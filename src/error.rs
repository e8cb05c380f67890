// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::consts::{EXIT_STATUS, MISSING_MESSAGE};
use crate::enums::VariableKind;

/// Failure of a single declared variable.
///
/// These are the only errors [`crate::Declaration::validate`] collects; the
/// `Display` form is the report line `<KEY>: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// Required variable absent from the environment and without default
    #[error("{key}: {message}", message = MISSING_MESSAGE)]
    Missing { key: String },

    /// Raw value present but rejected by the converter
    #[error("{key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl VariableError {
    pub fn missing(key: impl Into<String>) -> Self {
        VariableError::Missing { key: key.into() }
    }

    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        VariableError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Environment key the error refers to
    pub fn key(&self) -> &str {
        match self {
            VariableError::Missing { key } | VariableError::InvalidValue { key, .. } => key,
        }
    }

    /// Message without the key, e.g. `variable not set`
    pub fn message(&self) -> &str {
        match self {
            VariableError::Missing { .. } => MISSING_MESSAGE,
            VariableError::InvalidValue { message, .. } => message,
        }
    }
}

/// Fatal signal returned when a declaration fails validation.
///
/// Carries every individual error in field-name order. The outer application
/// is expected to turn it into a process exit with [`Self::status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Environment is not configured properly:\n{report}")]
pub struct DeclaredEnvironmentExit {
    errors: Vec<VariableError>,
    report: String,
}

impl DeclaredEnvironmentExit {
    pub fn new(errors: Vec<VariableError>) -> Self {
        let report = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Self { errors, report }
    }

    /// Process exit status, always [`EXIT_STATUS`]
    pub fn status(&self) -> i32 {
        EXIT_STATUS
    }

    pub fn errors(&self) -> &[VariableError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<VariableError> {
        self.errors
    }

    /// One `<KEY>: <message>` line per failing variable
    pub fn report(&self) -> &str {
        &self.report
    }
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error(transparent)]
    Misconfigured(#[from] DeclaredEnvironmentExit),

    #[error("field `{0}` is not declared")]
    UndeclaredField(String),

    #[error("field `{field}` holds a {found} value, not {expected}")]
    TypeMismatch {
        field: String,
        expected: VariableKind,
        found: VariableKind,
    },

    #[error("manifest declares an empty prefix")]
    EmptyPrefix,

    #[error("invalid manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvError {
    /// Exit status the outer application should use for this error
    pub fn status(&self) -> i32 {
        match self {
            EnvError::Misconfigured(exit) => exit.status(),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
