// src/declaration.rs
//! Declaration groups — a prefix plus the variables declared under it
//!
//! A [`DeclarationBuilder`] registers variables by field name. Building it
//! attaches every variable to the prefix in field-name order, which is also
//! the order of validation, error reports and help output.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, error, warn};

use crate::enums::{FromValue, State, Value};
use crate::error::{DeclaredEnvironmentExit, EnvError, Result, VariableError};
use crate::source::{ReadEnv, SystemEnv};
use crate::variable::{BoundVariable, Variable};

/// Registration list for a [`Declaration`]
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    prefix: String,
    variables: BTreeMap<String, Variable>,
}

impl DeclarationBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Declare `field`; declaring the same field twice keeps the last one
    pub fn var(mut self, field: impl Into<String>, variable: Variable) -> Self {
        let field = field.into();
        if self.variables.insert(field.clone(), variable).is_some() {
            warn!(prefix = %self.prefix, field = %field, "field declared twice, keeping the last declaration");
        }
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Attach every variable without validating anything
    pub fn declare<E: ReadEnv>(self, env: E) -> Declaration<E> {
        let prefix = self.prefix;
        let variables: Vec<BoundVariable> = self
            .variables
            .into_iter()
            .map(|(field, variable)| variable.attach(&prefix, field))
            .collect();

        warn_on_shared_keys(&variables);

        Declaration {
            prefix,
            variables,
            env,
            state: State::Uninitialized,
        }
    }

    /// Attach and validate against `env`.
    ///
    /// On any failure the aggregated report is logged and the fatal
    /// [`DeclaredEnvironmentExit`] is returned; no partial declaration
    /// escapes.
    pub fn construct<E: ReadEnv>(
        self,
        env: E,
    ) -> std::result::Result<Declaration<E>, DeclaredEnvironmentExit> {
        let mut declaration = self.declare(env);
        let errors = declaration.validate();
        if errors.is_empty() {
            debug!(
                prefix = %declaration.prefix,
                variables = declaration.variables.len(),
                "environment declaration validated"
            );
            return Ok(declaration);
        }

        let exit = DeclaredEnvironmentExit::new(errors);
        error!("{exit}");
        Err(exit)
    }

    /// [`Self::construct`] against the process environment
    pub fn from_env(self) -> std::result::Result<Declaration, DeclaredEnvironmentExit> {
        self.construct(SystemEnv)
    }
}

/// A validated (or dry-run) group of bound variables
#[derive(Debug)]
pub struct Declaration<E = SystemEnv> {
    prefix: String,
    variables: Vec<BoundVariable>,
    env: E,
    state: State,
}

impl<E: ReadEnv> Declaration<E> {
    /// Resolve every variable in field-name order and collect the failures.
    ///
    /// Never short-circuits and never raises: an empty list means valid.
    pub fn validate(&mut self) -> Vec<VariableError> {
        self.state = State::Validating;

        let errors: Vec<VariableError> = self
            .variables
            .iter()
            .filter_map(|var| var.typed_value(&self.env).err())
            .collect();

        self.state = if errors.is_empty() {
            State::Valid
        } else {
            State::Invalid
        };
        errors
    }

    /// Resolved value of `field`, converted once and cached
    pub fn value(&self, field: &str) -> Result<&Value> {
        let var = self
            .variable(field)
            .ok_or_else(|| EnvError::UndeclaredField(field.to_owned()))?;
        Ok(var.typed_value(&self.env)?)
    }

    /// Resolved value of `field` as `T`
    pub fn get<T: FromValue>(&self, field: &str) -> Result<T> {
        let value = self.value(field)?;
        T::from_value(value).ok_or_else(|| EnvError::TypeMismatch {
            field: field.to_owned(),
            expected: T::KIND,
            found: value.kind(),
        })
    }
}

impl<E> Declaration<E> {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == State::Valid
    }

    /// Bound variables in field-name order
    pub fn variables(&self) -> &[BoundVariable] {
        &self.variables
    }

    pub fn variable(&self, field: &str) -> Option<&BoundVariable> {
        self.variables
            .binary_search_by(|var| var.field_name().cmp(field))
            .ok()
            .map(|idx| &self.variables[idx])
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// One help line per variable, newline-joined, field-name order
    pub fn help_text(&self) -> String {
        self.variables
            .iter()
            .map(BoundVariable::help_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Already resolved values keyed by environment key
    pub fn snapshot(&self) -> BTreeMap<&str, &Value> {
        self.variables
            .iter()
            .filter_map(|var| var.cached().map(|value| (var.key(), value)))
            .collect()
    }
}

// Fields differing only in case map to the same key; both keep reading it.
fn warn_on_shared_keys(variables: &[BoundVariable]) {
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for var in variables {
        if let Some(other) = claimed.insert(var.key(), var.field_name()) {
            warn!(
                key = %var.key(),
                first = %other,
                second = %var.field_name(),
                "two fields read the same environment key"
            );
        }
    }
}
