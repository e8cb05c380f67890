// src/lib.rs
//! declared-env — declare the environment a program expects, validate it at startup
//!
//! Features:
//! - Typed variables: string, integer, float, boolean
//! - `PREFIX_FIELD` key derivation from one group prefix
//! - Aggregated validation: every misconfigured variable reported at once
//! - Fatal signal with a fixed exit status (88) for the outer application
//! - Help output for documentation
//!
//! ```
//! use declared_env::{DeclarationBuilder, MapEnv, Variable};
//!
//! let env = MapEnv::new().with("FOO_PORT", "8080");
//! let declaration = DeclarationBuilder::new("foo")
//!     .var("host", Variable::string().default("localhost"))
//!     .var("port", Variable::integer())
//!     .construct(env)
//!     .unwrap();
//!
//! assert_eq!(declaration.get::<String>("host").unwrap(), "localhost");
//! assert_eq!(declaration.get::<i64>("port").unwrap(), 8080);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod consts;
pub mod convert;
pub mod declaration;
pub mod enums;
pub mod error;
pub mod source;
pub mod variable;

mod macros;

// Re-export everything users need at the crate root
pub use config::Manifest;
pub use declaration::{Declaration, DeclarationBuilder};
pub use enums::{FromValue, State, Value, VariableKind};
pub use error::{DeclaredEnvironmentExit, EnvError, Result, VariableError};
pub use source::{MapEnv, ReadEnv, SystemEnv};
pub use variable::{env_key, BoundVariable, Variable};
