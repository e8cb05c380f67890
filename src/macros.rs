// src/macros.rs
//! `declare_env!` — a plain struct of resolved values backed by a declaration

/// Declare a struct whose fields are environment variables.
///
/// Each field's kind follows its Rust type (`String`, `i64`, `f64`, `bool`);
/// the optional `= { ... }` block lists [`Variable`](crate::Variable) builder
/// calls such as `default`, `help` and `required`.
///
/// ```
/// use declared_env::{declare_env, MapEnv};
///
/// declare_env! {
///     #[derive(Debug)]
///     pub struct Server("FOO") {
///         pub host: String = { default: "localhost", help: "bind address" },
///         pub port: i64,
///     }
/// }
///
/// let env = MapEnv::new().with("FOO_PORT", "8080");
/// let server = Server::from_source(env).unwrap();
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// ```
#[macro_export]
macro_rules! declare_env {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($prefix:literal) {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= { $($opt:ident : $val:expr),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Registration list of every field
            pub fn declaration() -> $crate::DeclarationBuilder {
                $crate::DeclarationBuilder::new(Self::PREFIX)
                    $(
                        .var(
                            stringify!($field),
                            $crate::Variable::of::<$ty>() $($( .$opt($val) )*)?,
                        )
                    )*
            }

            /// Validate the process environment and read every field
            pub fn from_env() -> ::std::result::Result<Self, $crate::EnvError> {
                Self::from_source($crate::SystemEnv)
            }

            pub fn from_source<E: $crate::ReadEnv>(
                env: E,
            ) -> ::std::result::Result<Self, $crate::EnvError> {
                let declaration = Self::declaration().construct(env)?;
                Ok(Self {
                    $( $field: declaration.get::<$ty>(stringify!($field))?, )*
                })
            }

            pub fn help_text() -> ::std::string::String {
                Self::declaration().declare($crate::SystemEnv).help_text()
            }
        }
    };
}
