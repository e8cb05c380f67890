//! tests/manifest_tests.rs

mod common;
use common::setup;

use std::fs;

use declared_env::config::{DefaultValue, Manifest};
use declared_env::{EnvError, MapEnv, VariableKind};
use tempfile::tempdir;

const SERVER_MANIFEST: &str = r#"
prefix = "FOO"

[variables.host]
kind = "string"
default = "localhost"
help = "bind address"

[variables.port]
kind = "integer"

[variables.debug]
kind = "boolean"
required = false
default = true

[variables.ratio]
kind = "float"
default = 3.15
"#;

#[test]
fn manifest_parses_variables() {
    setup();
    let manifest = Manifest::from_toml_str(SERVER_MANIFEST).unwrap();
    assert_eq!(manifest.prefix, "FOO");
    assert_eq!(manifest.variables.len(), 4);

    let port = &manifest.variables["port"];
    assert_eq!(port.kind, VariableKind::Integer);
    assert!(port.required);
    assert_eq!(port.default, None);

    let debug = &manifest.variables["debug"];
    assert!(!debug.required);
    assert_eq!(debug.default, Some(DefaultValue::Boolean(true)));
    assert_eq!(
        manifest.variables["ratio"].default,
        Some(DefaultValue::Float(3.15))
    );
}

#[test]
fn manifest_builds_a_working_declaration() {
    let manifest = Manifest::from_toml_str(SERVER_MANIFEST).unwrap();
    let declaration = manifest
        .to_builder()
        .construct(MapEnv::new().with("FOO_PORT", "8080"))
        .unwrap();

    assert_eq!(declaration.get::<String>("host").unwrap(), "localhost");
    assert_eq!(declaration.get::<i64>("port").unwrap(), 8080);
    assert!(declaration.get::<bool>("debug").unwrap());
    assert_eq!(declaration.get::<f64>("ratio").unwrap(), 3.15);

    assert_eq!(
        declaration.help_text(),
        [
            "FOO_DEBUG           default=true",
            "FOO_HOST            bind address, default=localhost",
            "FOO_PORT            required",
            "FOO_RATIO           default=3.15",
        ]
        .join("\n")
    );
}

#[test]
fn toml_native_and_string_defaults_match() {
    let native = Manifest::from_toml_str(
        "prefix = \"FOO\"\n[variables.port]\nkind = \"integer\"\ndefault = 42\n",
    )
    .unwrap();
    let text = Manifest::from_toml_str(
        "prefix = \"FOO\"\n[variables.port]\nkind = \"integer\"\ndefault = \"42\"\n",
    )
    .unwrap();

    let native = native.to_builder().construct(MapEnv::new()).unwrap();
    let text = text.to_builder().construct(MapEnv::new()).unwrap();
    assert_eq!(
        native.get::<i64>("port").unwrap(),
        text.get::<i64>("port").unwrap()
    );
}

#[test]
fn empty_prefix_is_rejected() {
    let err = Manifest::from_toml_str("prefix = \"\"\n").unwrap_err();
    assert!(matches!(err, EnvError::EmptyPrefix));
}

#[test]
fn unknown_keys_and_kinds_are_rejected() {
    let unknown_key = "prefix = \"FOO\"\n[variables.port]\nkind = \"integer\"\nrequred = false\n";
    assert!(matches!(
        Manifest::from_toml_str(unknown_key),
        Err(EnvError::Manifest(_))
    ));

    let unknown_kind = "prefix = \"FOO\"\n[variables.port]\nkind = \"json\"\n";
    assert!(matches!(
        Manifest::from_toml_str(unknown_kind),
        Err(EnvError::Manifest(_))
    ));
}

#[test]
fn manifest_is_read_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("declared-env.toml");
    fs::write(&path, SERVER_MANIFEST).unwrap();

    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.variables.len(), 4);

    let missing = Manifest::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, EnvError::Io(_)));
}

#[test]
fn load_follows_manifest_path_variable() {
    use declared_env::config::{load_from, manifest_path_from, MANIFEST_PATH_ENV};

    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "prefix = \"APP\"\n[variables.mode]\nkind = \"string\"\n").unwrap();

    let env = MapEnv::new().with(MANIFEST_PATH_ENV, path.to_str().unwrap());
    assert_eq!(manifest_path_from(&env), path);

    let manifest = load_from(&env).unwrap();
    assert_eq!(manifest.prefix, "APP");
    assert_eq!(manifest.variables["mode"].kind, VariableKind::String);
}

#[test]
fn manifest_path_defaults_without_variable() {
    use declared_env::config::{manifest_path_from, DEFAULT_MANIFEST_PATH};

    assert_eq!(
        manifest_path_from(&MapEnv::new()),
        std::path::PathBuf::from(DEFAULT_MANIFEST_PATH)
    );
}
