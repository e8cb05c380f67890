// src/bin/declared_env_check.rs
//! declared-env-check — validate the process environment against a manifest
//!
//! Without MANIFEST the path comes from `DECLARED_ENV_MANIFEST`, then
//! `declared-env.toml`. Exits 88 when the environment is misconfigured.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use declared_env::config::{manifest_path, Manifest};
use declared_env::SystemEnv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "declared-env-check",
    version,
    about = "Validate the process environment against a declaration manifest"
)]
struct Args {
    /// Print one help line per declared variable and exit.
    #[arg(long)]
    help_vars: bool,
    /// Manifest to load (defaults to `$DECLARED_ENV_MANIFEST`, then `declared-env.toml`).
    #[arg(value_name = "MANIFEST")]
    manifest: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.manifest.unwrap_or_else(manifest_path);
    let manifest = Manifest::from_path(&path)
        .with_context(|| format!("failed to load manifest {}", path.display()))?;

    if args.help_vars {
        println!("{}", manifest.to_builder().declare(SystemEnv).help_text());
        return Ok(ExitCode::SUCCESS);
    }

    match manifest.to_builder().from_env() {
        Ok(declaration) => {
            info!(
                prefix = %declaration.prefix(),
                variables = declaration.variables().len(),
                "environment OK"
            );
            Ok(ExitCode::SUCCESS)
        }
        // The report has already been logged by the declaration.
        Err(exit) => Ok(ExitCode::from(exit.status() as u8)),
    }
}
