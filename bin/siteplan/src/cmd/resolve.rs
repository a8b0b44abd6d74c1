//! Resolve command - produce the build configuration for an environment

use std::path::Path;

use color_eyre::eyre::{bail, Result, WrapErr};
use siteplan_core::{BuildMode, Manifest};

/// Run the resolve command.
///
/// Loads the manifest (defaults when the file is absent), determines the
/// build mode, and prints the configuration document for the build tool.
pub fn run(
    manifest_path: &Path,
    production: bool,
    env_override: Option<&str>,
    format: &str,
) -> Result<()> {
    let manifest =
        Manifest::load_or_default(manifest_path).wrap_err("Failed to load manifest")?;

    let mode = if production {
        BuildMode::Production
    } else if let Some(signal) = env_override {
        BuildMode::from_signal(Some(signal))
    } else {
        BuildMode::from_env()
    };

    tracing::info!(?manifest_path, %mode, format, "Resolving build configuration");

    let config = manifest.resolve(mode);

    let rendered = match format {
        "toml" => config.to_toml_string()?,
        "json" => config.to_json_string()?,
        other => bail!("Unknown output format: {other} (expected toml or json)"),
    };

    println!("{rendered}");

    Ok(())
}
