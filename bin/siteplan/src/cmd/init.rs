//! Init command - scaffold a manifest file

use std::{fs, path::Path};

use color_eyre::eyre::{bail, Result, WrapErr};

/// Manifest scaffold written by `siteplan init`.
const MANIFEST_TEMPLATE: &str = r#"# Siteplan manifest.
#
# Every field is optional; a missing field falls back to the site's standard
# deployment. Values can also be overridden with SITEPLAN__-prefixed
# environment variables, e.g. SITEPLAN__SITE__REPO.

output = "static"
integrations = ["react"]

[site]
owner = "kellytom"
repo = "Base-Frank1"

[build]
assets = "assets"
"#;

/// Run the init command.
///
/// Writes a manifest scaffold with the default deployment values.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Creating manifest");

    if path.exists() && !force {
        bail!(
            "Manifest already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
        }
    }

    fs::write(path, MANIFEST_TEMPLATE).wrap_err("Failed to write manifest")?;

    tracing::info!(?path, "Created manifest file");
    println!("Created: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use siteplan_core::Manifest;

    use super::*;

    #[test]
    fn test_scaffold_loads_as_default_manifest() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("siteplan.toml");

        run(&path, false).expect("init");

        let manifest = Manifest::load(&path).expect("load scaffold");
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("siteplan.toml");

        run(&path, false).expect("init");
        let result = run(&path, false);
        assert!(result.is_err());

        run(&path, true).expect("init --force");
    }
}
