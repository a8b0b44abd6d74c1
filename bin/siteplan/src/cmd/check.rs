//! Check command - validate the manifest and its resolutions

use std::path::Path;

use color_eyre::eyre::{bail, Result};
use siteplan_core::{BuildMode, Manifest};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the manifest and the configurations it resolves to.
pub fn run(manifest_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?manifest_path, strict, "Checking manifest");

    let mut result = ValidationResult::default();

    println!("Checking manifest...");
    let manifest = if manifest_path.exists() {
        match Manifest::load(manifest_path) {
            Ok(m) => {
                println!("  ✓ Manifest valid");
                Some(m)
            }
            Err(e) => {
                result.add_error(format!("Manifest error: {e}"));
                println!("  ✗ Manifest invalid: {e}");
                None
            }
        }
    } else {
        result.add_warning(format!(
            "Manifest file not found: {} (defaults apply)",
            manifest_path.display()
        ));
        println!("  ⚠ No manifest file, defaults apply");
        Some(Manifest::default())
    };

    if let Some(ref manifest) = manifest {
        println!("\nChecking resolutions...");
        check_resolutions(manifest, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Resolve both build modes and check the produced configurations.
fn check_resolutions(manifest: &Manifest, result: &mut ValidationResult) {
    let production = manifest.resolve(BuildMode::Production);

    match production.site_url() {
        Some(url) if url.starts_with("https://") => {
            println!("  ✓ Production site URL: {url}");
        }
        Some(url) => {
            result.add_warning(format!("Production site URL is not https: {url}"));
            println!("  ⚠ Production site URL is not https: {url}");
        }
        None => {
            result.add_error("Production resolution produced no site URL");
            println!("  ✗ Production resolution produced no site URL");
        }
    }

    if let Some(base) = production.base_path() {
        if base.starts_with('/') && base.ends_with('/') {
            println!("  ✓ Production base path: {base}");
        } else {
            result.add_error(format!(
                "Production base path must start and end with /: {base}"
            ));
            println!("  ✗ Malformed base path: {base}");
        }
    }

    let development = manifest.resolve(BuildMode::Development);
    if development.site_url().is_none() && development.base_path().is_none() {
        println!("  ✓ Development resolution stays local");
    } else {
        result.add_error("Development resolution must not set site or base");
        println!("  ✗ Development resolution is not local");
    }

    println!(
        "  ✓ Integrations: {}",
        manifest
            .integrations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
}
