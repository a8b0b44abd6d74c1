//! Site manifest and build configuration resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    deploy::{DeploymentTarget, PagesDeployment},
    env::BuildMode,
    error::{CoreError, Result},
    integrations::{default_integrations, Integration},
};

/// How the build output is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain files only; no server runtime required at serve time.
    #[default]
    Static,

    /// Rendered on demand by a server runtime.
    Server,

    /// Static pages with selected server-rendered routes.
    Hybrid,
}

/// Site identity and deployment coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Account that owns the Pages deployment.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository the site is published from.
    #[serde(default = "default_repo")]
    pub repo: String,
}

/// Build output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Directory name for generated assets, relative to the output root.
    #[serde(default = "default_assets_dir")]
    pub assets: String,
}

/// Site manifest.
///
/// Every field is defaulted, so an absent or empty manifest resolves to the
/// site's standard deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Deployment coordinates.
    #[serde(default)]
    pub site: SiteSettings,

    /// Build output settings.
    #[serde(default)]
    pub build: BuildSettings,

    /// Integrations enabled for the build, in application order.
    #[serde(default = "default_integrations")]
    pub integrations: Vec<Integration>,

    /// Output mode handed to the build tool.
    #[serde(default)]
    pub output: OutputMode,
}

// Default value functions
fn default_owner() -> String {
    "kellytom".to_string()
}

fn default_repo() -> String {
    "Base-Frank1".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            assets: default_assets_dir(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            site: SiteSettings::default(),
            build: BuildSettings::default(),
            integrations: default_integrations(),
            output: OutputMode::default(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::manifest(format!(
                "Manifest file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let manifest: Manifest = toml::from_str(&content).map_err(|e| {
            CoreError::manifest_with_source(
                format!("Failed to parse manifest file: {}", path.display()),
                e,
            )
        })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no manifest file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load a manifest using the config crate for environment layering.
    ///
    /// Values from `SITEPLAN__`-prefixed environment variables override the
    /// file, e.g. `SITEPLAN__SITE__REPO`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SITEPLAN").separator("__"))
            .build()?;

        let manifest: Manifest = settings.try_deserialize()?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the manifest.
    fn validate(&self) -> Result<()> {
        if self.site.owner.is_empty() {
            return Err(CoreError::manifest("site.owner cannot be empty"));
        }

        if self.site.repo.is_empty() {
            return Err(CoreError::manifest("site.repo cannot be empty"));
        }

        for (field, value) in [("site.owner", &self.site.owner), ("site.repo", &self.site.repo)] {
            if value.contains('/') || value.contains(char::is_whitespace) {
                return Err(CoreError::manifest(format!(
                    "{field} must be a bare name, got {value:?}"
                )));
            }
        }

        if self.integrations.is_empty() {
            return Err(CoreError::manifest(
                "at least one integration must be enabled",
            ));
        }

        if self.build.assets.is_empty() {
            return Err(CoreError::manifest("build.assets cannot be empty"));
        }

        if self.build.assets.contains('/') || self.build.assets.contains('\\') {
            return Err(CoreError::manifest(
                "build.assets must be a bare directory name",
            ));
        }

        // Pages hosts are always lowercase
        if self.site.owner.chars().any(|c| c.is_ascii_uppercase()) {
            tracing::warn!(owner = %self.site.owner, "site.owner contains uppercase characters");
        }

        Ok(())
    }

    /// Deployment coordinates derived from the site settings.
    #[must_use]
    pub fn deployment(&self) -> PagesDeployment {
        PagesDeployment::new(&self.site.owner, &self.site.repo)
    }

    /// Resolve the build configuration for a build mode.
    ///
    /// Resolution is a pure function of the manifest and the mode: the same
    /// inputs always produce the same record.
    #[must_use]
    pub fn resolve(&self, mode: BuildMode) -> BuildConfiguration {
        let deployment = self.deployment().target(mode);
        tracing::debug!(%mode, hosted = deployment.is_hosted(), "resolved build configuration");

        BuildConfiguration {
            mode,
            deployment,
            output: self.output,
            integrations: self.integrations.clone(),
            build: self.build.clone(),
        }
    }
}

/// Resolved build configuration, handed to the build tool.
///
/// Constructed once per build invocation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Mode the configuration was resolved for.
    pub mode: BuildMode,

    /// Where the built site will be served from.
    pub deployment: DeploymentTarget,

    /// Output mode.
    pub output: OutputMode,

    /// Integrations in application order.
    pub integrations: Vec<Integration>,

    /// Build output settings.
    pub build: BuildSettings,
}

impl BuildConfiguration {
    /// Whether this configuration targets the hosted deployment.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    /// Absolute site URL, when hosted.
    #[must_use]
    pub fn site_url(&self) -> Option<&str> {
        self.deployment.site_url()
    }

    /// Base path prefix, when hosted.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.deployment.base_path()
    }

    /// Flatten into the document shape the build tool consumes.
    #[must_use]
    pub fn document(&self) -> ConfigDocument {
        ConfigDocument {
            site: self.site_url().map(str::to_string),
            base: self.base_path().map(str::to_string),
            output: self.output,
            integrations: self.integrations.clone(),
            build: self.build.clone(),
        }
    }

    /// Render the configuration document as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.document())?)
    }

    /// Render the configuration document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }
}

/// Flat configuration document in the shape the build tool consumes.
///
/// `site` and `base` are emitted together for hosted deployments and omitted
/// together for local ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Absolute site URL, absent for local builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Base path prefix, absent for local builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Output mode.
    pub output: OutputMode,

    /// Integrations in application order.
    pub integrations: Vec<Integration>,

    /// Build output settings.
    pub build: BuildSettings,
}
