//! Siteplan Core Library
//!
//! Core types, manifest handling, and build configuration resolution for
//! Siteplan. The crate models a static site's build configuration as a pure
//! resolution step: deployment coordinates plus a build mode in, an
//! immutable configuration record out.

pub mod config;
pub mod deploy;
pub mod env;
pub mod error;
pub mod integrations;

pub use config::{
    BuildConfiguration, BuildSettings, ConfigDocument, Manifest, OutputMode, SiteSettings,
};
pub use deploy::{DeploymentTarget, PagesDeployment};
pub use env::{BuildMode, BUILD_ENV_VAR};
pub use error::{CoreError, Result};
pub use integrations::{default_integrations, Integration};
