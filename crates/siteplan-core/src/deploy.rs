//! Deployment target resolution.
//!
//! A built site is served either from the local development server or from a
//! hosted URL prefix. The hosted variant carries the absolute site URL and
//! the base path together, so one is never set without the other.

use crate::env::BuildMode;

/// Where the built site will be served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentTarget {
    /// Local development; the build tool applies its own serving defaults.
    Local,

    /// Deployment behind a fixed URL prefix.
    Hosted {
        /// Absolute URL of the deployed site, ending in `/`.
        site_url: String,

        /// Path prefix under which all generated references are rooted,
        /// ending in `/`.
        base_path: String,
    },
}

impl DeploymentTarget {
    /// Absolute site URL, if the target is hosted.
    #[must_use]
    pub fn site_url(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Hosted { site_url, .. } => Some(site_url),
        }
    }

    /// Base path prefix, if the target is hosted.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        match self {
            Self::Local => None,
            Self::Hosted { base_path, .. } => Some(base_path),
        }
    }

    /// Whether the target is a hosted deployment.
    #[must_use]
    pub fn is_hosted(&self) -> bool {
        matches!(self, Self::Hosted { .. })
    }

    /// Root a site-relative path under the deployment base path.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        let base = self.base_path().unwrap_or("/");
        format!("{base}{}", path.trim_start_matches('/'))
    }
}

/// GitHub Pages project-site deployment coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesDeployment {
    /// Account that owns the Pages site.
    pub owner: String,

    /// Repository the site is published from.
    pub repo: String,
}

impl PagesDeployment {
    /// Create deployment coordinates for a project site.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Absolute URL the site is served from: `https://{owner}.github.io/{repo}/`.
    #[must_use]
    pub fn site_url(&self) -> String {
        format!("https://{}.github.io/{}/", self.owner, self.repo)
    }

    /// Path prefix the site is served under: `/{repo}/`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{}/", self.repo)
    }

    /// Resolve the deployment target for a build mode.
    ///
    /// Production builds are hosted; everything else stays local so the
    /// build tool falls back to its development defaults.
    #[must_use]
    pub fn target(&self, mode: BuildMode) -> DeploymentTarget {
        if mode.is_production() {
            DeploymentTarget::Hosted {
                site_url: self.site_url(),
                base_path: self.base_path(),
            }
        } else {
            DeploymentTarget::Local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment() -> PagesDeployment {
        PagesDeployment::new("kellytom", "Base-Frank1")
    }

    #[test]
    fn test_site_url_format() {
        assert_eq!(
            deployment().site_url(),
            "https://kellytom.github.io/Base-Frank1/"
        );
    }

    #[test]
    fn test_base_path_format() {
        assert_eq!(deployment().base_path(), "/Base-Frank1/");
    }

    #[test]
    fn test_production_target_is_hosted() {
        let target = deployment().target(BuildMode::Production);
        assert!(target.is_hosted());
        assert_eq!(
            target.site_url(),
            Some("https://kellytom.github.io/Base-Frank1/")
        );
        assert_eq!(target.base_path(), Some("/Base-Frank1/"));
    }

    #[test]
    fn test_development_target_is_local() {
        let target = deployment().target(BuildMode::Development);
        assert_eq!(target, DeploymentTarget::Local);
        assert_eq!(target.site_url(), None);
        assert_eq!(target.base_path(), None);
    }

    #[test]
    fn test_hosted_strings_end_with_slash() {
        let target = deployment().target(BuildMode::Production);
        assert!(target.site_url().expect("hosted").ends_with('/'));
        assert!(target.base_path().expect("hosted").ends_with('/'));
    }

    #[test]
    fn test_href_under_hosted_base() {
        let target = deployment().target(BuildMode::Production);
        assert_eq!(target.href("/styles/site.css"), "/Base-Frank1/styles/site.css");
        assert_eq!(target.href("styles/site.css"), "/Base-Frank1/styles/site.css");
    }

    #[test]
    fn test_href_under_local_root() {
        let target = DeploymentTarget::Local;
        assert_eq!(target.href("/styles/site.css"), "/styles/site.css");
        assert_eq!(target.href("styles/site.css"), "/styles/site.css");
    }
}
