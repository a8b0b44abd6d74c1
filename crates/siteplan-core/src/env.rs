//! Build environment detection.

use std::fmt;

/// Environment variable consulted to decide the build mode.
///
/// Deployment pipelines for this site export `NODE_ENV`, so the resolver
/// reads the same variable for parity with CI.
pub const BUILD_ENV_VAR: &str = "NODE_ENV";

/// Build mode derived from the deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Local development build.
    #[default]
    Development,

    /// Production build for the hosted deployment.
    Production,
}

impl BuildMode {
    /// Derive the build mode from an environment signal.
    ///
    /// Only the exact value `"production"` selects a production build. Any
    /// other value, including an absent variable or an empty string, falls
    /// back to development. The comparison is case sensitive.
    #[must_use]
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Derive the build mode from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_signal(std::env::var(BUILD_ENV_VAR).ok().as_deref())
    }

    /// Whether this is a production build.
    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_signal() {
        assert_eq!(
            BuildMode::from_signal(Some("production")),
            BuildMode::Production
        );
        assert!(BuildMode::from_signal(Some("production")).is_production());
    }

    #[test]
    fn test_absent_signal_is_development() {
        assert_eq!(BuildMode::from_signal(None), BuildMode::Development);
    }

    #[test]
    fn test_other_signals_are_development() {
        for signal in ["", "development", "test", "staging", "prod"] {
            assert_eq!(
                BuildMode::from_signal(Some(signal)),
                BuildMode::Development,
                "signal {signal:?} must not select production"
            );
        }
    }

    #[test]
    fn test_signal_match_is_case_sensitive() {
        assert_eq!(
            BuildMode::from_signal(Some("Production")),
            BuildMode::Development
        );
        assert_eq!(
            BuildMode::from_signal(Some("PRODUCTION")),
            BuildMode::Development
        );
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(BuildMode::default(), BuildMode::Development);
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildMode::Production.to_string(), "production");
        assert_eq!(BuildMode::Development.to_string(), "development");
    }
}
