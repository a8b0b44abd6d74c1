//! Build pipeline integrations.
//!
//! An integration is a pluggable capability the build tool enables during
//! static generation. Order is preserved: when integrations interact, the
//! build tool applies them in the order they are listed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A capability enabled during static generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// React component rendering during static generation, with the
    /// integration's default options.
    React,
}

impl Integration {
    /// Name the build tool knows the integration by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::React => "react",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integrations enabled when a manifest does not list any.
#[must_use]
pub fn default_integrations() -> Vec<Integration> {
    vec![Integration::React]
}
