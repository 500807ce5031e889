//! Domain types for the optional helper configuration file.
//!
//! Pure types only. No I/O or async.

use serde::{Deserialize, Serialize};

use crate::domain::registry::DEFAULT_API_BASE;
use crate::domain::workspace::CommitIdentity;

pub const DEFAULT_GIT_HOST: &str = "github.com";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Automated documentation update [skip ci]";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, read from `.ci-helpers.yaml` or `CI_HELPERS_CONFIG`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HelperConfig {
    /// Documentation workspace settings.
    pub git: GitConfig,
    /// Container registry settings.
    pub registry: RegistryConfig,
}

/// Settings for cloning and committing documentation workspaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// Hosting service the repositories live on.
    pub host: String,
    /// Identity recorded on automated commits.
    pub identity: CommitIdentity,
    /// Message of automated commits.
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GIT_HOST.to_string(),
            identity: CommitIdentity::default(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Settings for the container registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the registry HTTP API.
    pub api_base: String,
    /// Registry server passed to `docker login`; `None` means the client default.
    pub server: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            server: None,
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
