//! Loads the optional YAML configuration file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::config::HelperConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "CI_HELPERS_CONFIG";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".ci-helpers.yaml";

/// Reads `HelperConfig` from a YAML file on disk.
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Resolve the config path: `explicit` (the `CI_HELPERS_CONFIG` value),
    /// then `.ci-helpers.yaml` in the current directory, then
    /// `<config_dir>/ci-helpers/config.yaml`.
    #[must_use]
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::with_path(path);
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::with_path(local);
        }
        Self {
            path: dirs::config_dir().map(|d| d.join("ci-helpers").join("config.yaml")),
        }
    }

    /// Use an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the config, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<HelperConfig> {
        let Some(path) = self.path.as_deref() else {
            return Ok(HelperConfig::default());
        };
        if !path.exists() {
            return Ok(HelperConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}
