//! Filesystem infrastructure: implements `WorkspaceFs`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::WorkspaceFs;

/// Prefix of every workspace directory name.
pub const WORKSPACE_PREFIX: &str = "ci-helpers-";

/// Production filesystem: workspaces are kept temp directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl WorkspaceFs for LocalFs {
    fn create_workspace_dir(&self) -> Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .context("creating temporary directory")?;
        // Handed to the caller; not removed when this process exits.
        Ok(dir.keep())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        // Invalid UTF-8 sequences become U+FFFD rather than an error.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
