//! Documentation workspace domain types: push targets, handles, clone URLs.
//!
//! Pure functions only. No I/O or async.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::credentials::AccessToken;
use crate::domain::error::HelperError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Suffix appended to a repository name to address its wiki repository.
pub const WIKI_SUFFIX: &str = ".wiki";

/// Branch that hosts the pages site.
pub const PAGES_BRANCH: &str = "gh-pages";

/// Userinfo section of a URL (`scheme://user:secret@`).
static URL_USERINFO_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"([A-Za-z][A-Za-z0-9+.-]*://)[^@/\s]+@").expect("valid regex")
});

// ── Push target ──────────────────────────────────────────────────────────────

/// What happens to tracked content right after the clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentReset {
    /// Leave the working tree as cloned.
    Keep,
    /// Stage every tracked file for deletion so the caller can repopulate.
    RemoveTracked,
}

/// Remote repository/branch a documentation commit is pushed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub repository: String,
    pub branch: Option<String>,
    pub reset: ContentReset,
}

impl PushTarget {
    #[must_use]
    pub fn new(repository: &str, branch: Option<&str>) -> Self {
        Self {
            repository: repository.to_string(),
            branch: branch.map(str::to_owned),
            reset: ContentReset::Keep,
        }
    }

    /// The wiki repository belonging to `repository`, emptied after cloning.
    #[must_use]
    pub fn wiki(repository: &str) -> Self {
        Self {
            repository: format!("{repository}{WIKI_SUFFIX}"),
            branch: None,
            reset: ContentReset::RemoveTracked,
        }
    }

    /// The pages branch of `repository`.
    #[must_use]
    pub fn pages(repository: &str) -> Self {
        Self::new(repository, Some(PAGES_BRANCH))
    }
}

// ── Workspace handle ─────────────────────────────────────────────────────────

/// Path of a temporary directory holding exactly one clone.
///
/// Owned by the caller once returned; never deleted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceHandle(PathBuf);

impl WorkspaceHandle {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for WorkspaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Terminal state of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// A commit was created and pushed.
    Pushed,
    /// Nothing was staged; no commit, no push.
    NothingToCommit,
}

/// Local commit identity, set per clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl Default for CommitIdentity {
    fn default() -> Self {
        Self {
            name: "ci-helpers".to_string(),
            email: "ci-helpers@users.noreply.github.com".to_string(),
        }
    }
}

// ── Validators and builders ──────────────────────────────────────────────────

/// Reject empty repository names.
///
/// # Errors
///
/// Returns `HelperError::InvalidArgument` if `name` is empty or blank.
pub fn validate_repository_name(name: &str) -> Result<(), HelperError> {
    if name.trim().is_empty() {
        return Err(HelperError::InvalidArgument(
            "repository name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Parse a workspace argument into a handle.
///
/// # Errors
///
/// Returns `HelperError::InvalidArgument` if `raw` is empty or blank.
pub fn parse_handle(raw: &str) -> Result<WorkspaceHandle, HelperError> {
    if raw.trim().is_empty() {
        return Err(HelperError::InvalidArgument(
            "workspace directory must not be empty".to_string(),
        ));
    }
    Ok(WorkspaceHandle::new(PathBuf::from(raw)))
}

/// HTTPS clone URL carrying `token` as the password.
#[must_use]
pub fn clone_url(host: &str, repository: &str, token: &AccessToken) -> String {
    format!(
        "https://x-access-token:{}@{host}/{repository}.git",
        token.expose()
    )
}

/// Strip credentials out of every URL in `text`.
#[must_use]
pub fn redact_credentials(text: &str) -> String {
    URL_USERINFO_RE.replace_all(text, "${1}***@").into_owned()
}
