//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{CommitIdentity, CredentialPair};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with stdin piped from `stdin`.
    async fn run_with_stdin(&self, program: &str, args: &[&str], stdin: &[u8]) -> Result<Output>;
}

// ── Version Control Port ──────────────────────────────────────────────────────

/// Whether `commit` produced a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitResult {
    Committed,
    NothingStaged,
}

/// Version-control operations on one working copy. Every method takes the
/// working copy path explicitly; no implementation changes the process's
/// current directory.
#[allow(async_fn_in_trait)]
pub trait VersionControl {
    /// Clone `url` into the existing empty directory `dest`.
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    /// Set the commit identity for this working copy only.
    async fn configure_identity(&self, dir: &Path, identity: &CommitIdentity) -> Result<()>;
    /// Check out `branch`.
    async fn checkout_branch(&self, dir: &Path, branch: &str) -> Result<()>;
    /// Stage every tracked file for deletion.
    async fn remove_tracked(&self, dir: &Path) -> Result<()>;
    /// Stage all additions, modifications and deletions.
    async fn stage_all(&self, dir: &Path) -> Result<()>;
    /// Commit the staged changes. Reports `NothingStaged` instead of failing
    /// when there was nothing to commit.
    async fn commit(&self, dir: &Path, message: &str) -> Result<CommitResult>;
    /// Push the checked-out branch to its remote.
    async fn push(&self, dir: &Path) -> Result<()>;
}

// ── Image Registry Port ───────────────────────────────────────────────────────

/// Container registry client operations.
#[allow(async_fn_in_trait)]
pub trait ImageRegistry {
    /// Log in to `server` (client default when `None`).
    async fn login(&self, server: Option<&str>, credentials: &CredentialPair) -> Result<()>;
    /// Push a locally tagged image.
    async fn push(&self, image: &str) -> Result<()>;
}

// ── HTTP Port ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Patch,
}

/// A JSON request to the registry API.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and body of a completed exchange, whatever the status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstracts HTTP so services can be tested without network access.
pub trait HttpTransport {
    /// Send `request`. Non-2xx statuses are returned as responses; only
    /// transport failures (DNS, TLS, connection) are errors.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Filesystem access needed by the helpers.
pub trait WorkspaceFs {
    /// Create a new, uniquely named directory that outlives the process.
    fn create_workspace_dir(&self) -> Result<PathBuf>;
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
    /// Read a text file in full; invalid UTF-8 is replaced, not rejected.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
