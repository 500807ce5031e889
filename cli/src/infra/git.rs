//! `git` command-line implementation of the `VersionControl` port.
//!
//! Every invocation addresses the working copy with `git -C <dir>`; the
//! process's current directory is never changed.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, CommitResult, VersionControl};
use crate::domain::workspace::CommitIdentity;
use crate::infra::command_runner::{ensure_success, failure};

/// Runs `git` through an injected `CommandRunner`.
pub struct GitCli<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn git(&self, dir: &Path, args: &[&str]) -> Result<Output> {
        let dir = dir.to_string_lossy();
        let mut full = vec!["-C", dir.as_ref()];
        full.extend_from_slice(args);
        self.runner.run("git", &full).await
    }

    async fn git_checked(&self, dir: &Path, what: &str, args: &[&str]) -> Result<()> {
        let output = self.git(dir, args).await?;
        ensure_success(what, &output)
    }
}

impl<R: CommandRunner> VersionControl for GitCli<R> {
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest = dest.to_string_lossy();
        let output = self
            .runner
            .run("git", &["clone", "--quiet", url, dest.as_ref()])
            .await?;
        ensure_success("git clone", &output)
    }

    async fn configure_identity(&self, dir: &Path, identity: &CommitIdentity) -> Result<()> {
        self.git_checked(dir, "git config", &["config", "user.name", &identity.name])
            .await?;
        self.git_checked(dir, "git config", &["config", "user.email", &identity.email])
            .await
    }

    async fn checkout_branch(&self, dir: &Path, branch: &str) -> Result<()> {
        self.git_checked(dir, "git checkout", &["checkout", "--quiet", branch])
            .await
    }

    async fn remove_tracked(&self, dir: &Path) -> Result<()> {
        self.git_checked(dir, "git rm", &["rm", "-r", "--quiet", "."])
            .await
    }

    async fn stage_all(&self, dir: &Path) -> Result<()> {
        self.git_checked(dir, "git add", &["add", "--all"]).await
    }

    async fn commit(&self, dir: &Path, message: &str) -> Result<CommitResult> {
        let output = self.git(dir, &["commit", "--quiet", "-m", message]).await?;
        if output.status.success() {
            return Ok(CommitResult::Committed);
        }
        // `git commit` exits non-zero both for real failures and for an empty
        // index; an index matching HEAD means the latter.
        let staged = self.git(dir, &["diff", "--cached", "--quiet"]).await?;
        if staged.status.success() {
            return Ok(CommitResult::NothingStaged);
        }
        Err(failure("git commit", &output))
    }

    async fn push(&self, dir: &Path) -> Result<()> {
        self.git_checked(dir, "git push", &["push", "--quiet", "origin", "HEAD"])
            .await
    }
}
