//! Application service: documentation workspace prepare/commit cycle.
//!
//! `prepare*` clones one repository into a fresh temporary directory and hands
//! the path to the caller; `commit` stages, commits and pushes whatever the
//! caller changed there. Each handle goes through exactly one cycle.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};

use crate::application::ports::{CommitResult, ProgressReporter, VersionControl, WorkspaceFs};
use crate::domain::error::HelperError;
use crate::domain::workspace::{
    CommitIdentity, CommitOutcome, ContentReset, PushTarget, WorkspaceHandle, clone_url,
    parse_handle, validate_repository_name,
};
use crate::domain::PipelineEnv;

/// Settings shared by every prepare call.
pub struct DocsSettings<'a> {
    /// Hosting service, e.g. `github.com`.
    pub host: &'a str,
    /// Identity set on the clone.
    pub identity: &'a CommitIdentity,
}

/// Clone `repository` (optionally checking out `branch`) into a new workspace.
///
/// # Errors
///
/// `InvalidArgument` for an empty repository name, `MissingCredential` when
/// the token is unset, or the clone/identity/checkout failure.
pub async fn prepare(
    vcs: &impl VersionControl,
    fs: &impl WorkspaceFs,
    env: &PipelineEnv,
    settings: &DocsSettings<'_>,
    repository: &str,
    branch: Option<&str>,
    reporter: &impl ProgressReporter,
) -> Result<WorkspaceHandle> {
    prepare_target(
        vcs,
        fs,
        env,
        settings,
        &PushTarget::new(repository, branch),
        reporter,
    )
    .await
}

/// Prepare the wiki repository of `repository` with its tracked pages removed.
///
/// # Errors
///
/// Same as [`prepare`]. Failure to remove existing pages is only a warning.
pub async fn prepare_wiki(
    vcs: &impl VersionControl,
    fs: &impl WorkspaceFs,
    env: &PipelineEnv,
    settings: &DocsSettings<'_>,
    repository: &str,
    reporter: &impl ProgressReporter,
) -> Result<WorkspaceHandle> {
    validate_repository_name(repository)?;
    prepare_target(vcs, fs, env, settings, &PushTarget::wiki(repository), reporter).await
}

/// Prepare the pages branch of `repository`.
///
/// # Errors
///
/// Same as [`prepare`].
pub async fn prepare_pages(
    vcs: &impl VersionControl,
    fs: &impl WorkspaceFs,
    env: &PipelineEnv,
    settings: &DocsSettings<'_>,
    repository: &str,
    reporter: &impl ProgressReporter,
) -> Result<WorkspaceHandle> {
    prepare_target(vcs, fs, env, settings, &PushTarget::pages(repository), reporter).await
}

async fn prepare_target(
    vcs: &impl VersionControl,
    fs: &impl WorkspaceFs,
    env: &PipelineEnv,
    settings: &DocsSettings<'_>,
    target: &PushTarget,
    reporter: &impl ProgressReporter,
) -> Result<WorkspaceHandle> {
    validate_repository_name(&target.repository)?;
    let token = env.scm_token("prepare")?;

    let url = clone_url(settings.host, &target.repository, &token);
    let dir = fs.create_workspace_dir().context("creating workspace directory")?;

    reporter.step(&format!("cloning {}...", target.repository));
    vcs.clone_repo(&url, &dir)
        .await
        .with_context(|| format!("cloning {}", target.repository))?;
    vcs.configure_identity(&dir, settings.identity)
        .await
        .context("setting commit identity")?;

    if let Some(branch) = target.branch.as_deref() {
        reporter.step(&format!("checking out {branch}..."));
        vcs.checkout_branch(&dir, branch)
            .await
            .with_context(|| format!("checking out {branch}"))?;
    }

    if target.reset == ContentReset::RemoveTracked
        && let Err(e) = vcs.remove_tracked(&dir).await
    {
        reporter.warn(&format!("no existing pages removed: {e:#}"));
    }

    let handle = WorkspaceHandle::new(dir);
    reporter.success(&format!("workspace ready at {handle}"));
    Ok(handle)
}

/// Stage, commit and push everything changed in the workspace at `handle`.
///
/// Returns `NothingToCommit` without pushing when there were no changes.
///
/// # Errors
///
/// `InvalidArgument` for an empty handle (checked before any filesystem
/// access) or a handle that is not a directory; otherwise the stage, commit
/// or push failure.
pub async fn commit(
    vcs: &impl VersionControl,
    fs: &impl WorkspaceFs,
    handle: &str,
    message: &str,
    reporter: &impl ProgressReporter,
) -> Result<CommitOutcome> {
    let handle = parse_handle(handle)?;
    if !fs.is_dir(handle.path()) {
        return Err(HelperError::InvalidArgument(format!(
            "workspace {handle} is not an accessible directory"
        ))
        .into());
    }

    vcs.stage_all(handle.path()).await.context("staging changes")?;
    match vcs
        .commit(handle.path(), message)
        .await
        .context("committing changes")?
    {
        CommitResult::NothingStaged => {
            reporter.success("nothing to commit");
            return Ok(CommitOutcome::NothingToCommit);
        }
        CommitResult::Committed => {}
    }

    reporter.step("pushing changes...");
    vcs.push(handle.path()).await.context("pushing changes")?;
    reporter.success("changes pushed");
    Ok(CommitOutcome::Pushed)
}
