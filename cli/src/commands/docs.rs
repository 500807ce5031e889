//! `ci-helpers prepare*` / `commit`: documentation branch workspaces.
//!
//! Typical pipeline use:
//!
//! ```sh
//! dir=$(ci-helpers prepare-wiki org/repo)
//! cp -r docs/wiki/. "$dir"
//! ci-helpers commit "$dir"
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::docs_workspace::{self as service, DocsSettings};
use crate::domain::{CommitOutcome, HelperConfig, WorkspaceHandle};
use crate::output::json;

/// Arguments for the prepare command.
#[derive(Args)]
pub struct PrepareArgs {
    /// Repository to clone, e.g. `org/repo`
    pub repository: String,

    /// Branch to check out after cloning
    #[arg(long)]
    pub branch: Option<String>,
}

/// Arguments for the prepare-wiki and prepare-pages commands.
#[derive(Args)]
pub struct RepositoryArgs {
    /// Repository whose documentation is published, e.g. `org/repo`
    pub repository: String,
}

/// Arguments for the commit command.
#[derive(Args)]
pub struct CommitArgs {
    /// Workspace directory printed by a prepare command
    pub workspace: Option<String>,

    /// Commit message (defaults to the config file value)
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Serialize)]
struct Prepared {
    workspace: String,
}

#[derive(Serialize)]
struct Committed {
    outcome: CommitOutcome,
}

fn settings(config: &HelperConfig) -> DocsSettings<'_> {
    DocsSettings {
        host: &config.git.host,
        identity: &config.git.identity,
    }
}

/// Run `ci-helpers prepare`.
///
/// # Errors
///
/// Returns an error if the config file is malformed, the token is missing
/// or clone/checkout fails.
pub async fn prepare(args: &PrepareArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let handle = {
        let reporter = app.terminal_reporter();
        service::prepare(
            &app.git,
            &app.fs,
            &app.env,
            &settings(&config),
            &args.repository,
            args.branch.as_deref(),
            &reporter,
        )
        .await?
    };
    print_handle(app, &handle)
}

/// Run `ci-helpers prepare-wiki`.
///
/// # Errors
///
/// Returns an error if the config file is malformed, the token is missing
/// or the clone fails.
pub async fn prepare_wiki(args: &RepositoryArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let handle = {
        let reporter = app.terminal_reporter();
        service::prepare_wiki(
            &app.git,
            &app.fs,
            &app.env,
            &settings(&config),
            &args.repository,
            &reporter,
        )
        .await?
    };
    print_handle(app, &handle)
}

/// Run `ci-helpers prepare-pages`.
///
/// # Errors
///
/// Returns an error if the config file is malformed, the token is missing
/// or clone/checkout fails.
pub async fn prepare_pages(args: &RepositoryArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let handle = {
        let reporter = app.terminal_reporter();
        service::prepare_pages(
            &app.git,
            &app.fs,
            &app.env,
            &settings(&config),
            &args.repository,
            &reporter,
        )
        .await?
    };
    print_handle(app, &handle)
}

/// Run `ci-helpers commit`.
///
/// # Errors
///
/// Returns an error for a malformed config file, an empty or missing
/// workspace, or if commit/push fails.
pub async fn commit(args: &CommitArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let message = args
        .message
        .as_deref()
        .unwrap_or(&config.git.commit_message);
    let outcome = {
        let reporter = app.terminal_reporter();
        service::commit(
            &app.git,
            &app.fs,
            args.workspace.as_deref().unwrap_or_default(),
            message,
            &reporter,
        )
        .await?
    };
    if app.is_json() {
        json::print(&Committed { outcome })?;
    }
    Ok(())
}

/// Workspace path on stdout so `dir=$(ci-helpers prepare ...)` works.
fn print_handle(app: &AppContext, handle: &WorkspaceHandle) -> Result<()> {
    if app.is_json() {
        json::print(&Prepared {
            workspace: handle.to_string(),
        })
    } else {
        println!("{handle}");
        Ok(())
    }
}
