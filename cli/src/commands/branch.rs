//! `ci-helpers is-branch-push` / `is-master-push`: build trigger predicates.
//!
//! Exit status carries the answer: 0 for yes, 1 for no.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::services::branch_push;
use crate::output::json;

/// Arguments for the is-branch-push command.
#[derive(Args)]
pub struct BranchPushArgs {
    /// Branch the build must have been pushed to (case-sensitive)
    pub branch: String,
}

#[derive(Serialize)]
struct PredicateResult<'a> {
    branch: &'a str,
    result: bool,
}

/// Run `ci-helpers is-branch-push <branch>`.
///
/// # Errors
///
/// Returns an error only if `--json` output cannot be written.
pub fn run(args: &BranchPushArgs, app: &AppContext) -> Result<ExitCode> {
    let reporter = app.terminal_reporter();
    let result = branch_push::is_branch_push(&app.env, &args.branch, &reporter);
    answer(app, &args.branch, result)
}

/// Run `ci-helpers is-master-push`.
///
/// # Errors
///
/// Returns an error only if `--json` output cannot be written.
pub fn run_master(app: &AppContext) -> Result<ExitCode> {
    let reporter = app.terminal_reporter();
    let result = branch_push::is_master_push(&app.env, &reporter);
    answer(app, branch_push::MASTER_BRANCH, result)
}

fn answer(app: &AppContext, branch: &str, result: bool) -> Result<ExitCode> {
    if app.is_json() {
        json::print(&PredicateResult { branch, result })?;
    }
    Ok(if result {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
