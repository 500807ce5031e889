//! Application service: branch-push detection.
//!
//! Never fails: missing context degrades to `false` after a warning.

use crate::application::ports::ProgressReporter;
use crate::domain::environment::{BRANCH_VAR, EVENT_TYPE_VAR, PipelineEnv, advisory};

/// Event type reported for builds triggered by a push.
pub const PUSH_EVENT: &str = "push";

/// Branch checked by [`is_master_push`].
pub const MASTER_BRANCH: &str = "master";

/// True only when the build was triggered by a push to exactly `branch_name`.
///
/// Each absent variable emits one warning and counts as a failed comparison.
pub fn is_branch_push(
    env: &PipelineEnv,
    branch_name: &str,
    reporter: &impl ProgressReporter,
) -> bool {
    let event = advisory(
        EVENT_TYPE_VAR,
        env.event_type.as_deref(),
        "assuming this is not a push build",
    );
    let branch = advisory(
        BRANCH_VAR,
        env.branch.as_deref(),
        "assuming this is not the requested branch",
    );

    let is_push = match event {
        Ok(event) => event == PUSH_EVENT,
        Err(warning) => {
            reporter.warn(&warning.to_string());
            false
        }
    };
    let on_branch = match branch {
        Ok(current) => current == branch_name,
        Err(warning) => {
            reporter.warn(&warning.to_string());
            false
        }
    };

    is_push && on_branch
}

/// [`is_branch_push`] fixed to `master`.
pub fn is_master_push(env: &PipelineEnv, reporter: &impl ProgressReporter) -> bool {
    is_branch_push(env, MASTER_BRANCH, reporter)
}
