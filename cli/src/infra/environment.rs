//! Reads the pipeline context from the process environment.
//!
//! The only place in the crate that looks at the helper variables and at
//! `CI_HELPERS_CONFIG`.

use std::path::PathBuf;

use crate::domain::environment::{
    BRANCH_VAR, EVENT_TYPE_VAR, PipelineEnv, REGISTRY_API_VAR, REGISTRY_PASSWORD_VAR,
    REGISTRY_USERNAME_VAR, SCM_TOKEN_VAR,
};
use crate::infra::config::CONFIG_PATH_VAR;

/// Snapshot the helper variables. Non-UTF-8 values count as unset.
#[must_use]
pub fn from_process_env() -> PipelineEnv {
    from_lookup(|name| std::env::var(name).ok())
}

/// Explicit config file path from `CI_HELPERS_CONFIG`, if set and non-empty.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_from(|name| std::env::var(name).ok())
}

/// [`config_path`] over any variable lookup.
#[must_use]
pub fn config_path_from(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    lookup(CONFIG_PATH_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Build a `PipelineEnv` from any variable lookup.
#[must_use]
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PipelineEnv {
    PipelineEnv {
        event_type: lookup(EVENT_TYPE_VAR),
        branch: lookup(BRANCH_VAR),
        registry_username: lookup(REGISTRY_USERNAME_VAR),
        registry_password: lookup(REGISTRY_PASSWORD_VAR),
        scm_token: lookup(SCM_TOKEN_VAR),
        registry_api_base: lookup(REGISTRY_API_VAR),
    }
}
