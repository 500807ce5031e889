//! Pipeline context and the environment predicate checker.
//!
//! Pure functions only. The process environment is read once by
//! `crate::infra::environment` and handed in as a [`PipelineEnv`].

use std::fmt;

use crate::domain::credentials::{AccessToken, CredentialPair};
use crate::domain::error::HelperError;

// ── Variable names ───────────────────────────────────────────────────────────

pub const EVENT_TYPE_VAR: &str = "TRAVIS_EVENT_TYPE";
pub const BRANCH_VAR: &str = "TRAVIS_BRANCH";
pub const REGISTRY_USERNAME_VAR: &str = "DOCKER_USERNAME";
pub const REGISTRY_PASSWORD_VAR: &str = "DOCKER_PASSWORD";
pub const SCM_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const REGISTRY_API_VAR: &str = "DOCKER_HUB_API";

// ── Context object ───────────────────────────────────────────────────────────

/// Everything the helpers read from the build environment.
///
/// Fields are `None` when the variable is unset. An empty string still
/// counts as present.
#[derive(Clone, Default)]
pub struct PipelineEnv {
    pub event_type: Option<String>,
    pub branch: Option<String>,
    pub registry_username: Option<String>,
    pub registry_password: Option<String>,
    pub scm_token: Option<String>,
    pub registry_api_base: Option<String>,
}

impl fmt::Debug for PipelineEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineEnv")
            .field("event_type", &self.event_type)
            .field("branch", &self.branch)
            .field("registry_username", &self.registry_username)
            .field("registry_password", &self.registry_password.as_ref().map(|_| "***"))
            .field("scm_token", &self.scm_token.as_ref().map(|_| "***"))
            .field("registry_api_base", &self.registry_api_base)
            .finish()
    }
}

impl PipelineEnv {
    /// Registry username/password, or `MissingCredential` naming the absent half.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::MissingCredential` if either variable is unset.
    pub fn registry_credentials(&self, operation: &str) -> Result<CredentialPair, HelperError> {
        require_present(
            operation,
            &[
                (REGISTRY_USERNAME_VAR, self.registry_username.as_deref()),
                (REGISTRY_PASSWORD_VAR, self.registry_password.as_deref()),
            ],
        )?;
        Ok(CredentialPair::new(
            self.registry_username.clone().unwrap_or_default(),
            self.registry_password.clone().unwrap_or_default(),
        ))
    }

    /// Source-control access token.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::MissingCredential` if the token is unset.
    pub fn scm_token(&self, operation: &str) -> Result<AccessToken, HelperError> {
        require_present(operation, &[(SCM_TOKEN_VAR, self.scm_token.as_deref())])?;
        Ok(AccessToken::new(self.scm_token.clone().unwrap_or_default()))
    }
}

// ── Checker ──────────────────────────────────────────────────────────────────

/// Confirm every required variable is present.
///
/// # Errors
///
/// Returns `HelperError::MissingCredential` listing all absent names.
pub fn require_present(operation: &str, vars: &[(&str, Option<&str>)]) -> Result<(), HelperError> {
    let missing: Vec<String> = vars
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| (*name).to_string())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(HelperError::MissingCredential {
        operation: operation.to_string(),
        variables: missing,
    })
}

/// A non-fatal gap in the pipeline context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub variable: &'static str,
    pub consequence: &'static str,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not set; {}", self.variable, self.consequence)
    }
}

/// Look up an advisory variable. Absence yields a [`Warning`] the caller
/// reports before falling back to its conservative answer.
///
/// # Errors
///
/// Returns the `Warning` when `value` is `None`.
pub fn advisory<'a>(
    variable: &'static str,
    value: Option<&'a str>,
    consequence: &'static str,
) -> Result<&'a str, Warning> {
    value.ok_or(Warning {
        variable,
        consequence,
    })
}
