//! Typed domain error enum.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! `HelperError` implements `thiserror::Error` and converts to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Helper errors ─────────────────────────────────────────────────────────────

/// Fatal failure kinds shared by every helper operation.
///
/// Warnings are not represented here: they never abort an operation.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("{operation} requires {} to be set.", .variables.join(", "))]
    MissingCredential {
        operation: String,
        variables: Vec<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    #[error("{command} failed: {detail}")]
    ExternalCommandFailure { command: String, detail: String },
}

impl HelperError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::AuthenticationFailure(_) => "authentication_failure",
            Self::ExternalCommandFailure { .. } => "external_command_failure",
        }
    }

    /// Process exit code for this kind. `1` is reserved for predicates that
    /// answer "no" and for errors outside this enum.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingCredential { .. } => 2,
            Self::InvalidArgument(_) => 3,
            Self::AuthenticationFailure(_) => 4,
            Self::ExternalCommandFailure { .. } => 5,
        }
    }

    /// Find the first `HelperError` in an `anyhow` context chain.
    #[must_use]
    pub fn find_in(err: &anyhow::Error) -> Option<&Self> {
        err.chain().find_map(|cause| cause.downcast_ref::<Self>())
    }

    pub(crate) fn external(command: &str, detail: impl Into<String>) -> Self {
        Self::ExternalCommandFailure {
            command: command.to_string(),
            detail: detail.into(),
        }
    }
}
