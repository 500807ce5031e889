//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for process execution. Each call is awaited to completion; external tools
//! apply their own timeouts.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

use crate::application::ports::CommandRunner;
use crate::domain::error::HelperError;
use crate::domain::workspace::redact_credentials;

/// Production `CommandRunner`: spawns the program with piped output and
/// waits for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to run {program}"))
    }

    async fn run_with_stdin(&self, program: &str, args: &[&str], input: &[u8]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        // Write and close stdin before waiting so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input)
                .await
                .with_context(|| format!("writing stdin of {program}"))?;
        }

        child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}

/// Map a non-zero exit to `ExternalCommandFailure`, scrubbing credentials
/// from the captured output.
///
/// # Errors
///
/// Returns `HelperError::ExternalCommandFailure` if `output` records a failure.
pub fn ensure_success(what: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(failure(what, output))
}

pub(crate) fn failure(what: &str, output: &Output) -> anyhow::Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = if stderr.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.trim().to_string()
    };
    let detail = match output.status.code() {
        Some(code) if detail.is_empty() => format!("exit code {code}"),
        Some(code) => format!("exit code {code}: {detail}"),
        None => format!("terminated by signal: {detail}"),
    };
    HelperError::external(what, redact_credentials(&detail)).into()
}
