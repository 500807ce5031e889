//! `docker` command-line implementation of the `ImageRegistry` port.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ImageRegistry};
use crate::domain::CredentialPair;
use crate::infra::command_runner::ensure_success;

/// Runs `docker` through an injected `CommandRunner`.
pub struct DockerCli<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DockerCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ImageRegistry for DockerCli<R> {
    async fn login(&self, server: Option<&str>, credentials: &CredentialPair) -> Result<()> {
        // Password goes over stdin so it never shows up in the process table.
        let mut args = vec!["login", "--username", credentials.username(), "--password-stdin"];
        if let Some(server) = server {
            args.push(server);
        }
        let output = self
            .runner
            .run_with_stdin("docker", &args, credentials.password().as_bytes())
            .await?;
        ensure_success("docker login", &output)
    }

    async fn push(&self, image: &str) -> Result<()> {
        let output = self.runner.run("docker", &["push", image]).await?;
        ensure_success("docker push", &output)
    }
}
