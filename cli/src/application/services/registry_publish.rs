//! Application service: container image publishing and registry metadata.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Every precondition is checked before the first network call.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{
    HttpMethod, HttpRequest, HttpTransport, ImageRegistry, ProgressReporter, WorkspaceFs,
};
use crate::domain::error::HelperError;
use crate::domain::registry::{
    description_payload, login_payload, login_url, parse_token, repository_url,
};
use crate::domain::workspace::validate_repository_name;
use crate::domain::PipelineEnv;

/// Log in to the registry and push `image`.
///
/// # Errors
///
/// `MissingCredential` before any login when a credential half is unset;
/// otherwise the login or push failure from the registry client.
pub async fn push_image(
    registry: &impl ImageRegistry,
    env: &PipelineEnv,
    server: Option<&str>,
    image: &str,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let credentials = env.registry_credentials("docker-push")?;

    reporter.step(&format!("logging in to registry as {}...", credentials.username()));
    registry
        .login(server, &credentials)
        .await
        .context("registry login")?;

    reporter.step(&format!("pushing {image}..."));
    registry
        .push(image)
        .await
        .with_context(|| format!("pushing {image}"))?;

    reporter.success(&format!("pushed {image}"));
    Ok(())
}

/// Options for [`set_description`].
pub struct DescriptionUpdate<'a> {
    /// Base URL of the registry HTTP API.
    pub api_base: &'a str,
    /// Repository whose description is replaced, e.g. `org/image`.
    pub repository: &'a str,
    /// File holding the new full description.
    pub description_file: &'a Path,
}

/// Replace a repository's full description with the contents of a file.
///
/// A login that succeeds but a `PATCH` that fails is reported as an
/// `ExternalCommandFailure` that says so, distinct from login failures.
///
/// # Errors
///
/// `InvalidArgument` for an empty repository or unreadable file and
/// `MissingCredential` for unset credentials, all before any request;
/// `AuthenticationFailure` when login yields no token; `ExternalCommandFailure`
/// when a request cannot be sent or the update is rejected.
pub fn set_description(
    http: &impl HttpTransport,
    fs: &impl WorkspaceFs,
    env: &PipelineEnv,
    update: &DescriptionUpdate<'_>,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    validate_repository_name(update.repository)?;
    let description = fs.read_to_string(update.description_file).map_err(|e| {
        HelperError::InvalidArgument(format!(
            "cannot read description file {}: {e}",
            update.description_file.display()
        ))
    })?;
    let credentials = env.registry_credentials("docker-set-description")?;

    reporter.step("logging in to registry API...");
    let login = http
        .send(&HttpRequest {
            method: HttpMethod::Post,
            url: login_url(update.api_base),
            headers: vec![json_content_type()],
            body: login_payload(&credentials)?,
        })
        .map_err(|e| HelperError::external("registry login", format!("{e:#}")))?;
    if !login.is_success() {
        return Err(HelperError::AuthenticationFailure(format!(
            "registry login returned HTTP {}",
            login.status
        ))
        .into());
    }
    let token = parse_token(&login.body)?;

    reporter.step(&format!("updating description of {}...", update.repository));
    let patch = http
        .send(&HttpRequest {
            method: HttpMethod::Patch,
            url: repository_url(update.api_base, update.repository),
            headers: vec![
                json_content_type(),
                ("Authorization".to_string(), format!("JWT {token}")),
            ],
            body: description_payload(&description)?,
        })
        .map_err(|e| {
            HelperError::external(
                "description update",
                format!("login succeeded but the update could not be sent: {e:#}"),
            )
        })?;
    if !patch.is_success() {
        return Err(HelperError::external(
            "description update",
            format!("login succeeded but the update returned HTTP {}", patch.status),
        )
        .into());
    }

    reporter.success(&format!("updated description of {}", update.repository));
    Ok(())
}

fn json_content_type() -> (String, String) {
    ("Content-Type".to_string(), "application/json".to_string())
}
