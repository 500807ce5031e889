//! `ci-helpers docker-push` / `docker-set-description`: registry publishing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::registry_publish::{self as service, DescriptionUpdate};
use crate::output::json;

/// Arguments for the docker-push command.
#[derive(Args)]
pub struct DockerPushArgs {
    /// Image reference to push, e.g. `org/image:1.2.3`
    pub image: String,

    /// Registry server to log in to (defaults to the config file, then Docker Hub)
    #[arg(long)]
    pub server: Option<String>,
}

/// Arguments for the docker-set-description command.
#[derive(Args)]
pub struct SetDescriptionArgs {
    /// Repository whose description is replaced, e.g. `org/image`
    pub repository: String,

    /// File holding the new full description (usually a README)
    pub file: PathBuf,
}

/// Run `ci-helpers docker-push`.
///
/// # Errors
///
/// Returns an error if credentials are missing or login/push fails.
pub async fn push(args: &DockerPushArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let server = args
        .server
        .as_deref()
        .or(config.registry.server.as_deref());
    {
        let reporter = app.terminal_reporter();
        service::push_image(&app.docker, &app.env, server, &args.image, &reporter).await?;
    }
    if app.is_json() {
        json::print(&serde_json::json!({ "pushed": args.image }))?;
    }
    Ok(())
}

/// Run `ci-helpers docker-set-description`.
///
/// # Errors
///
/// Returns an error on invalid arguments, missing credentials, failed login
/// or a rejected update.
pub fn set_description(args: &SetDescriptionArgs, app: &AppContext) -> Result<()> {
    let config = app.config()?;
    let update = DescriptionUpdate {
        api_base: app.registry_api_base(&config),
        repository: &args.repository,
        description_file: &args.file,
    };
    {
        let reporter = app.terminal_reporter();
        service::set_description(&app.http, &app.fs, &app.env, &update, &reporter)?;
    }
    if app.is_json() {
        json::print(&serde_json::json!({ "updated": args.repository }))?;
    }
    Ok(())
}
