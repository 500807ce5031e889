//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Build-pipeline helpers: push checks, registry publishing, docs branches
#[derive(Parser)]
#[command(
    name = "ci-helpers",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled when `NO_COLOR` is set)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Exit 0 if this build was triggered by a push to BRANCH
    IsBranchPush(commands::branch::BranchPushArgs),

    /// Exit 0 if this build was triggered by a push to master
    IsMasterPush,

    /// Log in to the container registry and push an image
    DockerPush(commands::registry::DockerPushArgs),

    /// Replace a registry repository's description with a file's contents
    DockerSetDescription(commands::registry::SetDescriptionArgs),

    /// Clone a repository into a new workspace and print its path
    Prepare(commands::docs::PrepareArgs),

    /// Clone a repository's wiki, remove its pages, and print the workspace path
    PrepareWiki(commands::docs::RepositoryArgs),

    /// Clone a repository's pages branch and print the workspace path
    PreparePages(commands::docs::RepositoryArgs),

    /// Commit and push everything changed in a prepared workspace
    Commit(commands::docs::CommitArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; predicates answer through the
    /// returned exit code instead.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        if let Command::Version = command {
            commands::version::run(json);
            return Ok(ExitCode::SUCCESS);
        }

        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::IsBranchPush(args) => return commands::branch::run(&args, &app),
            Command::IsMasterPush => return commands::branch::run_master(&app),
            Command::DockerPush(args) => commands::registry::push(&args, &app).await?,
            Command::DockerSetDescription(args) => {
                commands::registry::set_description(&args, &app)?;
            }
            Command::Prepare(args) => commands::docs::prepare(&args, &app).await?,
            Command::PrepareWiki(args) => commands::docs::prepare_wiki(&args, &app).await?,
            Command::PreparePages(args) => commands::docs::prepare_pages(&args, &app).await?,
            Command::Commit(args) => commands::docs::commit(&args, &app).await?,
            Command::Version => commands::version::run(json),
        }
        Ok(ExitCode::SUCCESS)
    }
}
