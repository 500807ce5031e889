//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is the one place where the process environment is read and
//! where production adapters are constructed. The config file is only parsed
//! by handlers that need it, so the branch-push predicates never depend on it.
//! Command handlers receive `&AppContext` and pass its parts to services.

use anyhow::Result;

use crate::domain::{HelperConfig, PipelineEnv};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::docker::DockerCli;
use crate::infra::environment;
use crate::infra::fs::LocalFs;
use crate::infra::git::GitCli;
use crate::infra::http::UreqTransport;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Pipeline variables, read once at startup.
    pub env: PipelineEnv,
    /// Where the optional config file is looked up.
    pub config_store: YamlConfigStore,
    /// Version-control client.
    pub git: GitCli<TokioCommandRunner>,
    /// Container registry client.
    pub docker: DockerCli<TokioCommandRunner>,
    /// Registry HTTP API transport.
    pub http: UreqTransport,
    /// Local filesystem.
    pub fs: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            env: environment::from_process_env(),
            config_store: YamlConfigStore::discover(environment::config_path()),
            git: GitCli::new(TokioCommandRunner),
            docker: DockerCli::new(TokioCommandRunner),
            http: UreqTransport::new(),
            fs: LocalFs,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Progress reporter for application services.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Load the config file, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn config(&self) -> Result<HelperConfig> {
        self.config_store.load()
    }

    /// Registry API base: `DOCKER_HUB_API` wins over the config file.
    #[must_use]
    pub fn registry_api_base<'a>(&'a self, config: &'a HelperConfig) -> &'a str {
        self.env
            .registry_api_base
            .as_deref()
            .filter(|base| !base.is_empty())
            .unwrap_or(&config.registry.api_base)
    }
}
