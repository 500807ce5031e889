//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod registry;
pub mod workspace;

pub use config::HelperConfig;
pub use credentials::{AccessToken, CredentialPair};
pub use environment::{PipelineEnv, Warning};
pub use error::HelperError;
pub use workspace::{CommitIdentity, CommitOutcome, ContentReset, PushTarget, WorkspaceHandle};
