//! Unit tests for image publishing and registry description updates.

#![allow(clippy::expect_used)]

use std::path::Path;

use ci_helpers::application::ports::HttpMethod;
use ci_helpers::application::services::registry_publish::{
    DescriptionUpdate, push_image, set_description,
};
use ci_helpers::domain::{HelperError, PipelineEnv};

use crate::helpers::{FakeFs, FakeHttp, FakeRegistry, RecordingReporter, full_env, http};

const API: &str = "https://registry.example.com/v2";
const README: &str = "/work/README.md";

fn update<'a>(repository: &'a str, file: &'a str) -> DescriptionUpdate<'a> {
    DescriptionUpdate {
        api_base: API,
        repository,
        description_file: Path::new(file),
    }
}

fn kind(err: &anyhow::Error) -> &HelperError {
    HelperError::find_in(err).expect("error should carry a HelperError")
}

// ── push_image ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn push_image_logs_in_then_pushes() {
    let registry = FakeRegistry::default();
    let reporter = RecordingReporter::default();

    push_image(&registry, &full_env(), None, "org/app:1.0", &reporter)
        .await
        .expect("push should succeed");

    assert_eq!(registry.calls(), vec!["login bot -", "push org/app:1.0"]);
    assert_eq!(reporter.successes(), vec!["pushed org/app:1.0"]);
}

#[tokio::test]
async fn push_image_passes_server_to_login() {
    let registry = FakeRegistry::default();
    push_image(
        &registry,
        &full_env(),
        Some("ghcr.io"),
        "ghcr.io/org/app",
        &RecordingReporter::default(),
    )
    .await
    .expect("push should succeed");

    assert_eq!(registry.calls()[0], "login bot ghcr.io");
}

#[tokio::test]
async fn push_image_without_password_fails_before_login() {
    let registry = FakeRegistry::default();
    let env = PipelineEnv {
        registry_password: None,
        ..full_env()
    };

    let err = push_image(&registry, &env, None, "org/app", &RecordingReporter::default())
        .await
        .expect_err("missing password must fail");

    match kind(&err) {
        HelperError::MissingCredential { variables, .. } => {
            assert_eq!(variables, &vec!["DOCKER_PASSWORD".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(registry.calls().is_empty());
}

#[tokio::test]
async fn push_image_without_any_credentials_names_both() {
    let registry = FakeRegistry::default();
    let err = push_image(
        &registry,
        &PipelineEnv::default(),
        None,
        "org/app",
        &RecordingReporter::default(),
    )
    .await
    .expect_err("missing credentials must fail");

    let message = err.to_string();
    assert!(message.contains("DOCKER_USERNAME"));
    assert!(message.contains("DOCKER_PASSWORD"));
    assert_eq!(kind(&err).exit_code(), 2);
}

#[tokio::test]
async fn push_image_login_failure_skips_push() {
    let registry = FakeRegistry {
        fail_login: true,
        ..FakeRegistry::default()
    };
    let err = push_image(
        &registry,
        &full_env(),
        None,
        "org/app",
        &RecordingReporter::default(),
    )
    .await
    .expect_err("login failure must propagate");

    assert!(format!("{err:#}").contains("registry login"));
    assert_eq!(registry.calls().len(), 1);
}

#[tokio::test]
async fn push_image_push_failure_propagates() {
    let registry = FakeRegistry {
        fail_push: true,
        ..FakeRegistry::default()
    };
    let err = push_image(
        &registry,
        &full_env(),
        None,
        "org/app",
        &RecordingReporter::default(),
    )
    .await
    .expect_err("push failure must propagate");

    assert!(format!("{err:#}").contains("pushing org/app"));
}

// ── set_description ──────────────────────────────────────────────────────────

#[test]
fn set_description_logs_in_and_patches_with_token() {
    let http = FakeHttp::replying(vec![
        http(200, r#"{"token":"jwt-abc"}"#),
        http(200, "{}"),
    ]);
    let fs = FakeFs::with_file(README, "# Title\n\n\"quoted\" text");
    let reporter = RecordingReporter::default();

    set_description(&http, &fs, &full_env(), &update("org/app", README), &reporter)
        .expect("update should succeed");

    let requests = http.requests();
    assert_eq!(requests.len(), 2);

    let login = &requests[0];
    assert_eq!(login.method, HttpMethod::Post);
    assert_eq!(login.url, format!("{API}/users/login/"));
    let body: serde_json::Value = serde_json::from_str(&login.body).expect("login body is JSON");
    assert_eq!(body["username"], "bot");
    assert_eq!(body["password"], "hunter2");

    let patch = &requests[1];
    assert_eq!(patch.method, HttpMethod::Patch);
    assert_eq!(patch.url, format!("{API}/repositories/org/app/"));
    assert!(
        patch
            .headers
            .contains(&("Authorization".to_string(), "JWT jwt-abc".to_string()))
    );
    let body: serde_json::Value = serde_json::from_str(&patch.body).expect("patch body is JSON");
    assert_eq!(body["full_description"], "# Title\n\n\"quoted\" text");
}

#[test]
fn set_description_empty_repository_fails_before_any_access() {
    let http = FakeHttp::default();
    let fs = FakeFs::with_file(README, "text");

    let err = set_description(
        &http,
        &fs,
        &full_env(),
        &update("", README),
        &RecordingReporter::default(),
    )
    .expect_err("empty repository must fail");

    assert!(matches!(kind(&err), HelperError::InvalidArgument(_)));
    assert!(http.requests().is_empty());
    assert_eq!(fs.touched_count(), 0);
}

#[test]
fn set_description_missing_file_fails_before_network() {
    let http = FakeHttp::default();
    let err = set_description(
        &http,
        &FakeFs::default(),
        &full_env(),
        &update("org/app", "/nope.md"),
        &RecordingReporter::default(),
    )
    .expect_err("missing file must fail");

    assert!(matches!(kind(&err), HelperError::InvalidArgument(_)));
    assert!(err.to_string().contains("/nope.md"));
    assert!(http.requests().is_empty());
}

#[test]
fn set_description_missing_credentials_fails_before_network() {
    let http = FakeHttp::default();
    let env = PipelineEnv {
        registry_username: None,
        ..full_env()
    };
    let err = set_description(
        &http,
        &FakeFs::with_file(README, "text"),
        &env,
        &update("org/app", README),
        &RecordingReporter::default(),
    )
    .expect_err("missing username must fail");

    assert!(matches!(
        kind(&err),
        HelperError::MissingCredential { .. }
    ));
    assert!(http.requests().is_empty());
}

#[test]
fn set_description_rejected_login_is_authentication_failure() {
    let http = FakeHttp::replying(vec![http(401, r#"{"detail":"Incorrect authentication"}"#)]);
    let err = set_description(
        &http,
        &FakeFs::with_file(README, "text"),
        &full_env(),
        &update("org/app", README),
        &RecordingReporter::default(),
    )
    .expect_err("401 must fail");

    assert!(matches!(kind(&err), HelperError::AuthenticationFailure(_)));
    assert!(err.to_string().contains("401"));
    assert_eq!(http.requests().len(), 1);
}

#[test]
fn set_description_login_without_token_is_authentication_failure() {
    let http = FakeHttp::replying(vec![http(200, r#"{"detail":"ok"}"#)]);
    let err = set_description(
        &http,
        &FakeFs::with_file(README, "text"),
        &full_env(),
        &update("org/app", README),
        &RecordingReporter::default(),
    )
    .expect_err("tokenless login must fail");

    assert!(matches!(kind(&err), HelperError::AuthenticationFailure(_)));
    assert_eq!(http.requests().len(), 1);
}

#[test]
fn set_description_unreachable_api_is_external_failure() {
    let http = FakeHttp::replying(vec![Err(anyhow::anyhow!("dns error"))]);
    let err = set_description(
        &http,
        &FakeFs::with_file(README, "text"),
        &full_env(),
        &update("org/app", README),
        &RecordingReporter::default(),
    )
    .expect_err("transport failure must fail");

    assert_eq!(kind(&err).code(), "external_command_failure");
}

#[test]
fn set_description_rejected_patch_says_login_succeeded() {
    let http = FakeHttp::replying(vec![
        http(200, r#"{"token":"jwt-abc"}"#),
        http(403, r#"{"detail":"forbidden"}"#),
    ]);
    let err = set_description(
        &http,
        &FakeFs::with_file(README, "text"),
        &full_env(),
        &update("org/app", README),
        &RecordingReporter::default(),
    )
    .expect_err("403 on update must fail");

    assert!(matches!(
        kind(&err),
        HelperError::ExternalCommandFailure { .. }
    ));
    let message = err.to_string();
    assert!(message.contains("login succeeded"));
    assert!(message.contains("403"));
}
