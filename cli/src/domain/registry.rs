//! Registry HTTP API payloads and endpoints.
//!
//! Pure functions only; the requests are sent through the `HttpTransport` port.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::credentials::CredentialPair;
use crate::domain::error::HelperError;

pub const DEFAULT_API_BASE: &str = "https://hub.docker.com/v2";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
struct DescriptionUpdate<'a> {
    full_description: &'a str,
}

/// `POST` endpoint that exchanges credentials for a session token.
#[must_use]
pub fn login_url(api_base: &str) -> String {
    format!("{}/users/login/", api_base.trim_end_matches('/'))
}

/// `PATCH` endpoint for a repository resource.
#[must_use]
pub fn repository_url(api_base: &str, repository: &str) -> String {
    format!(
        "{}/repositories/{}/",
        api_base.trim_end_matches('/'),
        repository.trim_matches('/')
    )
}

/// JSON body of the login request.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn login_payload(credentials: &CredentialPair) -> Result<String> {
    serde_json::to_string(&LoginRequest {
        username: credentials.username(),
        password: credentials.password(),
    })
    .context("serializing login request")
}

/// JSON body `{"full_description": ...}` with `description` escaped as a
/// JSON string value.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn description_payload(description: &str) -> Result<String> {
    serde_json::to_string(&DescriptionUpdate {
        full_description: description,
    })
    .context("serializing description update")
}

/// Pull the session token out of a login response body.
///
/// # Errors
///
/// Returns `HelperError::AuthenticationFailure` if the body is not JSON or
/// carries no non-empty `token`.
pub fn parse_token(body: &str) -> Result<String, HelperError> {
    let response: LoginResponse = serde_json::from_str(body).map_err(|_| {
        HelperError::AuthenticationFailure("login response is not valid JSON".to_string())
    })?;
    match response.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(HelperError::AuthenticationFailure(
            "login response carried no token".to_string(),
        )),
    }
}
