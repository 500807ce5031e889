//! `ureq` implementation of the `HttpTransport` port.

use anyhow::{Context, Result};

use crate::application::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Blocking HTTP client backed by a shared `ureq::Agent`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("ci-helpers/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let method = match request.method {
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        };
        let mut req = self.agent.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }

        let response = match req.send_string(&request.body) {
            Ok(resp) | Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(t)) => {
                anyhow::bail!("{method} {} failed: {t}", request.url)
            }
        };
        let status = response.status();
        let body = response
            .into_string()
            .with_context(|| format!("reading response from {}", request.url))?;
        Ok(HttpResponse { status, body })
    }
}
