//! Session client: one-shot submission of code to the audit service.
//!
//! Single best-effort request model: no retry, no backoff, no timeout. The
//! blocking `submit` call is the only suspension point of the whole client,
//! so one submission is outstanding at most.

use std::collections::HashMap;

use miette::Diagnostic;
use reqwest::{
    StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::Deserialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::ResolvedService;
use crate::session::SessionResult;

#[derive(Debug, Error, Diagnostic)]
pub enum SubmitError {
    #[error("no code to analyze")]
    #[diagnostic(
        code(mend::client::empty_input),
        help("provide a non-empty source file or paste code into the session editor")
    )]
    EmptyInput,

    #[error("could not reach the audit service")]
    #[diagnostic(
        code(mend::client::transport),
        help("check that the audit service is running and that the configured endpoint is correct")
    )]
    Transport(#[source] reqwest::Error),

    #[error("audit service responded with status {status}")]
    #[diagnostic(
        code(mend::client::status),
        help("check that the audit service is running and that the configured endpoint is correct")
    )]
    Status { status: StatusCode },

    #[error("audit service returned a malformed session result")]
    #[diagnostic(
        code(mend::client::malformed_response),
        help("the response body does not match the session-result contract")
    )]
    MalformedResponse(#[source] serde_json::Error),

    #[error("failed to start the async runtime")]
    #[diagnostic(code(mend::client::runtime))]
    Runtime(#[source] std::io::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub status: String,

    #[serde(default)]
    pub service: String,
}

pub struct AuditClient {
    base_url: String,
    headers: HeaderMap,
}

impl AuditClient {
    pub fn new(service: &ResolvedService) -> Self {
        Self {
            base_url: service.url.trim_end_matches('/').to_string(),
            headers: parse_headers(&service.headers),
        }
    }

    pub fn audit_endpoint(&self) -> String {
        format!("{}/audit", self.base_url)
    }

    pub fn health_endpoint(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Submits one code blob for audit and returns the parsed session
    /// result. Blank input is rejected locally, before any network activity.
    pub fn submit(&self, code: &str) -> Result<SessionResult, SubmitError> {
        if code.trim().is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let endpoint = self.audit_endpoint();
        debug!(%endpoint, "submitting code for audit");

        let payload = serde_json::json!({ "code": code });

        let body = block_on_runtime_aware(async {
            let client = reqwest::Client::new();
            let response = client
                .post(&endpoint)
                .headers(self.headers.clone())
                .json(&payload)
                .send()
                .await
                .map_err(SubmitError::Transport)?;

            let status = response.status();
            if !status.is_success() {
                warn!(%status, "audit request rejected");
                return Err(SubmitError::Status { status });
            }

            response.bytes().await.map_err(SubmitError::Transport)
        })?;

        let result = serde_json::from_slice(&body).map_err(SubmitError::MalformedResponse)?;
        debug!("session result received");

        Ok(result)
    }

    /// Single health probe against the service.
    pub fn health(&self) -> Result<ServiceHealth, SubmitError> {
        let endpoint = self.health_endpoint();
        debug!(%endpoint, "probing audit service health");

        let body = block_on_runtime_aware(async {
            let client = reqwest::Client::new();
            let response = client
                .get(&endpoint)
                .headers(self.headers.clone())
                .send()
                .await
                .map_err(SubmitError::Transport)?;

            let status = response.status();
            if !status.is_success() {
                return Err(SubmitError::Status { status });
            }

            response.bytes().await.map_err(SubmitError::Transport)
        })?;

        serde_json::from_slice(&body).map_err(SubmitError::MalformedResponse)
    }
}

// best effort parsing of headers, anything invalid is ignored
fn parse_headers(headers: &HashMap<String, String>) -> HeaderMap {
    let mut parsed_headers = HeaderMap::new();

    for (key, value) in headers {
        let Ok(key) = HeaderName::try_from(key) else {
            continue;
        };

        let Ok(value) = HeaderValue::try_from(value) else {
            continue;
        };

        parsed_headers.insert(key, value);
    }

    parsed_headers
}

fn block_on_runtime_aware<F, T>(future: F) -> Result<T, SubmitError>
where
    F: std::future::Future<Output = Result<T, SubmitError>>,
{
    match Handle::try_current() {
        Ok(handle) => tokio::task::block_in_place(|| handle.block_on(future)),
        Err(_) => match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(future),
            Err(error) => Err(SubmitError::Runtime(error)),
        },
    }
}
