//! HTTP client for the workflow-execution API.
//!
//! # Responsibilities
//! - Build the per-workflow endpoint URL
//! - Send the story with bearer authentication
//! - Classify the reply as pass-through success or relayable failure
//!
//! One request per call: no retries, no timeout beyond the client default.

use reqwest::Client;
use serde::de::IgnoredAny;
use serde_json::Value;
use url::Url;

use crate::upstream::types::{RunRequest, UpstreamError, UpstreamFailure, UpstreamReply};

/// Client bound to one workflow API base URL.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http: Client,
    base_url: Url,
}

impl WorkflowClient {
    /// Create a client with a fresh connection pool.
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| UpstreamError::Endpoint(format!("'{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::Endpoint(format!(
                "'{}' cannot be used as a base URL",
                base_url
            )));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for a workflow run: the base URL with `workflow_id` appended as
    /// a single percent-encoded path segment.
    pub fn endpoint(&self, workflow_id: &str) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Endpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(workflow_id);
        Ok(url)
    }

    /// Run `workflow_id` with the given story.
    pub async fn run(
        &self,
        workflow_id: &str,
        api_key: &str,
        story: &str,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = self.endpoint(workflow_id)?;

        tracing::debug!(url = %url, "Calling workflow API");

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(&RunRequest { story })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body and a non-JSON body are treated alike.
            let body = match response.text().await {
                Ok(text) => serde_json::from_str::<Value>(&text).ok(),
                Err(_) => None,
            };
            return Ok(UpstreamReply::Failure(UpstreamFailure { status, body }));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body).map_err(UpstreamError::Decode)?;
        Ok(UpstreamReply::Success(body))
    }
}
