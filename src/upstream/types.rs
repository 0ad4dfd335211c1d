//! Wire types and errors for the workflow-execution API.

use axum::body::Bytes;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Logged in place of an upstream error body that could not be read as JSON.
pub const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error from external API";

/// Body of a workflow run request.
#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub story: &'a str,
}

/// Outcome of a completed upstream exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamReply {
    /// 2xx whose body parsed as JSON. Holds the original bytes so key order
    /// and formatting reach the caller unchanged.
    Success(Bytes),
    /// Non-2xx. The body is kept only if it parsed as JSON.
    Failure(UpstreamFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamFailure {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl UpstreamFailure {
    /// Text relayed to the caller: the body's `error` field when it holds a
    /// truthy value, otherwise the status reason phrase.
    pub fn message(&self) -> String {
        self.body
            .as_ref()
            .and_then(error_text)
            .unwrap_or_else(|| status_text(self.status))
    }

    /// Body as it should appear in diagnostics.
    pub fn log_body(&self) -> Value {
        match &self.body {
            Some(body) => body.clone(),
            None => serde_json::json!({ "error": UNKNOWN_UPSTREAM_ERROR }),
        }
    }
}

fn error_text(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(js_display(other)),
    }
}

/// String conversion as a JS template literal would apply it.
fn js_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Array#join renders null elements as empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Canonical reason phrase, falling back to the numeric code.
pub fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_str().to_string(),
    }
}

/// Errors that prevent a usable reply from the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The workflow endpoint URL could not be built.
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(String),

    /// Connection, TLS, or request construction failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON.
    #[error("upstream success body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
