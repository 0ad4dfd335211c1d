//! Story relay handler.
//!
//! # Flow
//! ```text
//! POST /api/run
//!     → read + parse body            (failure → 500 generic)
//!     → validate story               (failure → 400, not logged)
//!     → workflow id, then API key    (missing → 500, logged)
//!     → WorkflowClient::run          (transport failure → 500 generic)
//!     → 2xx: body passed through with 200
//!       else: upstream status + "External API Error: ..."
//! ```

use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::http::request::{parse_story, request_id};
use crate::http::response::{InternalError, RelayError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::UpstreamReply;

/// Forward a story prompt to the configured workflow and relay the reply.
pub async fn run_story(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(request.headers());

    let (outcome, response) = match relay(&state, &request_id, request.into_body()).await {
        Ok(body) => (
            "success",
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response(),
        ),
        Err(err) => {
            if let RelayError::Internal(cause) = &err {
                tracing::error!(request_id = %request_id, error = %cause, "Relay request failed");
            }
            (err.outcome(), err.into_response())
        }
    };

    metrics::record_request(outcome, response.status().as_u16(), start_time);
    response
}

async fn relay(state: &AppState, request_id: &str, body: Body) -> Result<Bytes, RelayError> {
    let bytes = axum::body::to_bytes(body, state.config.limits.max_body_bytes)
        .await
        .map_err(InternalError::from)?;
    let story = parse_story(&bytes)?;

    let vars = &state.config.secrets;
    let workflow_id = state.secrets.get(&vars.workflow_id_var).ok_or_else(|| {
        tracing::error!(
            request_id = %request_id,
            variable = %vars.workflow_id_var,
            "Workflow ID environment variable is missing"
        );
        RelayError::MissingWorkflowId
    })?;
    let api_key = state.secrets.get(&vars.api_key_var).ok_or_else(|| {
        tracing::error!(
            request_id = %request_id,
            variable = %vars.api_key_var,
            "API key environment variable is missing"
        );
        RelayError::MissingApiKey
    })?;

    tracing::debug!(
        request_id = %request_id,
        workflow_id = %workflow_id,
        story_len = story.len(),
        "Relaying story"
    );

    let reply = state
        .upstream
        .run(&workflow_id, &api_key, &story)
        .await
        .map_err(InternalError::from)?;

    match reply {
        UpstreamReply::Success(body) => Ok(body),
        UpstreamReply::Failure(failure) => {
            tracing::error!(
                request_id = %request_id,
                status = failure.status.as_u16(),
                body = %failure.log_body(),
                "External API error"
            );
            // A `null` error body has no fields to read.
            if failure.body == Some(Value::Null) {
                return Err(InternalError::NullUpstreamErrorBody(failure.status).into());
            }
            Err(RelayError::Upstream {
                status: failure.status,
                message: failure.message(),
            })
        }
    }
}
