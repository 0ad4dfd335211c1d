//! Error taxonomy and its mapping to JSON responses.
//!
//! Every failure the relay can hit ends up as one [`RelayError`]; its
//! `Display` text is exactly what the caller sees under `"error"`.
//!
//! | Variant | Status |
//! |---|---|
//! | `InvalidStory` | 400 |
//! | `MissingWorkflowId`, `MissingApiKey` | 500 |
//! | `Upstream` | upstream's own status |
//! | `Internal` | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid story prompt")]
    InvalidStory,

    #[error("Internal Server Error: Missing Workflow ID")]
    MissingWorkflowId,

    #[error("Internal Server Error: Missing API Key")]
    MissingApiKey,

    /// The upstream answered with a non-2xx status.
    #[error("External API Error: {message}")]
    Upstream { status: StatusCode, message: String },

    /// Anything unanticipated; details go to the log, not the caller.
    #[error("Internal Server Error")]
    Internal(#[from] InternalError),
}

/// Causes behind a generic internal error.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),

    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is null")]
    NullBody,

    #[error("upstream returned {0} with a null error body")]
    NullUpstreamErrorBody(StatusCode),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidStory => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => *status,
            RelayError::MissingWorkflowId
            | RelayError::MissingApiKey
            | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Metrics label.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::InvalidStory => "invalid_story",
            RelayError::MissingWorkflowId | RelayError::MissingApiKey => "missing_config",
            RelayError::Upstream { .. } => "upstream_error",
            RelayError::Internal(_) => "internal_error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
