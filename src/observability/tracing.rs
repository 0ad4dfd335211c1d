//! Request spans for `TraceLayer`.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request::request_id;

/// Span opened for each inbound request, keyed by its request ID.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request.headers()),
    )
}
