//! Request identification and inbound payload validation.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID for every inbound request
//! - Read the request ID back for log correlation
//! - Parse the body and extract a usable `story`
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The story is validated on its trimmed form but forwarded as sent

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::{InternalError, RelayError};

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Request ID from the headers, or `"unknown"` when absent.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse an inbound body and return its story prompt.
///
/// The body is decoded as UTF-8 with invalid sequences replaced and a leading
/// BOM dropped. Malformed JSON and a literal `null` body are internal
/// failures; any other body without a non-blank string `story` is a client
/// error.
pub fn parse_story(body: &[u8]) -> Result<String, RelayError> {
    let text = String::from_utf8_lossy(body);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let payload: Value = serde_json::from_str(text).map_err(InternalError::from)?;
    if payload.is_null() {
        return Err(InternalError::NullBody.into());
    }

    match payload.get("story") {
        Some(Value::String(story)) if !story.trim_matches(is_js_whitespace).is_empty() => {
            Ok(story.clone())
        }
        _ => Err(RelayError::InvalidStory),
    }
}

/// ECMAScript WhiteSpace and LineTerminator code points, the set
/// `String.prototype.trim` strips. Differs from `char::is_whitespace`:
/// includes U+FEFF, excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
